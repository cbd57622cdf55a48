use crate::engine::DrainPhase;

/// What a submission did to the session.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Bad input. Nothing changed.
    Rejected { reason: String },
    /// Balance was already zero; the notice went up instead of an order.
    InsufficientFunds,
    /// Order recorded. `started_drain` is false when a drain was already running.
    Accepted { order_id: String, started_drain: bool },
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

/// Timers the breach engine owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreachTimer {
    DrainTick,
    Settle,
    NoticeClear,
}

/// Something the engine did while time advanced.
#[derive(Debug, Clone, PartialEq)]
pub enum SimEvent {
    BalanceDrained { balance: i64 },
    PhaseChanged { from: DrainPhase, to: DrainPhase },
    NoticeCleared,
}
