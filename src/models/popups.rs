use crate::config::SIMULATION;
use crate::engine::SimulationState;

/// Numbers shown on the breach progress overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreachProgress {
    /// 0..=100
    pub percent: f64,
    pub stolen: i64,
}

impl BreachProgress {
    pub fn from_balance(balance: i64) -> Self {
        Self {
            percent: progress_percent(balance),
            stolen: stolen_amount(balance),
        }
    }

    pub fn fraction(&self) -> f32 {
        (self.percent / 100.0) as f32
    }
}

/// Which transient overlays are on screen.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PopupSet {
    pub breach_progress: Option<BreachProgress>,
    pub insufficient_funds: bool,
    pub drained_modal: bool,
}

impl PopupSet {
    pub fn from_state(state: &SimulationState) -> Self {
        let breach_progress = (state.breach_detected && !state.fully_drained)
            .then(|| BreachProgress::from_balance(state.balance));
        Self {
            breach_progress,
            insufficient_funds: state.insufficient_funds_notice,
            drained_modal: state.fully_drained,
        }
    }

    pub fn any_visible(&self) -> bool {
        self.breach_progress.is_some() || self.insufficient_funds || self.drained_modal
    }
}

/// `100 - balance / 500`, clamped to [0, 100].
///
/// The divisor assumes a 50_000 start; a different starting balance would
/// desynchronise the bar from the real fraction.
pub fn progress_percent(balance: i64) -> f64 {
    (100.0 - balance as f64 / SIMULATION.progress_divisor).clamp(0.0, 100.0)
}

pub fn stolen_amount(balance: i64) -> i64 {
    SIMULATION.starting_balance - balance
}
