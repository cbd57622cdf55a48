use std::time::Duration;

use crate::{
    config::{DF, SIMULATION},
    domain::{Order, OrderHistory, OrderSide, OrderTicket},
    engine::{
        BreachTimer, DrainPhase, SimEvent, SimulationState, SubmitOutcome,
        state::drained_balance,
        timers::{TimerHandle, TimerTable},
    },
    models::{PopupSet, TradeForm},
    utils::now_utc,
};

/// Owns the breach simulation: balance, flags, order history and every
/// timer that mutates them.
///
/// All mutation goes through `submit_order`, `advance` and `teardown`, so the
/// history cap and the zero floor on the balance are enforced here and
/// nowhere else. `now` is the time since the session started.
pub struct BreachEngine {
    state: SimulationState,
    history: OrderHistory,
    timers: TimerTable<BreachTimer>,
    notice_timer: Option<TimerHandle>,
}

impl Default for BreachEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl BreachEngine {
    pub fn new() -> Self {
        Self::with_balance(SIMULATION.starting_balance)
    }

    pub fn with_balance(balance: i64) -> Self {
        Self {
            state: SimulationState::with_balance(balance),
            history: OrderHistory::new(SIMULATION.history_capacity),
            timers: TimerTable::new(),
            notice_timer: None,
        }
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn history(&self) -> &OrderHistory {
        &self.history
    }

    pub fn phase(&self) -> DrainPhase {
        self.state.phase
    }

    pub fn popups(&self) -> PopupSet {
        PopupSet::from_state(&self.state)
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Trade button handler. Reads the form, and clears it when an order is
    /// recorded. Bad input is a silent no-op.
    pub fn submit_order(
        &mut self,
        side: OrderSide,
        form: &mut TradeForm,
        now: Duration,
    ) -> SubmitOutcome {
        let outcome = match form.ticket(side) {
            Ok(ticket) => self.submit_ticket(ticket, now),
            Err(e) => {
                if DF.log_orders {
                    log::debug!("Ignoring {} order: {:#}", side, e);
                }
                SubmitOutcome::Rejected {
                    reason: format!("{:#}", e),
                }
            }
        };
        if outcome.is_accepted() {
            form.clear();
        }
        outcome
    }

    pub fn submit_ticket(&mut self, ticket: OrderTicket, now: Duration) -> SubmitOutcome {
        if self.state.is_empty() {
            self.raise_insufficient_funds(now);
            return SubmitOutcome::InsufficientFunds;
        }

        self.state.breach_detected = true;
        let started_drain = self.start_drain(now);

        let order = Order::new(ticket, now_utc());
        let order_id = order.id.clone();
        if DF.log_orders {
            log::info!(
                "Order recorded: {} {} @ {:?} (breach drain started: {})",
                order.headline(),
                order.quantity,
                order.price,
                started_drain
            );
        }
        if let Some(evicted) = self.history.record(order) {
            log::debug!("Order {} fell out of history", evicted.id);
        }

        SubmitOutcome::Accepted {
            order_id,
            started_drain,
        }
    }

    /// Fires every timer due at or before `now`, earliest first.
    pub fn advance(&mut self, now: Duration) -> Vec<SimEvent> {
        let mut events = Vec::new();
        while let Some(fired) = self.timers.pop_due(now) {
            match fired.kind {
                BreachTimer::DrainTick => self.on_drain_tick(fired.at, &mut events),
                BreachTimer::Settle => self.on_settled(&mut events),
                BreachTimer::NoticeClear => {
                    self.state.insufficient_funds_notice = false;
                    self.notice_timer = None;
                    events.push(SimEvent::NoticeCleared);
                }
            }
        }
        events
    }

    /// Drops every pending timer. Call when the screen goes away.
    pub fn teardown(&mut self) {
        let dropped = self.timers.cancel_all();
        self.notice_timer = None;
        if dropped > 0 && DF.log_simulation_events {
            log::info!("Breach engine torn down with {} pending timers", dropped);
        }
    }

    fn start_drain(&mut self, now: Duration) -> bool {
        if self.state.phase != DrainPhase::Idle {
            return false;
        }
        self.state.draining = true;
        self.set_phase(DrainPhase::Draining, &mut Vec::new());
        self.timers
            .schedule_repeating(BreachTimer::DrainTick, now, SIMULATION.drain_period);
        true
    }

    fn raise_insufficient_funds(&mut self, now: Duration) {
        // A second press restarts the countdown rather than stacking clears.
        if let Some(previous) = self.notice_timer.take() {
            self.timers.cancel(previous);
        }
        self.state.insufficient_funds_notice = true;
        self.notice_timer = Some(self.timers.schedule_once(
            BreachTimer::NoticeClear,
            now,
            SIMULATION.notice_duration,
        ));
        if DF.log_simulation_events {
            log::info!("Insufficient funds notice raised");
        }
    }

    fn on_drain_tick(&mut self, at: Duration, events: &mut Vec<SimEvent>) {
        if self.state.phase != DrainPhase::Draining {
            self.timers.cancel_kind(BreachTimer::DrainTick);
            return;
        }

        self.state.balance = drained_balance(self.state.balance, SIMULATION.drain_step);
        events.push(SimEvent::BalanceDrained {
            balance: self.state.balance,
        });
        if DF.log_simulation_events {
            log::info!("💸 Drained to ${}", self.state.balance);
        }

        if self.state.balance == 0 {
            self.timers.cancel_kind(BreachTimer::DrainTick);
            self.set_phase(DrainPhase::Settling, events);
            self.timers
                .schedule_once(BreachTimer::Settle, at, SIMULATION.settle_delay);
        }
    }

    fn on_settled(&mut self, events: &mut Vec<SimEvent>) {
        self.state.fully_drained = true;
        self.state.draining = false;
        self.set_phase(DrainPhase::Drained, events);
    }

    fn set_phase(&mut self, to: DrainPhase, events: &mut Vec<SimEvent>) {
        let from = self.state.phase;
        if from == to {
            return;
        }
        self.state.phase = to;
        if DF.log_simulation_events {
            log::info!("Breach phase {} -> {}", from, to);
        }
        events.push(SimEvent::PhaseChanged { from, to });
    }
}
