use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::config::SIMULATION;

/// Where the drain timer is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display)]
pub enum DrainPhase {
    #[default]
    #[strum(to_string = "idle")]
    Idle,
    #[strum(to_string = "draining")]
    Draining,
    #[strum(to_string = "settling")]
    Settling,
    #[strum(to_string = "drained")]
    Drained,
}

/// Everything the screen needs to know about one simulated session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    pub balance: i64,
    pub breach_detected: bool,
    pub draining: bool,
    pub fully_drained: bool,
    pub insufficient_funds_notice: bool,
    pub phase: DrainPhase,
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::with_balance(SIMULATION.starting_balance)
    }
}

impl SimulationState {
    pub fn with_balance(balance: i64) -> Self {
        Self {
            balance: balance.max(0),
            breach_detected: false,
            draining: false,
            fully_drained: false,
            insufficient_funds_notice: false,
            phase: DrainPhase::Idle,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.balance == 0
    }
}

/// One drain tick. Never goes below zero.
pub fn drained_balance(previous: i64, step: i64) -> i64 {
    previous.saturating_sub(step).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_step_clamps_at_zero() {
        assert_eq!(drained_balance(50_000, 10_000), 40_000);
        assert_eq!(drained_balance(10_000, 10_000), 0);
        assert_eq!(drained_balance(4_000, 10_000), 0);
        assert_eq!(drained_balance(0, 10_000), 0);
    }

    #[test]
    fn fresh_state_matches_page_load() {
        let s = SimulationState::default();
        assert_eq!(s.balance, 50_000);
        assert_eq!(s.phase, DrainPhase::Idle);
        assert!(!s.breach_detected && !s.draining && !s.fully_drained);
        assert!(!s.insufficient_funds_notice);
    }

    #[test]
    fn state_serializes_for_inspection() {
        let s = SimulationState::with_balance(20_000);
        let json = serde_json::to_string(&s).unwrap();
        assert!(json.contains("\"balance\":20000"));
        let back: SimulationState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}
