mod core;
mod messages;
mod state;
pub mod timers;

pub use core::BreachEngine;
pub use messages::{BreachTimer, SimEvent, SubmitOutcome};
pub use state::{DrainPhase, SimulationState, drained_balance};
pub use timers::{Fired, TimerHandle, TimerTable};
