//! Configuration module for the breach simulator.

mod debug;
mod persistence;
mod plot;
mod simulation;
mod tour;

pub use debug::DF;
pub use persistence::PERSISTENCE;
pub use plot::CHART;
pub use simulation::{MARKET, SIMULATION};
pub use tour::TOUR;
