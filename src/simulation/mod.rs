//! Simulation runs: repeated plan-and-apply turns with statistics.

pub mod session;
pub mod stats;

pub use session::Simulation;
pub use stats::{RunReport, RunStatus, SimulationStats, TurnRecord};
