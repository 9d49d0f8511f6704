//! Core simulator types: RNG and configuration.
//!
//! Everything that the board, rules and planner take as input but never
//! produce lives here.

pub mod config;
pub mod rng;

pub use config::{PriorityTable, RuleSet, SimulatorConfig};
pub use rng::{OrbRng, OrbRngState};
