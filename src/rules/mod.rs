//! Move legality.
//!
//! - `skill_gate`: whether a matched shape is enabled by the rule set
//! - `validator`: the full fail-fast check of a user selection

pub mod skill_gate;
pub mod validator;

pub use skill_gate::{authorize, wildcard_rule};
pub use validator::{validate, ValidatedOperation};
