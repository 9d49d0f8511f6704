//! Applying moves to the board.
//!
//! `apply_operation` is atomic from the caller's perspective: it either
//! validates, eliminates and resolves, or returns an error with the board
//! unchanged.

pub mod engine;

pub use engine::{apply_operation, eliminate, resolve, OperationOutcome};
