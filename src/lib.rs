//! # soul-board
//!
//! A soul orb board simulator with a greedy move planner.
//!
//! A fixed grid of colored orbs is cleared by selecting same-colored cells
//! that form one of a closed catalog of shapes. Cleared cells fall left and
//! are refilled at random. The planner enumerates every legal selection and
//! plays the one with the best score.
//!
//! ## Design Principles
//!
//! 1. **Shapes Are Data**: Templates are offset sets in a table, matched by
//!    value equality after normalization.
//!
//! 2. **Explicit Randomness**: Every call that draws colors takes an
//!    [`OrbRng`]. The same seed reproduces the same run.
//!
//! 3. **Errors Are Values**: Validation returns an [`OperationError`] and
//!    leaves the board unchanged.
//!
//! 4. **One Ply**: No lookahead and no chain reactions after refill.
//!
//! ## Modules
//!
//! - `core`: RNG and configuration (rule sets, priority tables)
//! - `board`: Orb colors, coordinates and the grid
//! - `shapes`: Shape catalog and matching
//! - `rules`: Skill authorization and selection validation
//! - `resolution`: Elimination, gravity and refill
//! - `planner`: Move enumeration, scoring and greedy selection
//! - `simulation`: Turn loop and run statistics
//!
//! ## Example
//!
//! ```
//! use soul_board::{apply_operation, best_move, new_board};
//! use soul_board::{OrbRng, PriorityTable, RuleSet, ShapeCatalog};
//!
//! let mut rng = OrbRng::new(42);
//! let mut board = new_board(2, 7, &mut rng);
//! let catalog = ShapeCatalog::standard();
//! let rules: RuleSet = ["1-orb", "2-orb"].into_iter().collect();
//! let priorities = PriorityTable::new().with("2-orb", 50);
//!
//! let mv = best_move(&board, &catalog, &rules, &priorities, 9).unwrap();
//! let outcome = apply_operation(&mut board, &mv.coords, &catalog, &rules, &mut rng).unwrap();
//! assert_eq!(outcome.shape, mv.shape);
//! ```

pub mod core;
pub mod board;
pub mod error;
pub mod shapes;
pub mod rules;
pub mod resolution;
pub mod planner;
pub mod simulation;

// Re-export commonly used types
pub use crate::core::{OrbRng, OrbRngState, PriorityTable, RuleSet, SimulatorConfig};

pub use crate::board::{Board, Coord, OrbColor, SoulOrb};

pub use crate::error::{BoardError, OperationError};

pub use crate::shapes::{group_name, identify, normalize, ShapeCatalog, ShapeKey, ShapeTemplate};

pub use crate::rules::{authorize, validate, ValidatedOperation};

pub use crate::resolution::{apply_operation, eliminate, resolve, OperationOutcome};

pub use crate::planner::{
    best_move, enumerate_moves, score, select_best, GreedyPlanner, Move, PlannerStats,
};

pub use crate::simulation::{RunReport, RunStatus, Simulation, SimulationStats, TurnRecord};

/// Create a board with every cell drawn uniformly from the active colors.
#[must_use]
pub fn new_board(rows: usize, cols: usize, rng: &mut OrbRng) -> Board {
    Board::random(rows, cols, rng)
}
