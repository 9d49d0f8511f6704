//! Move planning.
//!
//! ## Overview
//!
//! Planning looks exactly one move ahead:
//!
//! 1. `moves`: brute-force every anchor and template to list legal moves
//! 2. `score`: priority of the shape plus a per-orb exploration bonus
//! 3. `greedy`: keep the strictly best move, first one on ties
//!
//! ```
//! use soul_board::board::{Board, OrbColor};
//! use soul_board::core::{PriorityTable, RuleSet};
//! use soul_board::planner::GreedyPlanner;
//! use soul_board::shapes::ShapeCatalog;
//!
//! let board = Board::filled(2, 7, OrbColor::Gold);
//! let rules: RuleSet = ["1-orb", "2-orb"].into_iter().collect();
//! let mut planner = GreedyPlanner::new(PriorityTable::new().with("2-orb", 50), 9);
//!
//! let (best, score) = planner.plan(&board, &ShapeCatalog::standard(), &rules).unwrap();
//! assert_eq!(best.shape, "2-orb_v");
//! assert_eq!(score, 68);
//! ```

pub mod greedy;
pub mod moves;
pub mod score;

pub use greedy::{best_move, GreedyPlanner, PlannerStats};
pub use moves::{enumerate_moves, Move};
pub use score::{priority_of, score, select_best};
