//! One-ply greedy planner.

use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::moves::{enumerate_moves, Move};
use super::score::select_best;
use crate::board::Board;
use crate::core::{PriorityTable, RuleSet};
use crate::shapes::ShapeCatalog;

/// Statistics from the most recent planning call.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PlannerStats {
    /// Legal moves found by enumeration.
    pub candidates: usize,

    /// Score of the chosen move, `None` when stuck.
    pub best_score: Option<i64>,

    /// Time spent enumerating and scoring (microseconds).
    pub time_us: u64,
}

impl PlannerStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True when the last plan found no legal move.
    #[must_use]
    pub fn is_stuck(&self) -> bool {
        self.best_score.is_none()
    }
}

/// Greedy planner: enumerate all legal moves, play the best-scoring one.
#[derive(Clone, Debug)]
pub struct GreedyPlanner {
    priorities: PriorityTable,
    orb_bonus: i64,
    stats: PlannerStats,
}

impl GreedyPlanner {
    pub fn new(priorities: PriorityTable, orb_bonus: i64) -> Self {
        Self {
            priorities,
            orb_bonus,
            stats: PlannerStats::new(),
        }
    }

    #[must_use]
    pub fn priorities(&self) -> &PriorityTable {
        &self.priorities
    }

    #[must_use]
    pub fn orb_bonus(&self) -> i64 {
        self.orb_bonus
    }

    /// Statistics from the last call to [`GreedyPlanner::plan`].
    #[must_use]
    pub fn stats(&self) -> &PlannerStats {
        &self.stats
    }

    /// Choose the best move and its score, or `None` if the board is stuck.
    pub fn plan(
        &mut self,
        board: &Board,
        catalog: &ShapeCatalog,
        rules: &RuleSet,
    ) -> Option<(Move, i64)> {
        let start = Instant::now();
        self.stats.reset();

        let moves = enumerate_moves(board, catalog, rules);
        self.stats.candidates = moves.len();

        let best = select_best(&moves, &self.priorities, self.orb_bonus)
            .map(|(mv, score)| (mv.clone(), score));
        self.stats.best_score = best.as_ref().map(|(_, s)| *s);

        self.stats.time_us = start.elapsed().as_micros() as u64;
        best
    }
}

/// Best move on the board for the given rules, priorities and bonus.
#[must_use]
pub fn best_move(
    board: &Board,
    catalog: &ShapeCatalog,
    rules: &RuleSet,
    priorities: &PriorityTable,
    orb_bonus: i64,
) -> Option<Move> {
    let moves = enumerate_moves(board, catalog, rules);
    select_best(&moves, priorities, orb_bonus).map(|(mv, _)| mv.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Coord, OrbColor};

    #[test]
    fn test_plan_prefers_square() {
        let board = Board::filled(2, 7, OrbColor::White);
        let rules: RuleSet = ["1-orb", "2-orb", "4-orb-square"].into_iter().collect();
        let priorities = PriorityTable::new()
            .with("1-orb", 10)
            .with("2-orb", 50)
            .with("4-orb-square", 100);
        let mut planner = GreedyPlanner::new(priorities, 9);

        let (mv, score) = planner.plan(&board, &ShapeCatalog::standard(), &rules).unwrap();

        assert_eq!(mv.shape, "4-orb-square");
        assert_eq!(mv.coords[0], Coord::new(0, 0));
        assert_eq!(score, 100 + 36);
        assert_eq!(planner.stats().candidates, 14 + 19 + 6);
        assert_eq!(planner.stats().best_score, Some(136));
    }

    #[test]
    fn test_plan_stuck() {
        let board = Board::filled(2, 7, OrbColor::Gold);
        let mut planner = GreedyPlanner::new(PriorityTable::new(), 9);

        assert!(planner.plan(&board, &ShapeCatalog::standard(), &RuleSet::new()).is_none());
        assert!(planner.stats().is_stuck());
        assert_eq!(planner.stats().candidates, 0);
    }

    #[test]
    fn test_best_move_matches_planner() {
        let board = Board::from_colors(&[
            &[OrbColor::Gold, OrbColor::Black, OrbColor::Black],
            &[OrbColor::Gold, OrbColor::Black, OrbColor::White],
        ]);
        let rules: RuleSet = ["1-orb", "2-orb", "3-orb-any"].into_iter().collect();
        let priorities = PriorityTable::new().with("2-orb", 50);
        let catalog = ShapeCatalog::standard();

        let direct = best_move(&board, &catalog, &rules, &priorities, 9).unwrap();
        let (planned, _) = GreedyPlanner::new(priorities, 9)
            .plan(&board, &catalog, &rules)
            .unwrap();

        assert_eq!(direct, planned);
        assert_eq!(direct.shape, "2-orb_v");
        assert_eq!(direct.color, OrbColor::Gold);
    }
}
