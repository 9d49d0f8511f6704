//! Per-run statistics and turn history.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{Coord, OrbColor};

/// One played turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// 1-based turn number.
    pub turn: u32,
    pub shape: String,
    pub color: OrbColor,
    pub coords: SmallVec<[Coord; 6]>,
    /// Planner score credited for the turn.
    pub score: i64,
}

impl std::fmt::Display for TurnRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "T{}: {} ({}) [+ {}]", self.turn, self.shape, self.color, self.score)
    }
}

/// How a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunStatus {
    /// Every requested turn was played.
    Finished,
    /// The planner found no legal move before the turn limit.
    Stuck,
}

/// Summary of one [`Simulation::run_experiment`](super::Simulation::run_experiment) call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub status: RunStatus,
    /// Turns played by this call.
    pub turns_completed: u32,
    /// Run-wide score after this call.
    pub total_score: i64,
    pub average_score: f64,
    /// Wall time of this call.
    pub duration_us: u64,
}

/// Aggregate statistics for a simulation run.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SimulationStats {
    /// Turns successfully played.
    pub turns: u32,

    /// Sum of planner scores over all turns.
    pub total_score: i64,

    /// Total orbs cleared.
    pub orbs_cleared: u64,

    /// Set once the planner found no legal move.
    pub stuck: bool,

    /// Turn number at which the planner first found no legal move.
    pub stuck_at: Option<u32>,

    /// Time spent planning and applying turns, in microseconds.
    pub elapsed_us: u64,

    /// Times each shape was played, keyed by full shape name.
    pub shape_counts: FxHashMap<String, u32>,

    /// Times a move of each orb count was played.
    pub clears_by_size: FxHashMap<usize, u32>,
}

impl SimulationStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a played turn.
    pub fn record(&mut self, turn: &TurnRecord) {
        self.turns += 1;
        self.total_score += turn.score;
        self.orbs_cleared += turn.coords.len() as u64;
        *self.shape_counts.entry(turn.shape.clone()).or_insert(0) += 1;
        *self.clears_by_size.entry(turn.coords.len()).or_insert(0) += 1;
    }

    /// Mark the run stuck at the next turn number.
    pub fn record_stuck(&mut self) {
        self.stuck = true;
        if self.stuck_at.is_none() {
            self.stuck_at = Some(self.turns + 1);
        }
    }

    /// Mean score per played turn.
    #[must_use]
    pub fn average_score(&self) -> f64 {
        if self.turns == 0 {
            0.0
        } else {
            self.total_score as f64 / self.turns as f64
        }
    }

    /// Times a move clearing exactly `orb_count` orbs was played.
    #[must_use]
    pub fn clears_of_size(&self, orb_count: usize) -> u32 {
        self.clears_by_size.get(&orb_count).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn record(turn: u32, shape: &str, cells: usize, score: i64) -> TurnRecord {
        TurnRecord {
            turn,
            shape: shape.to_string(),
            color: OrbColor::Gold,
            coords: (0..cells as i32).map(|c| Coord::new(0, c)).collect(),
            score,
        }
    }

    #[test]
    fn test_stats_default() {
        let stats = SimulationStats::new();
        assert_eq!(stats.turns, 0);
        assert_eq!(stats.average_score(), 0.0);
        assert!(!stats.stuck);
    }

    #[test]
    fn test_record_accumulates() {
        let mut stats = SimulationStats::new();
        stats.record(&record(1, "2-orb_v", 2, 68));
        stats.record(&record(2, "4-orb-square", 4, 136));
        stats.record(&record(3, "2-orb_h", 2, 68));

        assert_eq!(stats.turns, 3);
        assert_eq!(stats.total_score, 272);
        assert_eq!(stats.orbs_cleared, 8);
        assert_eq!(stats.clears_of_size(2), 2);
        assert_eq!(stats.clears_of_size(1), 0);
        assert_eq!(stats.shape_counts.get("4-orb-square"), Some(&1));
        assert!((stats.average_score() - 272.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_stuck_marker_keeps_first_turn() {
        let mut stats = SimulationStats::new();
        stats.record(&record(1, "1-orb", 1, 19));
        stats.record_stuck();
        stats.record_stuck();

        assert!(stats.stuck);
        assert_eq!(stats.stuck_at, Some(2));
        assert_eq!(stats.turns, 1);
    }

    #[test]
    fn test_turn_record_display() {
        let turn = TurnRecord {
            coords: smallvec![Coord::new(0, 0), Coord::new(1, 0)],
            ..record(4, "2-orb_v", 0, 68)
        };
        assert_eq!(turn.to_string(), "T4: 2-orb_v (GOLD) [+ 68]");
    }

    #[test]
    fn test_stats_serialization() {
        let mut stats = SimulationStats::new();
        stats.record(&record(1, "1-orb", 1, 19));

        let json = serde_json::to_string(&stats).unwrap();
        let deserialized: SimulationStats = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.turns, 1);
        assert_eq!(deserialized.clears_of_size(1), 1);
    }
}
