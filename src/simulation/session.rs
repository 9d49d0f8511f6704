//! Turn-by-turn simulation loop.
//!
//! Owns the board and RNG for one run. Each turn the greedy planner picks a
//! move, the move is applied through [`apply_operation`], and the result is
//! recorded.

use std::time::Instant;

use crate::board::{Board, Coord};
use crate::core::{OrbRng, RuleSet, SimulatorConfig};
use crate::error::OperationError;
use crate::planner::{GreedyPlanner, PlannerStats};
use crate::resolution::{apply_operation, OperationOutcome};
use crate::shapes::ShapeCatalog;

use super::stats::{RunReport, RunStatus, SimulationStats, TurnRecord};

/// A single simulation run.
pub struct Simulation {
    board: Board,
    rng: OrbRng,
    catalog: ShapeCatalog,
    skills: RuleSet,
    planner: GreedyPlanner,
    stats: SimulationStats,
    history: Vec<TurnRecord>,
}

impl Simulation {
    /// Create a run with a random initial board.
    ///
    /// Without a configured seed, one is drawn from entropy and kept in
    /// [`Simulation::seed`].
    pub fn new(config: SimulatorConfig) -> Self {
        let mut rng = OrbRng::from_optional_seed(config.seed);
        let board = Board::random(config.rows, config.cols, &mut rng);
        Self::with_board(config, board, rng)
    }

    /// Create a run from an explicit board and RNG.
    pub fn with_board(config: SimulatorConfig, board: Board, rng: OrbRng) -> Self {
        Self {
            board,
            rng,
            catalog: ShapeCatalog::standard(),
            skills: config.skills,
            planner: GreedyPlanner::new(config.priorities, config.orb_bonus),
            stats: SimulationStats::new(),
            history: Vec::new(),
        }
    }

    /// Seed of the run's RNG stream.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn catalog(&self) -> &ShapeCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn skills(&self) -> &RuleSet {
        &self.skills
    }

    /// Replace the enabled skills for subsequent turns.
    pub fn set_skills(&mut self, skills: RuleSet) {
        self.skills = skills;
    }

    #[must_use]
    pub fn stats(&self) -> &SimulationStats {
        &self.stats
    }

    /// Planner statistics from the last turn.
    #[must_use]
    pub fn planner_stats(&self) -> &PlannerStats {
        self.planner.stats()
    }

    #[must_use]
    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    /// Played turns as text, with a closing marker if the run got stuck.
    #[must_use]
    pub fn log(&self) -> Vec<String> {
        let mut lines: Vec<String> = self.history.iter().map(ToString::to_string).collect();
        if let Some(turn) = self.stats.stuck_at {
            lines.push(format!("T{turn}: no legal move (Stuck)"));
        }
        lines
    }

    /// Apply a caller-chosen selection. Not scored or recorded.
    pub fn apply(&mut self, coords: &[Coord]) -> Result<OperationOutcome, OperationError> {
        apply_operation(&mut self.board, coords, &self.catalog, &self.skills, &mut self.rng)
    }

    /// Plan and play one turn.
    ///
    /// Returns `Ok(None)` when no legal move exists; the run is then marked
    /// stuck and the board is left as is.
    pub fn run_turn(&mut self) -> Result<Option<TurnRecord>, OperationError> {
        let start = Instant::now();
        let result = self.play_turn();
        self.stats.elapsed_us += start.elapsed().as_micros() as u64;
        result
    }

    fn play_turn(&mut self) -> Result<Option<TurnRecord>, OperationError> {
        let Some((mv, score)) = self.planner.plan(&self.board, &self.catalog, &self.skills) else {
            self.stats.record_stuck();
            return Ok(None);
        };

        let outcome = apply_operation(
            &mut self.board,
            &mv.coords,
            &self.catalog,
            &self.skills,
            &mut self.rng,
        )?;

        let record = TurnRecord {
            turn: self.stats.turns + 1,
            shape: outcome.shape,
            color: outcome.color,
            coords: mv.coords,
            score,
        };
        self.stats.record(&record);
        self.history.push(record.clone());
        Ok(Some(record))
    }

    /// Play up to `turns` turns, stopping early when stuck.
    ///
    /// Returns the records of the turns played by this call.
    pub fn run(&mut self, turns: u32) -> Result<Vec<TurnRecord>, OperationError> {
        let mut played = Vec::new();
        for _ in 0..turns {
            match self.run_turn()? {
                Some(record) => played.push(record),
                None => break,
            }
        }
        Ok(played)
    }

    /// Play up to `max_turns` turns and summarize the outcome.
    pub fn run_experiment(&mut self, max_turns: u32) -> Result<RunReport, OperationError> {
        let start = Instant::now();
        let played = self.run(max_turns)?;
        let turns_completed = played.len() as u32;

        Ok(RunReport {
            status: if turns_completed == max_turns {
                RunStatus::Finished
            } else {
                RunStatus::Stuck
            },
            turns_completed,
            total_score: self.stats.total_score,
            average_score: self.stats.average_score(),
            duration_us: start.elapsed().as_micros() as u64,
        })
    }
}
