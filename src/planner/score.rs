//! Move scoring and greedy selection.
//!
//! Score = priority (value of triggering the shape) + exploration
//! (`orb_bonus` per cleared orb).

use super::moves::Move;
use crate::core::PriorityTable;
use crate::shapes::group_name;

/// Priority component: exact shape entry, else group entry, else 0.
#[must_use]
pub fn priority_of(shape: &str, priorities: &PriorityTable) -> i64 {
    priorities
        .get(shape)
        .or_else(|| priorities.get(group_name(shape)))
        .unwrap_or(0)
}

/// Score a move.
#[must_use]
pub fn score(mv: &Move, priorities: &PriorityTable, orb_bonus: i64) -> i64 {
    priority_of(&mv.shape, priorities) + orb_bonus * mv.orb_count as i64
}

/// Pick the highest-scoring move.
///
/// Ties keep the first move in the given order. Returns `None` for an empty
/// slice, which callers treat as a stuck board.
#[must_use]
pub fn select_best<'a>(
    moves: &'a [Move],
    priorities: &PriorityTable,
    orb_bonus: i64,
) -> Option<(&'a Move, i64)> {
    let mut best: Option<(&Move, i64)> = None;
    for mv in moves {
        let s = score(mv, priorities, orb_bonus);
        if best.map_or(true, |(_, top)| s > top) {
            best = Some((mv, s));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Coord, OrbColor};
    use smallvec::smallvec;

    fn mv(shape: &str, orb_count: usize, col: i32) -> Move {
        Move {
            coords: (0..orb_count as i32).map(|i| Coord::new(0, col + i)).collect(),
            shape: shape.to_string(),
            color: OrbColor::Gold,
            orb_count,
        }
    }

    fn table() -> PriorityTable {
        PriorityTable::new()
            .with("1-orb", 10)
            .with("2-orb", 50)
            .with("2-orb_h", 55)
            .with("4-orb-square", 100)
    }

    #[test]
    fn test_exact_beats_group() {
        assert_eq!(priority_of("2-orb_h", &table()), 55);
        assert_eq!(priority_of("2-orb_v", &table()), 50);
        assert_eq!(priority_of("3-orb-I_h", &table()), 0);
    }

    #[test]
    fn test_score_adds_exploration() {
        let m = mv("2-orb_v", 2, 0);
        assert_eq!(score(&m, &table(), 9), 50 + 18);
        assert_eq!(score(&m, &PriorityTable::new(), 9), 18);
    }

    #[test]
    fn test_score_is_pure() {
        let m = mv("1-orb", 1, 3);
        assert_eq!(score(&m, &table(), 4), score(&m, &table(), 4));
    }

    #[test]
    fn test_select_best() {
        let moves = vec![mv("1-orb", 1, 0), mv("2-orb_v", 2, 1), mv("1-orb", 1, 5)];
        let (best, s) = select_best(&moves, &table(), 9).unwrap();
        assert_eq!(best.shape, "2-orb_v");
        assert_eq!(s, 68);
    }

    #[test]
    fn test_ties_keep_first() {
        let moves = vec![mv("1-orb", 1, 4), mv("1-orb", 1, 0)];
        let (best, _) = select_best(&moves, &table(), 0).unwrap();
        assert_eq!(best.coords.as_slice(), &[Coord::new(0, 4)]);
    }

    #[test]
    fn test_empty_is_stuck() {
        assert!(select_best(&[], &table(), 9).is_none());
    }

    #[test]
    fn test_bonus_can_outweigh_priority() {
        let single = Move {
            coords: smallvec![Coord::new(0, 0)],
            ..mv("1-orb", 1, 0)
        };
        let moves = vec![single, mv("6-orb-Rect", 6, 0)];
        let (best, _) = select_best(&moves, &table(), 9).unwrap();
        assert_eq!(best.shape, "6-orb-Rect");
    }
}
