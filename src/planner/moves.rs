//! Candidate moves and exhaustive move enumeration.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{Board, Coord, OrbColor};
use crate::core::RuleSet;
use crate::rules::authorize;
use crate::shapes::{identify, ShapeCatalog, ShapeKey};

/// A legal selection on the current board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    /// Selected cells, in template definition order.
    pub coords: SmallVec<[Coord; 6]>,
    /// Matched shape name.
    pub shape: String,
    /// Shared color of the selected orbs.
    pub color: OrbColor,
    /// Number of orbs the move clears.
    pub orb_count: usize,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.shape, self.color)
    }
}

/// Enumerate every legal move on the board.
///
/// Anchors are visited row-major and templates in catalog order, so the
/// result order is deterministic. Each cell set appears at most once.
/// An empty rule set or a board of empty cells yields no moves.
#[must_use]
pub fn enumerate_moves(board: &Board, catalog: &ShapeCatalog, rules: &RuleSet) -> Vec<Move> {
    let mut moves = Vec::new();
    if rules.is_empty() {
        return moves;
    }

    let mut seen: FxHashSet<ShapeKey> = FxHashSet::default();

    for anchor in board.coords() {
        for template in catalog.iter() {
            let coords: SmallVec<[Coord; 6]> = template
                .offsets
                .iter()
                .map(|o| anchor.offset(o.row, o.col))
                .collect();

            if !coords.iter().all(|&c| board.in_bounds(c)) {
                continue;
            }

            let Some(color) = board.color_at(coords[0]) else {
                continue;
            };
            if color.is_empty() {
                continue;
            }
            if coords[1..].iter().any(|&c| board.color_at(c) != Some(color)) {
                continue;
            }

            let Ok(matched) = identify(catalog, &coords) else {
                continue;
            };
            if !authorize(&matched.name, coords.len(), rules) {
                continue;
            }

            if seen.insert(ShapeKey::from_offsets(coords.iter().copied())) {
                moves.push(Move {
                    shape: matched.name.clone(),
                    orb_count: coords.len(),
                    color,
                    coords,
                });
            }
        }
    }

    moves
}
