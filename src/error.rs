use crate::board::{Coord, OrbColor};
use crate::shapes::ShapeKey;

/// Reasons a selection cannot be applied to the board.
///
/// All variants are recoverable; the board is never modified when one is
/// returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OperationError {
    #[error("operation has no coordinates")]
    EmptyOperation,

    #[error("coordinate {coord} is outside the board")]
    Bounds { coord: Coord },

    #[error("cannot clear an empty cell")]
    EmptyCell,

    #[error("orb colors differ: expected {expected}, got {actual} at {coord}")]
    ColorMismatch {
        expected: OrbColor,
        actual: OrbColor,
        coord: Coord,
    },

    #[error("selection matches no known shape (normalized to {normalized})")]
    UnknownShape { normalized: ShapeKey },

    #[error("shape '{shape}' (group: {group}) is not enabled by the current skills")]
    UnauthorizedShape { shape: String, group: String },
}

/// Reasons a board cannot be built from raw dimensions and cells.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board must have at least one cell, got {rows}x{cols}")]
    NoCells { rows: usize, cols: usize },

    #[error("board needs {expected} cells, got {actual}")]
    CellCount { expected: usize, actual: usize },
}
