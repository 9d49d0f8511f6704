//! The orb board: a fixed rows x cols matrix of orbs, stored row-major.

use serde::{Deserialize, Serialize};

use super::orb::{OrbColor, SoulOrb};
use crate::core::OrbRng;
use crate::error::BoardError;

/// A `(row, col)` board position.
///
/// Signed so that selections reaching past the top or left edge can be
/// represented and rejected by validation rather than by the type system.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Translate by `(dr, dc)`.
    #[inline]
    #[must_use]
    pub const fn offset(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Fixed-size orb board.
///
/// Every cell always holds an orb; cleared cells hold [`SoulOrb::EMPTY`]
/// until the refill pass replaces them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<SoulOrb>,
}

/// Unchecked wire form of [`Board`].
#[derive(Deserialize)]
struct RawBoard {
    rows: usize,
    cols: usize,
    cells: Vec<SoulOrb>,
}

impl TryFrom<RawBoard> for Board {
    type Error = BoardError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        Board::from_cells(raw.rows, raw.cols, raw.cells)
    }
}

impl Board {
    /// Create a board with every cell set to `color`.
    #[must_use]
    pub fn filled(rows: usize, cols: usize, color: OrbColor) -> Self {
        assert!(rows > 0 && cols > 0, "Board must have at least one cell");
        Self {
            rows,
            cols,
            cells: vec![SoulOrb::new(color); rows * cols],
        }
    }

    /// Create a board with every cell drawn uniformly from the active colors.
    ///
    /// Cells are drawn in row-major order.
    #[must_use]
    pub fn random(rows: usize, cols: usize, rng: &mut OrbRng) -> Self {
        let mut board = Self::filled(rows, cols, OrbColor::Empty);
        for cell in &mut board.cells {
            *cell = random_orb(rng);
        }
        board
    }

    /// Build a board from row-major cells, checking the dimensions.
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<SoulOrb>) -> Result<Self, BoardError> {
        if rows == 0 || cols == 0 {
            return Err(BoardError::NoCells { rows, cols });
        }
        let expected = rows.checked_mul(cols).ok_or(BoardError::NoCells { rows, cols })?;
        if cells.len() != expected {
            return Err(BoardError::CellCount {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self { rows, cols, cells })
    }

    /// Build a board from rows of colors. All rows must have equal length.
    #[must_use]
    pub fn from_colors(rows: &[&[OrbColor]]) -> Self {
        assert!(!rows.is_empty() && !rows[0].is_empty(), "Board must have at least one cell");
        let cols = rows[0].len();
        assert!(rows.iter().all(|r| r.len() == cols), "Board rows must have equal length");
        Self {
            rows: rows.len(),
            cols,
            cells: rows.iter().flat_map(|r| r.iter().map(|&c| SoulOrb::new(c))).collect(),
        }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Check whether a coordinate lies inside the board.
    #[inline]
    #[must_use]
    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.row >= 0
            && coord.col >= 0
            && (coord.row as usize) < self.rows
            && (coord.col as usize) < self.cols
    }

    #[inline]
    fn index(&self, coord: Coord) -> Option<usize> {
        self.in_bounds(coord)
            .then(|| coord.row as usize * self.cols + coord.col as usize)
    }

    /// Get the orb at a coordinate, or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<SoulOrb> {
        self.index(coord).map(|i| self.cells[i])
    }

    /// Get the color at a coordinate, or `None` if out of bounds.
    #[must_use]
    pub fn color_at(&self, coord: Coord) -> Option<OrbColor> {
        self.get(coord).map(|orb| orb.color)
    }

    /// Replace the orb at a coordinate.
    ///
    /// Returns `false` (and changes nothing) if the coordinate is out of bounds.
    pub fn set(&mut self, coord: Coord, orb: SoulOrb) -> bool {
        match self.index(coord) {
            Some(i) => {
                self.cells[i] = orb;
                true
            }
            None => false,
        }
    }

    /// Borrow one row of orbs.
    #[must_use]
    pub fn row(&self, row: usize) -> &[SoulOrb] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    pub(crate) fn row_mut(&mut self, row: usize) -> &mut [SoulOrb] {
        let cols = self.cols;
        &mut self.cells[row * cols..(row + 1) * cols]
    }

    /// Number of empty cells on the board.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|o| o.is_empty()).count()
    }

    /// Iterate over every coordinate in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let cols = self.cols as i32;
        (0..self.rows as i32).flat_map(move |r| (0..cols).map(move |c| Coord::new(r, c)))
    }
}

/// Draw a fresh orb from the active palette.
pub(crate) fn random_orb(rng: &mut OrbRng) -> SoulOrb {
    // ACTIVE is never empty
    rng.choose(&OrbColor::ACTIVE)
        .map_or(SoulOrb::EMPTY, |&color| SoulOrb::new(color))
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for r in 0..self.rows {
            if r > 0 {
                writeln!(f)?;
            }
            write!(f, "R{r}:")?;
            for orb in self.row(r) {
                write!(f, " {}", orb.color.symbol())?;
            }
        }
        Ok(())
    }
}
