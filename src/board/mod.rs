//! Board model: orb colors, orbs, coordinates and the grid.

pub mod grid;
pub mod orb;

pub use grid::{Board, Coord};
pub use orb::{OrbColor, SoulOrb};
