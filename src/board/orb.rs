//! Orb colors and the orb token itself.

use serde::{Deserialize, Serialize};

/// Color of an orb. `Empty` marks a cleared cell awaiting refill.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrbColor {
    Gold,
    Black,
    White,
    Empty,
}

impl OrbColor {
    /// Colors drawn when populating or refilling the board.
    pub const ACTIVE: [OrbColor; 3] = [OrbColor::Gold, OrbColor::Black, OrbColor::White];

    /// Check if this is the empty marker.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, OrbColor::Empty)
    }

    /// Uppercase name, e.g. `"GOLD"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            OrbColor::Gold => "GOLD",
            OrbColor::Black => "BLACK",
            OrbColor::White => "WHITE",
            OrbColor::Empty => "EMPTY",
        }
    }

    /// Single-character board symbol. Empty cells render as `.`.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            OrbColor::Gold => 'G',
            OrbColor::Black => 'B',
            OrbColor::White => 'W',
            OrbColor::Empty => '.',
        }
    }

    /// Display color for colored terminal or GUI renderers.
    ///
    /// Black orbs are shown in light blue so they stay visible on dark terminals.
    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            OrbColor::Gold => (255, 200, 0),
            OrbColor::Black => (150, 200, 255),
            OrbColor::White => (255, 255, 255),
            OrbColor::Empty => (105, 105, 105),
        }
    }
}

impl std::fmt::Display for OrbColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single orb occupying one board cell.
///
/// Orbs are values: elimination and refill replace them wholesale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SoulOrb {
    pub color: OrbColor,
}

impl SoulOrb {
    /// The empty-marker orb left behind by elimination.
    pub const EMPTY: SoulOrb = SoulOrb { color: OrbColor::Empty };

    #[must_use]
    pub const fn new(color: OrbColor) -> Self {
        Self { color }
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.color.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_excludes_empty() {
        assert!(OrbColor::ACTIVE.iter().all(|c| !c.is_empty()));
        assert!(OrbColor::Empty.is_empty());
    }

    #[test]
    fn test_symbols_and_names() {
        assert_eq!(OrbColor::Gold.symbol(), 'G');
        assert_eq!(OrbColor::Empty.symbol(), '.');
        assert_eq!(format!("{}", OrbColor::Black), "BLACK");
        assert_eq!(OrbColor::Gold.rgb(), (255, 200, 0));
    }

    #[test]
    fn test_empty_orb() {
        assert!(SoulOrb::EMPTY.is_empty());
        assert!(!SoulOrb::new(OrbColor::White).is_empty());
    }
}
