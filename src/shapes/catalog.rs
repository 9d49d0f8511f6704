//! Shape catalog: the closed table of named, removable orb patterns.
//!
//! Templates are data, not types. A template is a translation-normalized
//! offset set (its bounding box touches the origin), and matching is a
//! lookup by set equality.
//!
//! ## Naming
//!
//! Names read `{count}-orb[-{family}][_{variant}]`. Splitting at the last
//! underscore yields the group name shared by all variants of a family,
//! e.g. `"4-orb-L_3"` belongs to group `"4-orb-L"`.
//!
//! ```
//! use soul_board::shapes::{group_name, ShapeCatalog};
//!
//! let catalog = ShapeCatalog::standard();
//! assert_eq!(catalog.len(), 15);
//! assert_eq!(group_name("2-orb_v"), "2-orb");
//! assert_eq!(group_name("4-orb-square"), "4-orb-square");
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::Coord;

/// Normalized offset set, sorted so equal sets compare and hash equal.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShapeKey(SmallVec<[Coord; 8]>);

impl ShapeKey {
    /// Build a key from offsets that are already normalized.
    ///
    /// Sorts and collapses duplicates.
    #[must_use]
    pub fn from_offsets(offsets: impl IntoIterator<Item = Coord>) -> Self {
        let mut cells: SmallVec<[Coord; 8]> = offsets.into_iter().collect();
        cells.sort_unstable();
        cells.dedup();
        Self(cells)
    }

    /// Number of distinct cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Offsets in sorted order.
    #[must_use]
    pub fn cells(&self) -> &[Coord] {
        &self.0
    }
}

impl std::fmt::Display for ShapeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("{")?;
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{c}")?;
        }
        f.write_str("}")
    }
}

/// A named shape template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeTemplate {
    /// Full shape name, e.g. `"4-orb-L_1"`.
    pub name: String,

    /// Offsets in definition order. Enumeration emits coordinates in this order.
    pub offsets: SmallVec<[Coord; 6]>,

    /// Sorted offset set used for matching.
    pub key: ShapeKey,
}

impl ShapeTemplate {
    /// Create a template from `(row, col)` offsets.
    ///
    /// Panics if the offsets are empty, repeat a cell, or are not normalized
    /// (minimum row and minimum column must both be 0).
    pub fn new(name: impl Into<String>, offsets: &[(i32, i32)]) -> Self {
        let name = name.into();
        assert!(!offsets.is_empty(), "Shape {name} has no cells");

        let offsets: SmallVec<[Coord; 6]> = offsets.iter().copied().map(Coord::from).collect();
        let min_row = offsets.iter().map(|c| c.row).min().unwrap_or(0);
        let min_col = offsets.iter().map(|c| c.col).min().unwrap_or(0);
        assert!(
            min_row == 0 && min_col == 0,
            "Shape {name} is not normalized to the origin"
        );

        let key = ShapeKey::from_offsets(offsets.iter().copied());
        assert_eq!(key.len(), offsets.len(), "Shape {name} repeats a cell");

        Self { name, offsets, key }
    }

    /// Number of orbs the shape clears.
    #[must_use]
    pub fn orb_count(&self) -> usize {
        self.offsets.len()
    }

    /// Group name of this template. See [`group_name`].
    #[must_use]
    pub fn group(&self) -> &str {
        group_name(&self.name)
    }
}

/// Derive the group name by dropping the last `_`-delimited suffix.
///
/// If the split does not yield two non-empty parts, the group is the full name.
#[must_use]
pub fn group_name(shape: &str) -> &str {
    match shape.rsplit_once('_') {
        Some((group, variant)) if !group.is_empty() && !variant.is_empty() => group,
        _ => shape,
    }
}

/// Registry of shape templates, iterated in definition order.
#[derive(Clone, Debug, Default)]
pub struct ShapeCatalog {
    templates: Vec<ShapeTemplate>,
    by_key: FxHashMap<ShapeKey, usize>,
}

impl ShapeCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard catalog of fifteen shapes.
    #[must_use]
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        for (name, offsets) in STANDARD_SHAPES {
            catalog.register(ShapeTemplate::new(*name, offsets));
        }
        catalog
    }

    /// Register a template.
    ///
    /// Panics if its name or offset set is already registered; no two
    /// templates may normalize to the same set.
    pub fn register(&mut self, template: ShapeTemplate) {
        if let Some(&existing) = self.by_key.get(&template.key) {
            panic!(
                "Shape {} duplicates the offsets of {}",
                template.name, self.templates[existing].name
            );
        }
        if self.get(&template.name).is_some() {
            panic!("Shape {} already registered", template.name);
        }
        self.by_key.insert(template.key.clone(), self.templates.len());
        self.templates.push(template);
    }

    /// Get a template by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ShapeTemplate> {
        self.templates.iter().find(|t| t.name == name)
    }

    /// Find the template whose offset set equals `key` exactly.
    #[must_use]
    pub fn find_by_key(&self, key: &ShapeKey) -> Option<&ShapeTemplate> {
        self.by_key.get(key).map(|&i| &self.templates[i])
    }

    /// Iterate over templates in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &ShapeTemplate> {
        self.templates.iter()
    }

    /// Size of the largest template.
    #[must_use]
    pub fn max_orb_count(&self) -> usize {
        self.templates.iter().map(ShapeTemplate::orb_count).max().unwrap_or(0)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

/// Canonical offsets. These define game legality and must not be tuned.
const STANDARD_SHAPES: &[(&str, &[(i32, i32)])] = &[
    ("1-orb", &[(0, 0)]),
    ("2-orb_v", &[(0, 0), (1, 0)]),
    ("2-orb_h", &[(0, 0), (0, 1)]),
    ("3-orb-L_no_tl", &[(0, 1), (1, 0), (1, 1)]),
    ("3-orb-L_no_tr", &[(0, 0), (1, 0), (1, 1)]),
    ("3-orb-L_no_bl", &[(0, 0), (0, 1), (1, 1)]),
    ("3-orb-L_no_br", &[(0, 0), (0, 1), (1, 0)]),
    ("3-orb-I_h", &[(0, 0), (0, 1), (0, 2)]),
    ("4-orb-square", &[(0, 0), (0, 1), (1, 0), (1, 1)]),
    ("4-orb-I_h", &[(0, 0), (0, 1), (0, 2), (0, 3)]),
    ("4-orb-L_1", &[(0, 0), (1, 0), (1, 1), (1, 2)]),
    ("4-orb-L_2", &[(0, 0), (0, 1), (0, 2), (1, 0)]),
    ("4-orb-L_3", &[(0, 0), (0, 1), (0, 2), (1, 2)]),
    ("4-orb-L_4", &[(0, 2), (1, 0), (1, 1), (1, 2)]),
    ("6-orb-Rect", &[(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_order() {
        let catalog = ShapeCatalog::standard();
        let names: Vec<_> = catalog.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names.first(), Some(&"1-orb"));
        assert_eq!(names.last(), Some(&"6-orb-Rect"));
        assert_eq!(catalog.max_orb_count(), 6);
    }

    #[test]
    fn test_catalog_templates_are_distinct() {
        let catalog = ShapeCatalog::standard();
        let templates: Vec<_> = catalog.iter().collect();
        for (i, a) in templates.iter().enumerate() {
            for b in &templates[i + 1..] {
                assert_ne!(a.key, b.key, "{} and {} collide", a.name, b.name);
            }
        }
    }

    #[test]
    fn test_templates_are_normalized() {
        for template in ShapeCatalog::standard().iter() {
            assert_eq!(template.offsets.iter().map(|c| c.row).min(), Some(0));
            assert_eq!(template.offsets.iter().map(|c| c.col).min(), Some(0));
        }
    }

    #[test]
    fn test_group_names() {
        assert_eq!(group_name("1-orb"), "1-orb");
        assert_eq!(group_name("2-orb_h"), "2-orb");
        assert_eq!(group_name("4-orb-L_4"), "4-orb-L");
        assert_eq!(group_name("4-orb-I_h"), "4-orb-I");
        assert_eq!(group_name("3-orb-L_no_tl"), "3-orb-L_no");
        assert_eq!(group_name("6-orb-Rect"), "6-orb-Rect");
        assert_eq!(group_name("_x"), "_x");
        assert_eq!(group_name("x_"), "x_");
    }

    #[test]
    fn test_find_by_key() {
        let catalog = ShapeCatalog::standard();
        let key = ShapeKey::from_offsets([Coord::new(1, 0), Coord::new(0, 0)]);
        assert_eq!(catalog.find_by_key(&key).map(|t| t.name.as_str()), Some("2-orb_v"));
    }

    #[test]
    #[should_panic(expected = "duplicates the offsets")]
    fn test_duplicate_offsets_panic() {
        let mut catalog = ShapeCatalog::standard();
        catalog.register(ShapeTemplate::new("pair", &[(0, 1), (0, 0)]));
    }

    #[test]
    #[should_panic(expected = "not normalized")]
    fn test_unnormalized_template_panics() {
        let _ = ShapeTemplate::new("floating", &[(1, 1)]);
    }
}
