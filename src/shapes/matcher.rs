//! Mapping arbitrary coordinate sets onto catalog shapes.

use super::catalog::{ShapeCatalog, ShapeKey, ShapeTemplate};
use crate::board::Coord;
use crate::error::OperationError;

/// Translate a coordinate set so its bounding box touches the origin.
///
/// Duplicate coordinates collapse. An empty input yields an empty key.
/// Offsets wrap when a selection spans more than `i32::MAX` rows or columns;
/// such keys match no template.
#[must_use]
pub fn normalize(coords: &[Coord]) -> ShapeKey {
    let min_row = coords.iter().map(|c| c.row).min().unwrap_or(0);
    let min_col = coords.iter().map(|c| c.col).min().unwrap_or(0);
    ShapeKey::from_offsets(
        coords
            .iter()
            .map(|c| Coord::new(c.row.wrapping_sub(min_row), c.col.wrapping_sub(min_col))),
    )
}

/// Find the catalog template whose offset set equals the normalized selection.
///
/// There is no partial match: subsets and supersets of a template are
/// rejected with [`OperationError::UnknownShape`].
pub fn identify<'a>(
    catalog: &'a ShapeCatalog,
    coords: &[Coord],
) -> Result<&'a ShapeTemplate, OperationError> {
    let normalized = normalize(coords);
    catalog
        .find_by_key(&normalized)
        .ok_or(OperationError::UnknownShape { normalized })
}
