//! Operation validation.
//!
//! Checks run in a fixed order and the first failure is returned:
//! 1. non-empty selection
//! 2. every coordinate in bounds
//! 3. first cell not empty
//! 4. all cells share the first cell's color
//! 5. normalized selection matches a catalog shape
//! 6. the shape is authorized by the rule set
//!
//! Validation never touches the board.

use super::skill_gate::authorize;
use crate::board::{Board, Coord, OrbColor};
use crate::core::RuleSet;
use crate::error::OperationError;
use crate::shapes::{group_name, identify, ShapeCatalog};

/// A selection that passed every check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatedOperation<'a> {
    pub color: OrbColor,
    pub shape: &'a str,
}

/// Validate a selection against the board, catalog and rule set.
pub fn validate<'a>(
    board: &Board,
    coords: &[Coord],
    catalog: &'a ShapeCatalog,
    rules: &RuleSet,
) -> Result<ValidatedOperation<'a>, OperationError> {
    let first = *coords.first().ok_or(OperationError::EmptyOperation)?;

    if let Some(&coord) = coords.iter().find(|&&c| !board.in_bounds(c)) {
        return Err(OperationError::Bounds { coord });
    }

    let color = board.color_at(first).ok_or(OperationError::Bounds { coord: first })?;
    if color.is_empty() {
        return Err(OperationError::EmptyCell);
    }

    for &coord in &coords[1..] {
        let actual = board.color_at(coord).ok_or(OperationError::Bounds { coord })?;
        if actual != color {
            return Err(OperationError::ColorMismatch {
                expected: color,
                actual,
                coord,
            });
        }
    }

    let template = identify(catalog, coords)?;
    if !authorize(&template.name, coords.len(), rules) {
        return Err(OperationError::UnauthorizedShape {
            shape: template.name.clone(),
            group: group_name(&template.name).to_string(),
        });
    }

    Ok(ValidatedOperation {
        color,
        shape: &template.name,
    })
}
