//! Shape catalog and matching.
//!
//! - `catalog`: the fixed table of named templates and group-name derivation
//! - `matcher`: normalization of coordinate sets and exact lookup

pub mod catalog;
pub mod matcher;

pub use catalog::{group_name, ShapeCatalog, ShapeKey, ShapeTemplate};
pub use matcher::{identify, normalize};
