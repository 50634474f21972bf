//! Common types and errors shared across the CRS toolbox crates.

pub mod crs;
pub mod error;
pub mod point;

pub use crs::{CoordinateSystem, CrsKind, CrsSummary, ALIAS_CODES, REFERENCE_CRS};
pub use error::{CrsError, CrsResult, ProjectionError};
pub use point::{Point, PointParseError};
