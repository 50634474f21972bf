//! Two-dimensional coordinate values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A coordinate pair in the units of its associated CRS.
///
/// Axis order is always x, y: for geographic systems x is longitude and
/// y is latitude, both in degrees. For projected systems x is easting and
/// y is northing, usually in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Parse an `"x,y"` pair as accepted on the command line.
    pub fn from_pair_string(s: &str) -> Result<Self, PointParseError> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| PointParseError::InvalidFormat(s.to_string()))?;

        Ok(Self {
            x: x.trim()
                .parse()
                .map_err(|_| PointParseError::InvalidNumber(x.to_string()))?,
            y: y.trim()
                .parse()
                .map_err(|_| PointParseError::InvalidNumber(y.to_string()))?,
        })
    }

    /// Check whether both components lie within `tolerance` of another point.
    pub fn approx_eq(&self, other: &Point, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance && (self.y - other.y).abs() <= tolerance
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PointParseError {
    #[error("Invalid point format: {0}. Expected 'x,y'")]
    InvalidFormat(String),

    #[error("Invalid number in point: {0}")]
    InvalidNumber(String),
}
