//! Coordinate Reference System types and classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Code of the reference system used for alias resolution and bridging.
pub const REFERENCE_CRS: &str = "EPSG:4326";

/// Codes of local conventions without an independent mathematical definition.
///
/// GCJ02 is used by AMap and Tencent maps, BD09 by Baidu maps. Both are
/// treated as value-identical to [`REFERENCE_CRS`]; the datum offsets
/// between them are not modeled.
pub const ALIAS_CODES: [&str; 2] = ["GCJ02", "BD09"];

/// A catalog entry: a code plus its human description and the
/// projection-parameter definition handed to the projection backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoordinateSystem {
    pub code: String,
    pub name: String,
    pub description: String,
    pub definition: String,
}

impl CoordinateSystem {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        definition: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            description: description.into(),
            definition: definition.into(),
        }
    }

    /// Listing view of this entry without the definition string.
    pub fn summary(&self) -> CrsSummary {
        CrsSummary {
            code: self.code.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }

    pub fn kind(&self) -> CrsKind {
        CrsKind::from_code(&self.code)
    }
}

/// Catalog listing entry, as returned by search and system listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrsSummary {
    pub code: String,
    pub name: String,
    pub description: String,
}

/// How the transform engine treats a code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CrsKind {
    /// A system with its own definition, projected mathematically.
    Standard(String),
    /// A local convention resolved to [`REFERENCE_CRS`] for projection.
    Alias(String),
}

impl CrsKind {
    /// Classify a code. Membership in the catalog is not checked here.
    pub fn from_code(code: &str) -> Self {
        if ALIAS_CODES.contains(&code) {
            CrsKind::Alias(code.to_string())
        } else {
            CrsKind::Standard(code.to_string())
        }
    }

    /// The code as requested by the caller.
    pub fn code(&self) -> &str {
        match self {
            CrsKind::Standard(code) | CrsKind::Alias(code) => code,
        }
    }

    /// The code actually handed to the projection backend.
    pub fn projection_code(&self) -> &str {
        match self {
            CrsKind::Standard(code) => code,
            CrsKind::Alias(_) => REFERENCE_CRS,
        }
    }

    pub fn is_alias(&self) -> bool {
        matches!(self, CrsKind::Alias(_))
    }
}

impl fmt::Display for CrsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_codes() {
        assert_eq!(
            CrsKind::from_code("GCJ02"),
            CrsKind::Alias("GCJ02".to_string())
        );
        assert_eq!(
            CrsKind::from_code("EPSG:3857"),
            CrsKind::Standard("EPSG:3857".to_string())
        );
        // Case-sensitive, like catalog keys
        assert!(!CrsKind::from_code("gcj02").is_alias());
    }

    #[test]
    fn test_projection_code() {
        assert_eq!(CrsKind::from_code("BD09").projection_code(), REFERENCE_CRS);
        assert_eq!(CrsKind::from_code("BD09").code(), "BD09");
        assert_eq!(
            CrsKind::from_code("EPSG:32650").projection_code(),
            "EPSG:32650"
        );
    }

    #[test]
    fn test_summary_drops_definition() {
        let crs = CoordinateSystem::new("EPSG:4326", "WGS84", "World", "+proj=longlat");
        let summary = crs.summary();
        assert_eq!(summary.code, "EPSG:4326");
        assert_eq!(summary.name, "WGS84");

        let json = serde_json::to_value(&summary).unwrap();
        assert!(json.get("definition").is_none());
    }
}
