//! PROJ.4 definition string backend.
//!
//! Definitions look like `+proj=tmerc +lon_0=117 +k=1 +x_0=500000 +ellps=GRS80`.
//! Geographic systems (`+proj=longlat`) take and return degrees; `proj4rs`
//! works in radians for those, so values are converted at the boundary.

use std::collections::HashMap;

use crs_common::{Point, ProjectionError};
use proj4rs::proj::Proj;
use tracing::debug;

use crate::backend::ProjectionBackend;

/// Backend that parses PROJ.4 strings and projects with `proj4rs`.
#[derive(Default)]
pub struct Proj4Backend {
    projections: HashMap<String, Proj>,
}

impl Proj4Backend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered codes.
    pub fn len(&self) -> usize {
        self.projections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projections.is_empty()
    }

    fn lookup(&self, code: &str) -> Result<&Proj, ProjectionError> {
        self.projections
            .get(code)
            .ok_or_else(|| ProjectionError::UnknownCode(code.to_string()))
    }
}

impl ProjectionBackend for Proj4Backend {
    fn register(&mut self, code: &str, definition: &str) -> Result<(), ProjectionError> {
        let proj = Proj::from_proj_string(definition).map_err(|e| {
            ProjectionError::InvalidDefinition {
                code: code.to_string(),
                message: e.to_string(),
            }
        })?;

        debug!(code = code, "Registered projection definition");
        self.projections.insert(code.to_string(), proj);
        Ok(())
    }

    fn project(&self, source: &str, target: &str, point: Point) -> Result<Point, ProjectionError> {
        let src = self.lookup(source)?;
        let dst = self.lookup(target)?;

        let failed = |message: String| ProjectionError::Failed {
            source_crs: source.to_string(),
            target_crs: target.to_string(),
            message,
        };

        let mut xyz = if src.is_latlong() {
            (point.x.to_radians(), point.y.to_radians(), 0.0)
        } else {
            (point.x, point.y, 0.0)
        };

        proj4rs::transform::transform(src, dst, &mut xyz).map_err(|e| failed(e.to_string()))?;

        let (x, y) = if dst.is_latlong() {
            (xyz.0.to_degrees(), xyz.1.to_degrees())
        } else {
            (xyz.0, xyz.1)
        };

        if !x.is_finite() || !y.is_finite() {
            return Err(failed(format!("non-finite result for {}", point)));
        }

        Ok(Point::new(x, y))
    }

    fn is_registered(&self, code: &str) -> bool {
        self.projections.contains_key(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WGS84: &str = "+proj=longlat +datum=WGS84 +no_defs";
    const WEB_MERCATOR: &str =
        "+proj=merc +a=6378137 +b=6378137 +lat_ts=0 +lon_0=0 +x_0=0 +y_0=0 +k=1 +units=m +no_defs";

    fn backend() -> Proj4Backend {
        let mut backend = Proj4Backend::new();
        backend.register("EPSG:4326", WGS84).unwrap();
        backend.register("EPSG:3857", WEB_MERCATOR).unwrap();
        backend
    }

    #[test]
    fn test_wgs84_to_web_mercator() {
        let backend = backend();
        let p = backend
            .project("EPSG:4326", "EPSG:3857", Point::new(116.404, 39.915))
            .unwrap();

        assert!((p.x - 12958034.006).abs() < 0.1, "x = {}", p.x);
        assert!((p.y - 4853597.988).abs() < 0.1, "y = {}", p.y);
    }

    #[test]
    fn test_web_mercator_to_wgs84() {
        let backend = backend();
        let p = backend
            .project("EPSG:3857", "EPSG:4326", Point::new(12958034.006, 4853597.988))
            .unwrap();

        assert!((p.x - 116.404).abs() < 1e-6);
        assert!((p.y - 39.915).abs() < 1e-6);
    }

    #[test]
    fn test_unknown_code() {
        let backend = backend();
        let err = backend
            .project("EPSG:4326", "EPSG:2154", Point::new(0.0, 0.0))
            .unwrap_err();
        assert_eq!(err, ProjectionError::UnknownCode("EPSG:2154".to_string()));
    }

    #[test]
    fn test_invalid_definition_is_rejected() {
        let mut backend = backend();
        let err = backend
            .register("BROKEN", "+proj=definitely_not_a_projection")
            .unwrap_err();
        assert!(matches!(err, ProjectionError::InvalidDefinition { .. }));
        assert!(!backend.is_registered("BROKEN"));
        assert_eq!(backend.len(), 2);
    }

    #[test]
    fn test_register_replaces_definition() {
        let mut backend = backend();
        backend
            .register("EPSG:3857", "+proj=longlat +datum=WGS84 +no_defs")
            .unwrap();

        let p = backend
            .project("EPSG:4326", "EPSG:3857", Point::new(10.0, 20.0))
            .unwrap();
        assert!(p.approx_eq(&Point::new(10.0, 20.0), 1e-9));
    }
}
