//! Instrumented projection backend for engine tests.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use crs_common::{Point, ProjectionError};
use projection::{Proj4Backend, ProjectionBackend};

/// Projection backend that wraps [`Proj4Backend`] and records every call.
///
/// Tests can make it refuse a direct `(source, target)` pair to force the
/// bridging path, reject definitions for a code to exercise registration
/// failures, or fail on a chosen input point. The call log is shared, so
/// the handle from [`RecordingBackend::calls`] can be inspected after the
/// backend has been moved into a registry.
#[derive(Default)]
pub struct RecordingBackend {
    inner: Proj4Backend,
    refused_pairs: HashSet<(String, String)>,
    rejected_codes: HashSet<String>,
    failing_points: Vec<Point>,
    calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make direct projection from `source` to `target` fail.
    pub fn refuse_pair(mut self, source: &str, target: &str) -> Self {
        self.refused_pairs
            .insert((source.to_string(), target.to_string()));
        self
    }

    /// Make registration of `code` fail regardless of its definition.
    pub fn reject_code(mut self, code: &str) -> Self {
        self.rejected_codes.insert(code.to_string());
        self
    }

    /// Make every projection of exactly `point` fail.
    pub fn fail_at(mut self, point: Point) -> Self {
        self.failing_points.push(point);
        self
    }

    /// Handle to the `(source, target)` log of `project` calls.
    pub fn calls(&self) -> Arc<Mutex<Vec<(String, String)>>> {
        Arc::clone(&self.calls)
    }
}

impl ProjectionBackend for RecordingBackend {
    fn register(&mut self, code: &str, definition: &str) -> Result<(), ProjectionError> {
        if self.rejected_codes.contains(code) {
            return Err(ProjectionError::InvalidDefinition {
                code: code.to_string(),
                message: "rejected by test backend".to_string(),
            });
        }
        self.inner.register(code, definition)
    }

    fn project(&self, source: &str, target: &str, point: Point) -> Result<Point, ProjectionError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((source.to_string(), target.to_string()));
        }

        if self
            .refused_pairs
            .contains(&(source.to_string(), target.to_string()))
        {
            return Err(ProjectionError::Unsupported {
                source_crs: source.to_string(),
                target_crs: target.to_string(),
            });
        }

        if self.failing_points.contains(&point) {
            return Err(ProjectionError::Failed {
                source_crs: source.to_string(),
                target_crs: target.to_string(),
                message: format!("test backend fails at {}", point),
            });
        }

        self.inner.project(source, target, point)
    }

    fn is_registered(&self, code: &str) -> bool {
        self.inner.is_registered(code)
    }
}
