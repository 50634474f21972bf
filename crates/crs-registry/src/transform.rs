//! Point transforms between catalog systems.
//!
//! A transform request is resolved in this order:
//! 1. Both codes are validated against the registry (`UnknownCrs` before any
//!    projection call).
//! 2. Alias to alias returns the input unchanged. The offsets between
//!    GCJ-02 and BD-09 are not modeled; this is lossy on purpose.
//! 3. Identical codes return the input unchanged.
//! 4. Aliases are replaced by EPSG:4326, then an ordered plan of attempts
//!    runs: a direct projection, and when neither endpoint is EPSG:4326,
//!    a bridge through it. The first successful attempt wins.

use crs_common::{CrsError, CrsKind, CrsResult, Point, ProjectionError, REFERENCE_CRS};
use projection::ProjectionBackend;
use tracing::debug;

use crate::registry::CrsRegistry;

/// One way of getting from the resolved source to the resolved target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attempt<'a> {
    Direct { source: &'a str, target: &'a str },
    /// Two projections routed through [`REFERENCE_CRS`].
    Bridge { source: &'a str, target: &'a str },
}

impl<'a> Attempt<'a> {
    /// Attempts to try, in order, for resolved projection codes.
    pub fn plan(source: &'a str, target: &'a str) -> Vec<Attempt<'a>> {
        let mut attempts = vec![Attempt::Direct { source, target }];
        if source != REFERENCE_CRS && target != REFERENCE_CRS {
            attempts.push(Attempt::Bridge { source, target });
        }
        attempts
    }

    fn run<B: ProjectionBackend>(
        &self,
        backend: &B,
        point: Point,
    ) -> Result<Point, ProjectionError> {
        match *self {
            Attempt::Direct { source, target } if source == target => Ok(point),
            Attempt::Direct { source, target } => backend.project(source, target, point),
            Attempt::Bridge { source, target } => {
                let mid = backend.project(source, REFERENCE_CRS, point)?;
                backend.project(REFERENCE_CRS, target, mid)
            }
        }
    }
}

/// Transforms points using a registry's catalog and projection backend.
pub struct TransformEngine<'r, B: ProjectionBackend> {
    registry: &'r CrsRegistry<B>,
}

impl<'r, B: ProjectionBackend> TransformEngine<'r, B> {
    pub fn new(registry: &'r CrsRegistry<B>) -> Self {
        Self { registry }
    }

    /// Transform a single point from `source` to `target`.
    pub fn transform_point(&self, point: Point, source: &str, target: &str) -> CrsResult<Point> {
        let source = self.registry.classify(source)?;
        let target = self.registry.classify(target)?;
        self.transform_classified(point, &source, &target)
    }

    /// Transform every point in order, stopping at the first failure.
    ///
    /// The error is a [`CrsError::BatchTransform`] carrying the index of the
    /// failing element. Unknown codes are reported at index 0, before any
    /// point is touched.
    pub fn transform_batch(
        &self,
        points: &[Point],
        source: &str,
        target: &str,
    ) -> CrsResult<Vec<Point>> {
        let at = |index: usize| {
            move |cause: CrsError| CrsError::BatchTransform {
                index,
                cause: Box::new(cause),
            }
        };

        let source = self.registry.classify(source).map_err(at(0))?;
        let target = self.registry.classify(target).map_err(at(0))?;

        points
            .iter()
            .enumerate()
            .map(|(index, point)| {
                self.transform_classified(*point, &source, &target)
                    .map_err(at(index))
            })
            .collect()
    }

    fn transform_classified(
        &self,
        point: Point,
        source: &CrsKind,
        target: &CrsKind,
    ) -> CrsResult<Point> {
        if source.is_alias() && target.is_alias() {
            debug!(source = %source, target = %target, "Alias pass-through");
            return Ok(point);
        }
        if source.code() == target.code() {
            return Ok(point);
        }

        let backend = self.registry.backend();
        let mut last_error = None;

        for attempt in Attempt::plan(source.projection_code(), target.projection_code()) {
            match attempt.run(backend, point) {
                Ok(result) => return Ok(result),
                Err(e) => {
                    debug!(attempt = ?attempt, error = %e, "Transform attempt failed");
                    last_error = Some(e);
                }
            }
        }

        Err(CrsError::Transform {
            source_crs: source.code().to_string(),
            target_crs: target.code().to_string(),
            cause: last_error,
        })
    }
}
