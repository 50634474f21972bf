//! The projection capability consumed by the registry and transform engine.

use crs_common::{Point, ProjectionError};

/// A component that knows how to project points between registered codes.
///
/// Implementations are synchronous and must not perform I/O in `project`.
/// Registering an already known code replaces its definition.
pub trait ProjectionBackend: Send + Sync {
    /// Parse and store `definition` under `code`.
    fn register(&mut self, code: &str, definition: &str) -> Result<(), ProjectionError>;

    /// Project `point` from the system registered as `source` into `target`.
    fn project(&self, source: &str, target: &str, point: Point) -> Result<Point, ProjectionError>;

    /// Whether `code` has a usable definition.
    fn is_registered(&self, code: &str) -> bool;
}

impl<B: ProjectionBackend + ?Sized> ProjectionBackend for Box<B> {
    fn register(&mut self, code: &str, definition: &str) -> Result<(), ProjectionError> {
        (**self).register(code, definition)
    }

    fn project(&self, source: &str, target: &str, point: Point) -> Result<Point, ProjectionError> {
        (**self).project(source, target, point)
    }

    fn is_registered(&self, code: &str) -> bool {
        (**self).is_registered(code)
    }
}
