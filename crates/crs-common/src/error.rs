//! Error types for CRS registry and transform operations.

use thiserror::Error;

/// Result type alias using CrsError.
pub type CrsResult<T> = Result<T, CrsError>;

/// Failure reported by a projection backend.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectionError {
    #[error("Code not registered with projection backend: {0}")]
    UnknownCode(String),

    #[error("Invalid definition for '{code}': {message}")]
    InvalidDefinition { code: String, message: String },

    #[error("No direct projection from {source_crs} to {target_crs}")]
    Unsupported {
        source_crs: String,
        target_crs: String,
    },

    #[error("Projection from {source_crs} to {target_crs} failed: {message}")]
    Failed {
        source_crs: String,
        target_crs: String,
        message: String,
    },
}

/// Primary error type for registry and transform operations.
#[derive(Debug, Error)]
pub enum CrsError {
    #[error("Unknown CRS: {0}")]
    UnknownCrs(String),

    #[error("No transform path from {source_crs} to {target_crs}")]
    Transform {
        source_crs: String,
        target_crs: String,
        #[source]
        cause: Option<ProjectionError>,
    },

    #[error("Batch transform failed at index {index}: {cause}")]
    BatchTransform {
        index: usize,
        #[source]
        cause: Box<CrsError>,
    },

    #[error("Projection backend rejected definition for {code}")]
    Registration {
        code: String,
        #[source]
        cause: ProjectionError,
    },
}

impl CrsError {
    /// Stable identifier of the error kind, for transport layers.
    pub fn error_code(&self) -> &'static str {
        match self {
            CrsError::UnknownCrs(_) => "UnknownCrs",
            CrsError::Transform { .. } => "TransformError",
            CrsError::BatchTransform { .. } => "BatchTransformError",
            CrsError::Registration { .. } => "RegistrationError",
        }
    }

    /// Index of the failing element for batch errors.
    pub fn batch_index(&self) -> Option<usize> {
        match self {
            CrsError::BatchTransform { index, .. } => Some(*index),
            _ => None,
        }
    }

    /// HTTP status a transport layer should map this error to.
    pub fn http_status_code(&self) -> u16 {
        match self {
            CrsError::UnknownCrs(_) | CrsError::Registration { .. } => 400,
            CrsError::Transform { .. } => 422,
            CrsError::BatchTransform { cause, .. } => cause.http_status_code(),
        }
    }
}
