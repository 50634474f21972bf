//! CRS catalog, point transforms and catalog search.
//!
//! ```ignore
//! use crs_registry::{search, CrsRegistry, TransformEngine};
//! use projection::Proj4Backend;
//!
//! let registry = CrsRegistry::new(Proj4Backend::new());
//! let engine = TransformEngine::new(&registry);
//! let p = engine.transform_point(Point::new(116.404, 39.915), "EPSG:4326", "EPSG:3857")?;
//! let utm = search(&registry, "utm");
//! ```

pub mod definitions;
pub mod registry;
pub mod search;
pub mod transform;

pub use registry::{Catalog, CrsRegistry};
pub use search::search;
pub use transform::{Attempt, TransformEngine};
