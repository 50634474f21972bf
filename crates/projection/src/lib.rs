//! Projection backends for coordinate transforms.
//!
//! The transform engine never does projection math itself. It hands
//! registered CRS codes and points to a [`ProjectionBackend`]; the
//! production backend, [`Proj4Backend`], parses PROJ.4 definition strings
//! with `proj4rs` and performs the forward/inverse maps.

pub mod backend;
pub mod proj4;

pub use backend::ProjectionBackend;
pub use crs_common::ProjectionError;
pub use proj4::Proj4Backend;
