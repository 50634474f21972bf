//! Common test fixtures for CRS transform tests.
//!
//! Reference values were computed with PROJ for the listed definitions.

/// Common PROJ.4 definition strings.
pub mod definitions {
    pub const WGS84: &str = "+proj=longlat +datum=WGS84 +no_defs";

    pub const WEB_MERCATOR: &str =
        "+proj=merc +a=6378137 +b=6378137 +lat_ts=0 +lon_0=0 +x_0=0 +y_0=0 +k=1 +units=m +no_defs";

    pub const UTM_50N: &str = "+proj=utm +zone=50 +datum=WGS84 +units=m +no_defs";

    /// Accepted by the recording backend but never by `proj4rs`.
    pub const INVALID: &str = "+proj=definitely_not_a_projection";
}

/// Points with known values in other systems.
pub mod points {
    use crs_common::Point;

    /// Tiananmen, Beijing, in EPSG:4326 degrees.
    pub const BEIJING_LONLAT: Point = Point {
        x: 116.404,
        y: 39.915,
    };

    /// [`BEIJING_LONLAT`] in EPSG:3857 meters.
    pub const BEIJING_WEB_MERCATOR: Point = Point {
        x: 12958034.006,
        y: 4853597.988,
    };

    /// Shanghai, in EPSG:4326 degrees.
    pub const SHANGHAI_LONLAT: Point = Point {
        x: 121.4737,
        y: 31.2304,
    };

    /// Null island.
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };
}

/// Tolerances used by round-trip assertions.
pub mod tolerance {
    /// Geographic systems, in degrees.
    pub const DEGREES: f64 = 1e-6;

    /// Projected systems, in meters.
    pub const METERS: f64 = 1e-3;

    /// Comparison against published reference values.
    pub const REFERENCE: f64 = 0.1;
}
