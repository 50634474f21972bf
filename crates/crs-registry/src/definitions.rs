//! Seed data for the CRS catalog.
//!
//! Three tables feed the catalog, in increasing precedence:
//! 1. [`generated_systems`]: well-known EPSG codes described only by their
//!    PROJ.4 definition
//! 2. [`CURATED_SYSTEMS`]: common systems with hand-written names
//! 3. [`ALIAS_SYSTEMS`]: local conventions treated as EPSG:4326

use crs_common::CoordinateSystem;

/// A compile-time catalog entry.
#[derive(Debug, Clone, Copy)]
pub struct SeedEntry {
    pub code: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub definition: &'static str,
}

impl SeedEntry {
    pub fn to_system(&self) -> CoordinateSystem {
        CoordinateSystem::new(self.code, self.name, self.description, self.definition)
    }
}

const WGS84: &str = "+proj=longlat +datum=WGS84 +no_defs";
const WEB_MERCATOR: &str =
    "+proj=merc +a=6378137 +b=6378137 +lat_ts=0 +lon_0=0 +x_0=0 +y_0=0 +k=1 +units=m +no_defs";
const CGCS2000: &str = "+proj=longlat +ellps=GRS80 +no_defs";

pub const CURATED_SYSTEMS: [SeedEntry; 4] = [
    SeedEntry {
        code: "EPSG:4326",
        name: "WGS84",
        description: "World Geodetic System 1984",
        definition: WGS84,
    },
    SeedEntry {
        code: "EPSG:3857",
        name: "Web Mercator",
        description: "Web Mercator projection used by online maps",
        definition: WEB_MERCATOR,
    },
    SeedEntry {
        code: "EPSG:4490",
        name: "CGCS2000",
        description: "China Geodetic Coordinate System 2000",
        definition: CGCS2000,
    },
    SeedEntry {
        code: "EPSG:4547",
        name: "CGCS2000 / 3-degree Gauss-Kruger CM 114E",
        description: "CGCS2000 3-degree zone with central meridian 114E",
        definition: "+proj=tmerc +lat_0=0 +lon_0=114 +k=1 +x_0=500000 +y_0=0 +ellps=GRS80 +units=m +no_defs",
    },
];

/// Alias systems have a WGS84 definition but are never projected with it.
pub const ALIAS_SYSTEMS: [SeedEntry; 2] = [
    SeedEntry {
        code: "GCJ02",
        name: "GCJ-02 (Mars Coordinates)",
        description: "Obfuscated coordinate system used by AMap and Tencent Maps",
        definition: WGS84,
    },
    SeedEntry {
        code: "BD09",
        name: "BD-09 (Baidu Coordinates)",
        description: "Coordinate system used by Baidu Maps",
        definition: WGS84,
    },
];

/// Individually listed EPSG definitions.
const EPSG_DEFINITIONS: &[(&str, &str)] = &[
    // World
    ("EPSG:4326", WGS84),
    ("EPSG:3857", WEB_MERCATOR),
    (
        "EPSG:4087",
        "+proj=eqc +lat_ts=0 +lat_0=0 +lon_0=0 +x_0=0 +y_0=0 +datum=WGS84 +units=m +no_defs",
    ),
    ("EPSG:3785", WEB_MERCATOR),
    // China, geographic
    ("EPSG:4490", CGCS2000),
    (
        "EPSG:4214",
        "+proj=longlat +ellps=krass +towgs84=15.8,-154.4,-82.3,0,0,0,0 +no_defs",
    ),
    (
        "EPSG:4610",
        "+proj=longlat +a=6378140 +b=6356755.288157528 +no_defs",
    ),
    // Europe
    (
        "EPSG:2154",
        "+proj=lcc +lat_0=46.5 +lon_0=3 +lat_1=49 +lat_2=44 +x_0=700000 +y_0=6600000 +ellps=GRS80 +towgs84=0,0,0,0,0,0,0 +units=m +no_defs",
    ),
    (
        "EPSG:25832",
        "+proj=utm +zone=32 +ellps=GRS80 +towgs84=0,0,0,0,0,0,0 +units=m +no_defs",
    ),
    (
        "EPSG:25833",
        "+proj=utm +zone=33 +ellps=GRS80 +towgs84=0,0,0,0,0,0,0 +units=m +no_defs",
    ),
    (
        "EPSG:31255",
        "+proj=tmerc +lat_0=0 +lon_0=16.3333333333333 +k=1 +x_0=0 +y_0=-5000000 +ellps=bessel +towgs84=577.326,90.129,463.919,5.137,1.474,5.297,2.4232 +units=m +no_defs",
    ),
    (
        "EPSG:28992",
        "+proj=sterea +lat_0=52.1561605555556 +lon_0=5.38763888888889 +k=0.9999079 +x_0=155000 +y_0=463000 +ellps=bessel +towgs84=565.417,50.3319,465.552,-0.398957,0.343988,-1.8774,4.0725 +units=m +no_defs",
    ),
    (
        "EPSG:31466",
        "+proj=tmerc +lat_0=0 +lon_0=6 +k=1 +x_0=2500000 +y_0=0 +ellps=bessel +towgs84=598.1,73.7,418.2,0.202,0.045,-2.455,6.7 +units=m +no_defs",
    ),
    (
        "EPSG:31467",
        "+proj=tmerc +lat_0=0 +lon_0=9 +k=1 +x_0=3500000 +y_0=0 +ellps=bessel +towgs84=598.1,73.7,418.2,0.202,0.045,-2.455,6.7 +units=m +no_defs",
    ),
    (
        "EPSG:31468",
        "+proj=tmerc +lat_0=0 +lon_0=12 +k=1 +x_0=4500000 +y_0=0 +ellps=bessel +towgs84=598.1,73.7,418.2,0.202,0.045,-2.455,6.7 +units=m +no_defs",
    ),
    (
        "EPSG:31469",
        "+proj=tmerc +lat_0=0 +lon_0=15 +k=1 +x_0=5500000 +y_0=0 +ellps=bessel +towgs84=598.1,73.7,418.2,0.202,0.045,-2.455,6.7 +units=m +no_defs",
    ),
];

/// CGCS2000 / 3-degree Gauss-Kruger CM 75E..135E.
const GK3_CM_FIRST_CODE: u32 = 4534;
const GK3_CM_COUNT: u32 = 21;

/// CGCS2000 / Gauss-Kruger zones 13..23 (6-degree, zone-prefixed easting).
const GK6_ZONE_FIRST_CODE: u32 = 4491;
const GK6_FIRST_ZONE: u32 = 13;
const GK6_ZONE_COUNT: u32 = 11;

/// CGCS2000 / Gauss-Kruger CM 75E..135E (6-degree, no zone prefix).
const GK6_CM_FIRST_CODE: u32 = 4502;

/// WGS 84 / UTM zones covering China.
const UTM_NORTH_ZONES: std::ops::RangeInclusive<u32> = 49..=53;

fn gauss_kruger(lon_0: u32, false_easting: u32) -> String {
    format!(
        "+proj=tmerc +lat_0=0 +lon_0={} +k=1 +x_0={} +y_0=0 +ellps=GRS80 +units=m +no_defs",
        lon_0, false_easting
    )
}

/// All `(code, definition)` rows of the generated set, in table order.
fn generated_rows() -> Vec<(String, String)> {
    let mut rows: Vec<(String, String)> = EPSG_DEFINITIONS
        .iter()
        .map(|(code, def)| (code.to_string(), def.to_string()))
        .collect();

    for i in 0..GK3_CM_COUNT {
        rows.push((
            format!("EPSG:{}", GK3_CM_FIRST_CODE + i),
            gauss_kruger(75 + 3 * i, 500_000),
        ));
    }

    for i in 0..GK6_ZONE_COUNT {
        let zone = GK6_FIRST_ZONE + i;
        rows.push((
            format!("EPSG:{}", GK6_ZONE_FIRST_CODE + i),
            gauss_kruger(6 * zone - 3, zone * 1_000_000 + 500_000),
        ));
        rows.push((
            format!("EPSG:{}", GK6_CM_FIRST_CODE + i),
            gauss_kruger(6 * zone - 3, 500_000),
        ));
    }

    for zone in UTM_NORTH_ZONES {
        rows.push((
            format!("EPSG:{}", 32600 + zone),
            format!("+proj=utm +zone={} +datum=WGS84 +units=m +no_defs", zone),
        ));
    }

    rows
}

/// Generated EPSG entries. The name is the code itself and the description
/// is derived from the raw definition.
pub fn generated_systems() -> Vec<CoordinateSystem> {
    generated_rows()
        .into_iter()
        .map(|(code, definition)| {
            let description = format!("{} - {}", code, definition);
            CoordinateSystem {
                name: code.clone(),
                code,
                description,
                definition,
            }
        })
        .collect()
}

/// Every seed entry in increasing precedence order.
///
/// Applying these in order (later entries overwrite earlier ones) yields
/// the seeded part of the catalog.
pub fn seed_systems() -> Vec<CoordinateSystem> {
    let mut systems = generated_systems();
    systems.extend(CURATED_SYSTEMS.iter().map(SeedEntry::to_system));
    systems.extend(ALIAS_SYSTEMS.iter().map(SeedEntry::to_system));
    systems
}
