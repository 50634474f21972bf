//! Loading extra definitions from YAML files into a registry.

use std::io::Write;

use crs_cli::config::DefinitionsConfig;
use crs_common::Point;
use crs_registry::{search, CrsRegistry, TransformEngine};
use projection::Proj4Backend;
use tempfile::NamedTempFile;

fn write_yaml(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp file");
    file
}

#[test]
fn test_load_and_apply_definitions() {
    let file = write_yaml(
        r#"
systems:
  - code: "EPSG:9999"
    name: "Test"
    description: "desc"
    definition: "+proj=longlat +datum=WGS84 +no_defs"
  - code: "LOCAL:SITE"
    name: "Site grid"
    description: "Construction site grid"
    definition: "+proj=tmerc +lat_0=0 +lon_0=117 +k=1 +x_0=500000 +y_0=0 +ellps=GRS80 +units=m +no_defs"
"#,
    );

    let mut registry = CrsRegistry::new(Proj4Backend::new());
    assert!(!registry.is_supported("EPSG:9999"));

    let config = DefinitionsConfig::load_from_file(file.path()).unwrap();
    let added = config.apply(&mut registry).unwrap();

    assert_eq!(added, 2);
    assert!(registry.is_supported("EPSG:9999"));
    assert_eq!(registry.get("LOCAL:SITE").unwrap().name, "Site grid");
    assert_eq!(search(&registry, "construction site").len(), 1);

    let engine = TransformEngine::new(&registry);
    let p = engine
        .transform_point(Point::new(117.0, 30.0), "EPSG:4326", "LOCAL:SITE")
        .unwrap();
    assert!((p.x - 500000.0).abs() < 0.01);
}

#[test]
fn test_invalid_definition_stops_loading() {
    let file = write_yaml(
        r#"
systems:
  - code: "LOCAL:OK"
    definition: "+proj=longlat +datum=WGS84 +no_defs"
  - code: "LOCAL:BROKEN"
    definition: "+proj=definitely_not_a_projection"
"#,
    );

    let mut registry = CrsRegistry::new(Proj4Backend::new());
    let config = DefinitionsConfig::load_from_file(file.path()).unwrap();
    let err = config.apply(&mut registry).unwrap_err();

    assert!(format!("{:#}", err).contains("LOCAL:BROKEN"));
    assert!(registry.is_supported("LOCAL:OK"));
    assert!(!registry.is_supported("LOCAL:BROKEN"));
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = DefinitionsConfig::load_from_file(dir.path().join("missing.yaml"));
    assert!(result.is_err());
}

#[test]
fn test_malformed_yaml_is_an_error() {
    let file = write_yaml("systems: [this is: not: valid");
    assert!(DefinitionsConfig::load_from_file(file.path()).is_err());
}
