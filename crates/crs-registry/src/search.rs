//! Case-insensitive substring search over the catalog.

use crs_common::{CoordinateSystem, CrsSummary};
use projection::ProjectionBackend;

use crate::registry::CrsRegistry;

/// Entries whose code, name or description contains `query`, ignoring case.
///
/// Results keep catalog order. An empty query matches everything.
pub fn search<B: ProjectionBackend>(registry: &CrsRegistry<B>, query: &str) -> Vec<CrsSummary> {
    let needle = query.to_lowercase();
    registry
        .get_all()
        .values()
        .filter(|system| entry_matches(system, &needle))
        .map(CoordinateSystem::summary)
        .collect()
}

/// `needle` must already be lowercase.
fn entry_matches(system: &CoordinateSystem, needle: &str) -> bool {
    system.code.to_lowercase().contains(needle)
        || system.name.to_lowercase().contains(needle)
        || system.description.to_lowercase().contains(needle)
}
