//! The CRS catalog and its lazily built cache.
//!
//! The registry owns the projection backend so that every catalog entry is
//! guaranteed to have been offered to it. The merged catalog is cached in a
//! [`OnceLock`]: reads build it at most once, and [`CrsRegistry::add`]
//! (which needs `&mut self`) drops it so the next read rebuilds.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use crs_common::{CoordinateSystem, CrsError, CrsKind, CrsResult, CrsSummary};
use projection::ProjectionBackend;
use tracing::{debug, info, warn};

use crate::definitions;

/// Code to system mapping, iterated in ascending code order.
pub type Catalog = BTreeMap<String, CoordinateSystem>;

pub struct CrsRegistry<B: ProjectionBackend> {
    backend: B,
    /// Entries added through [`CrsRegistry::add`], applied over the seeds.
    runtime: BTreeMap<String, CoordinateSystem>,
    cache: OnceLock<Catalog>,
}

impl<B: ProjectionBackend> CrsRegistry<B> {
    /// Create a registry and register every seed definition with `backend`.
    ///
    /// Seeds the backend rejects are logged and kept in the catalog;
    /// transforms through them fail at projection time.
    pub fn new(mut backend: B) -> Self {
        let mut rejected = 0usize;
        for system in definitions::seed_systems() {
            if let Err(e) = backend.register(&system.code, &system.definition) {
                warn!(code = %system.code, error = %e, "Seed definition rejected by projection backend");
                rejected += 1;
            }
        }
        debug!(rejected = rejected, "Registered seed definitions");

        Self {
            backend,
            runtime: BTreeMap::new(),
            cache: OnceLock::new(),
        }
    }

    /// The full catalog, built on first access after construction or `add`.
    pub fn get_all(&self) -> &Catalog {
        self.cache.get_or_init(|| self.build_catalog())
    }

    pub fn get(&self, code: &str) -> Option<&CoordinateSystem> {
        self.get_all().get(code)
    }

    pub fn is_supported(&self, code: &str) -> bool {
        self.get_all().contains_key(code)
    }

    /// Resolve a code to its transform classification.
    pub fn classify(&self, code: &str) -> CrsResult<CrsKind> {
        self.get(code)
            .map(CoordinateSystem::kind)
            .ok_or_else(|| CrsError::UnknownCrs(code.to_string()))
    }

    /// Listing of every catalog entry in catalog order.
    pub fn list(&self) -> Vec<CrsSummary> {
        self.get_all().values().map(CoordinateSystem::summary).collect()
    }

    /// Insert or replace a system.
    ///
    /// The definition is registered with the backend first; if the backend
    /// rejects it, neither the catalog nor the cache change.
    pub fn add(
        &mut self,
        code: &str,
        name: &str,
        description: &str,
        definition: &str,
    ) -> CrsResult<()> {
        self.insert(CoordinateSystem::new(code, name, description, definition))
    }

    /// [`CrsRegistry::add`] taking an owned entry.
    pub fn insert(&mut self, system: CoordinateSystem) -> CrsResult<()> {
        self.backend
            .register(&system.code, &system.definition)
            .map_err(|cause| CrsError::Registration {
                code: system.code.clone(),
                cause,
            })?;

        info!(code = %system.code, name = %system.name, "Added coordinate system");
        self.runtime.insert(system.code.clone(), system);
        self.invalidate();
        Ok(())
    }

    /// Add several systems in order, stopping at the first rejection.
    ///
    /// Systems added before the failure stay added. Returns how many were added.
    pub fn extend<I>(&mut self, systems: I) -> CrsResult<usize>
    where
        I: IntoIterator<Item = CoordinateSystem>,
    {
        let mut added = 0;
        for system in systems {
            self.insert(system)?;
            added += 1;
        }
        Ok(added)
    }

    /// Drop the cached catalog; the next read rebuilds it.
    pub fn invalidate(&mut self) {
        if self.cache.take().is_some() {
            debug!("CRS catalog cache invalidated");
        }
    }

    /// Whether a built catalog is currently cached.
    pub fn is_cached(&self) -> bool {
        self.cache.get().is_some()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn build_catalog(&self) -> Catalog {
        let mut catalog = Catalog::new();
        for system in definitions::seed_systems() {
            catalog.insert(system.code.clone(), system);
        }
        for (code, system) in &self.runtime {
            catalog.insert(code.clone(), system.clone());
        }

        debug!(
            systems = catalog.len(),
            runtime = self.runtime.len(),
            "Built CRS catalog"
        );
        catalog
    }
}
