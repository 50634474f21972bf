//! Extra coordinate systems loaded from YAML.
//!
//! ```yaml
//! systems:
//!   - code: "LOCAL:SITE"
//!     name: "Site grid"
//!     description: "Construction site grid"
//!     definition: "+proj=tmerc +lon_0=117 +k=1 +x_0=500000 +ellps=GRS80"
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use crs_common::CoordinateSystem;
use crs_registry::CrsRegistry;
use projection::ProjectionBackend;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Coordinate systems to add to the registry at startup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefinitionsConfig {
    #[serde(default)]
    pub systems: Vec<SystemDefinition>,
}

/// One configured system. Name and description are optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemDefinition {
    pub code: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub definition: String,
}

impl SystemDefinition {
    /// A missing name falls back to the code, a missing description to the
    /// definition, like generated catalog entries.
    pub fn into_system(self) -> CoordinateSystem {
        let name = self.name.unwrap_or_else(|| self.code.clone());
        let description = self
            .description
            .unwrap_or_else(|| format!("{} - {}", self.code, self.definition));
        CoordinateSystem::new(self.code, name, description, self.definition)
    }
}

impl DefinitionsConfig {
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).context("Failed to parse definitions YAML")
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read definitions file: {:?}", path))?;

        let config = Self::from_yaml(&content)
            .with_context(|| format!("Failed to load definitions from {:?}", path))?;

        info!(
            "Loaded {} coordinate system definitions from {:?}",
            config.systems.len(),
            path
        );
        Ok(config)
    }

    /// Add every configured system to `registry`, in file order.
    pub fn apply<B: ProjectionBackend>(self, registry: &mut CrsRegistry<B>) -> Result<usize> {
        let systems = self.systems.into_iter().map(SystemDefinition::into_system);
        registry
            .extend(systems)
            .context("Failed to register configured coordinate system")
    }
}
