pub mod resolution_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{SagaError, SagaResult};

pub use resolution_config::ResolutionConfig;

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SagaConfig {
    pub resolution: ResolutionConfig,
}

impl SagaConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Load config from a TOML file on disk.
    pub fn from_toml_file(path: &Path) -> SagaResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SagaError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        Self::from_toml(&content).map_err(|e| SagaError::Config(e.to_string()))
    }
}
