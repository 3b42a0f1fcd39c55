//! Configuration: which labels are the root and the transfer endpoints

use std::path::Path;

use orrery_core::{ParentMap, DEFAULT_ROOT};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SuiteError};

/// Labels used when analysing a map. Every field is optional in the TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrreryConfig {
    /// The universal centre of mass.
    pub root: String,
    /// Body the transfer starts from.
    pub from: String,
    /// Body the transfer ends at.
    pub to: String,
}

impl OrreryConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| SuiteError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&contents).map_err(|source| SuiteError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Empty map rooted at the configured root.
    pub fn new_map(&self) -> ParentMap {
        ParentMap::with_root(self.root.as_str())
    }
}

impl Default for OrreryConfig {
    fn default() -> Self {
        Self {
            root: DEFAULT_ROOT.to_string(),
            from: "YOU".to_string(),
            to: "SAN".to_string(),
        }
    }
}
