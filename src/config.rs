//! Application configuration management.
//!
//! Optional defaults are read from a JSON file in the platform config
//! directory (or a path given with `--config`). Every field can also be set
//! on the command line, which takes precedence. The file is never written.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::duplicates::DetectionMode;
use crate::scanner::HashAlgorithm;

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Content hash algorithm.
    pub algorithm: HashAlgorithm,
    /// Duplicate detection mode.
    pub mode: DetectionMode,
    /// Follow symbolic links while walking.
    pub follow_symlinks: bool,
}

impl Config {
    /// Load the configuration from the default platform-specific path.
    ///
    /// Falls back to defaults if the file is missing or unreadable.
    pub fn load() -> Self {
        match Self::config_path().and_then(|path| Self::load_optional(&path)) {
            Ok(config) => config,
            Err(e) => {
                log::debug!("Failed to load config, using defaults: {:#}", e);
                Self::default()
            }
        }
    }

    /// Load the configuration from an explicit path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid JSON.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    fn load_optional(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(path)
    }

    /// Get the default platform-specific configuration path.
    fn config_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("com", "dupescan", "dupescan")
            .ok_or_else(|| anyhow::anyhow!("Failed to determine project directories"))?;
        Ok(project_dirs.config_dir().join("config.json"))
    }
}
