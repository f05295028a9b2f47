//! Planner configuration
//!
//! Configuration is read from `--config <path>` or from
//! `~/.config/campus/config.toml`. A missing file yields defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CampusError, Result};

pub use types::{CampusConfig, DisplayConfig, DEFAULT_BUILDING_TYPES};

const CONFIG_DIR: &str = "campus";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "CAMPUS_CONFIG_DIR";

impl CampusConfig {
    /// Default location of the configuration file
    pub fn default_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    CampusError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load configuration from an explicit path, or from the default location.
    ///
    /// An explicit path must exist; the default location falls back to
    /// defaults when no file is present.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let path = Self::default_path()?;
                if !path.exists() {
                    tracing::debug!(path = %path.display(), "no config file, using defaults");
                    return Ok(Self::default());
                }
                Self::load(&path)
            }
        }
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CampusError::Other(format!(
                "failed to read config from {}: {}",
                path.display(),
                e
            ))
        })?;
        let config: CampusConfig = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| CampusError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Whether a building type may be registered under this configuration
    pub fn allows_building_type(&self, kind: &str) -> bool {
        !self.strict_building_types
            || self
                .building_types
                .iter()
                .any(|t| t.eq_ignore_ascii_case(kind.trim()))
    }
}

impl DisplayConfig {
    /// Render a distance according to the configured precision
    pub fn format_distance(&self, value: f64) -> String {
        match self.distance_precision {
            Some(precision) => format!("{:.*}", precision, value),
            None => value.to_string(),
        }
    }

    /// Indentation prefix for a hierarchy depth
    pub fn indent(&self, depth: usize) -> String {
        " ".repeat(self.indent_width * depth)
    }
}
