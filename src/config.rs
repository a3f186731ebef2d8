//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/aockit/aockit.toml`
//! 3. Local config: `<dir>/.aockit.toml`
//! 4. Environment variables: `AOCKIT_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::application::parse::SplitOptions;
use crate::application::{ApplicationError, ApplicationResult, IoResultExt};

/// Raw settings for intermediate parsing (Option to detect "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub delimiter: Option<String>,
    pub trim_cells: Option<bool>,
}

/// Unified configuration for aockit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Cell delimiter for grid input (empty: one cell per character)
    pub delimiter: String,
    /// Trim whitespace around grid cells
    pub trim_cells: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            delimiter: ",".into(),
            trim_cells: false,
        }
    }
}

/// Get the XDG config directory for aockit.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "aockit").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("aockit.toml"))
}

/// Get the path to the local config file in a directory.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".aockit.toml")
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> ApplicationResult<RawSettings> {
    let content = std::fs::read_to_string(path).with_path_context("read config", path)?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            delimiter: overlay
                .delimiter
                .clone()
                .unwrap_or_else(|| self.delimiter.clone()),
            trim_cells: overlay.trim_cells.unwrap_or(self.trim_cells),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_dir` - Optional directory holding a `.aockit.toml`
    #[instrument(level = "debug")]
    pub fn load(local_dir: Option<&Path>) -> ApplicationResult<Self> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("global config: {}", global_path.display());
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        if let Some(dir) = local_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                debug!("local config: {}", local_path.display());
                current = current.merge_with(&load_raw_settings(&local_path)?);
            }
        }

        Self::apply_env_overrides(current)
    }

    /// Apply AOCKIT_* environment variables as explicit overrides.
    ///
    /// `AOCKIT_DELIMITER`, `AOCKIT_TRIM_CELLS`; `__` separates nested keys.
    fn apply_env_overrides(mut settings: Self) -> ApplicationResult<Self> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("AOCKIT")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("delimiter") {
            settings.delimiter = val;
        }
        if let Ok(val) = config.get_bool("trim_cells") {
            settings.trim_cells = val;
        }
        Ok(settings)
    }

    /// Split options derived from these settings.
    pub fn split_options(&self) -> SplitOptions<'_> {
        SplitOptions::new(&self.delimiter).trimmed(self.trim_cells)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> ApplicationResult<String> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_defaults_when_created_then_comma_untrimmed() {
        let settings = Settings::default();
        assert_eq!(settings.delimiter, ",");
        assert!(!settings.trim_cells);
    }

    #[test]
    fn given_partial_overlay_when_merging_then_keeps_unspecified() {
        let base = Settings::default();
        let overlay = RawSettings {
            delimiter: Some(" ".into()),
            trim_cells: None,
        };
        let merged = base.merge_with(&overlay);
        assert_eq!(merged.delimiter, " ");
        assert!(!merged.trim_cells);
    }

    #[test]
    fn given_settings_when_to_toml_then_contains_fields() {
        let toml = Settings::default().to_toml().unwrap();
        assert!(toml.contains("delimiter = \",\""));
        assert!(toml.contains("trim_cells = false"));
    }
}
