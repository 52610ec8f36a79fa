//! Configuration management for pagetree.
//!
//! Parses `pagetree.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ```toml
//! [hierarchy]
//! duplicate_ids = "first"
//! orphans = "interleave"
//!
//! [output]
//! format = "text"
//! indent = 4
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override output format.
    pub format: Option<OutputFormat>,
    /// Override orphan placement.
    pub orphans: Option<OrphanPlacement>,
    /// Override duplicate id resolution.
    pub duplicate_ids: Option<DuplicateIds>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "pagetree.toml";

/// Largest accepted `output.indent`.
const MAX_INDENT: usize = 16;

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Hierarchy building configuration.
    pub hierarchy: HierarchyConfig,
    /// Output configuration.
    pub output: OutputConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Hierarchy building configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct HierarchyConfig {
    /// Which record a duplicated id resolves to.
    pub duplicate_ids: DuplicateIds,
    /// Where orphaned records are placed.
    pub orphans: OrphanPlacement,
}

/// Duplicate id resolution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicateIds {
    /// First record with an id wins.
    #[default]
    First,
    /// Last record with an id wins.
    Last,
}

/// Orphan placement among top-level records.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrphanPlacement {
    /// Orphans keep their input position.
    #[default]
    Interleave,
    /// Orphans follow all top-level records.
    Append,
}

/// Output configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format for `sort`.
    pub format: OutputFormat,
    /// Spaces per depth level in text output.
    pub indent: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            indent: 4,
        }
    }
}

/// Output format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Indented text, one record per line.
    #[default]
    Text,
    /// JSON array.
    Json,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `pagetree.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading, allowing CLI arguments to take
    /// precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(format) = settings.format {
            self.output.format = format;
        }
        if let Some(orphans) = settings.orphans {
            self.hierarchy.orphans = orphans;
        }
        if let Some(duplicate_ids) = settings.duplicate_ids {
            self.hierarchy.duplicate_ids = duplicate_ids;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let cwd = std::env::current_dir().ok()?;
        Self::discover_from(&cwd)
    }

    /// Search for config file in `start` and its parents.
    fn discover_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_output()
    }

    /// Validate output configuration.
    fn validate_output(&self) -> Result<(), ConfigError> {
        let indent = self.output.indent;
        if indent == 0 {
            return Err(ConfigError::Validation(
                "output.indent must be greater than 0".to_owned(),
            ));
        }
        if indent > MAX_INDENT {
            return Err(ConfigError::Validation(format!(
                "output.indent cannot exceed {MAX_INDENT}"
            )));
        }
        Ok(())
    }
}
