//! Configuration loading and discovery for `gridsheet.toml`
//!
//! Provides functions to find, load, and merge configuration.

use super::schema::{GridsheetConfig, CONFIG_FILE_NAME};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse gridsheet.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Override input folder
    pub input: Option<PathBuf>,
    /// Override output file
    pub output: Option<PathBuf>,
    /// Override padding
    pub padding: Option<u32>,
    /// Override decode thread count
    pub jobs: Option<usize>,
}

/// Find gridsheet.toml by walking up from the current working directory.
pub fn find_config() -> Option<PathBuf> {
    env::current_dir().ok().and_then(find_config_from)
}

/// Find gridsheet.toml by walking up from a specific directory.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.is_file() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration.
///
/// The result is not validated; see `validate_config`.
///
/// If a path is provided, loads from that file. Otherwise, uses `find_config()`
/// to locate the config file. If no config file is found, returns the
/// default configuration.
///
/// Relative paths inside a config file are resolved against the directory
/// holding that file.
///
/// # Example
/// ```ignore
/// // Load from discovered config
/// let config = load_config(None)?;
///
/// // Load from specific path
/// let config = load_config(Some(Path::new("art/gridsheet.toml")))?;
/// ```
pub fn load_config(path: Option<&Path>) -> Result<GridsheetConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => {
            log::debug!("Using config: {}", p.display());
            load_config_file(&p)
        }
        None => Ok(GridsheetConfig::default()),
    }
}

/// Load configuration from a specific file path.
fn load_config_file(path: &Path) -> Result<GridsheetConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let mut config: GridsheetConfig = toml::from_str(&contents)?;

    if let Some(root) = path.parent() {
        config.sheet.input = resolve_path(root, &config.sheet.input);
        config.sheet.output = resolve_path(root, &config.sheet.output);
    }

    Ok(config)
}

/// Apply CLI overrides on top of a loaded configuration.
///
/// CLI values always win over file values and defaults.
pub fn merge_cli_overrides(config: &mut GridsheetConfig, overrides: &CliOverrides) {
    if let Some(ref input) = overrides.input {
        config.sheet.input = input.clone();
    }
    if let Some(ref output) = overrides.output {
        config.sheet.output = output.clone();
    }
    if let Some(padding) = overrides.padding {
        config.sheet.padding = padding;
    }
    if let Some(jobs) = overrides.jobs {
        config.decode.jobs = jobs;
    }
}

/// Validate a fully merged configuration.
///
/// Run this after `merge_cli_overrides`, so a CLI flag can replace a bad
/// file value before it is rejected.
pub fn validate_config(config: &GridsheetConfig) -> Result<(), ConfigError> {
    let errors = config.validate();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()))
    }
}

/// Resolve a path relative to a base directory.
///
/// If the path is absolute, returns it unchanged.
/// If relative, joins it with the base.
pub fn resolve_path(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() || base.as_os_str().is_empty() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
