//! Configuration schema types for `gridsheet.toml`
//!
//! Defines the structure and validation rules for spritesheet configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Name of the configuration file looked up from the working directory
pub const CONFIG_FILE_NAME: &str = "gridsheet.toml";

/// Default folder scanned for images
pub const DEFAULT_INPUT_DIR: &str = "input";

/// Default spritesheet file, relative to the working directory
pub const DEFAULT_OUTPUT_FILE: &str = "spritesheet.png";

/// Default gap in pixels between cells
pub const DEFAULT_PADDING: u32 = 2;

/// Spritesheet input/output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetConfig {
    /// Folder containing the source images
    #[serde(default = "default_input")]
    pub input: PathBuf,
    /// Spritesheet file to write
    #[serde(default = "default_output")]
    pub output: PathBuf,
    /// Gap in pixels between adjacent cells
    #[serde(default = "default_padding")]
    pub padding: u32,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self { input: default_input(), output: default_output(), padding: default_padding() }
    }
}

fn default_input() -> PathBuf {
    PathBuf::from(DEFAULT_INPUT_DIR)
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_FILE)
}

fn default_padding() -> u32 {
    DEFAULT_PADDING
}

/// Image decoding settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecodeConfig {
    /// Number of decode threads (1 decodes sequentially)
    #[serde(default = "default_jobs")]
    pub jobs: usize,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self { jobs: default_jobs() }
    }
}

fn default_jobs() -> usize {
    1
}

/// Complete gridsheet.toml configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GridsheetConfig {
    /// Input, output and padding
    #[serde(default)]
    pub sheet: SheetConfig,
    /// Decoder settings
    #[serde(default)]
    pub decode: DecodeConfig,
}

/// Configuration validation error
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "decode.jobs")
    pub field: String,
    /// Error message
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "setting '{}' {}", self.field, self.message)
    }
}

impl GridsheetConfig {
    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        if self.sheet.input.as_os_str().is_empty() {
            errors.push(ConfigValidationError {
                field: "sheet.input".to_string(),
                message: "must be a non-empty path".to_string(),
            });
        }

        let is_png = self
            .sheet
            .output
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("png"));
        if !is_png {
            errors.push(ConfigValidationError {
                field: "sheet.output".to_string(),
                message: "must be a .png file".to_string(),
            });
        }

        if self.decode.jobs == 0 {
            errors.push(ConfigValidationError {
                field: "decode.jobs".to_string(),
                message: "must be a positive integer".to_string(),
            });
        }

        errors
    }
}
