//! One spritesheet batch: scan, load, compose, save

use std::path::PathBuf;

use crate::config::{GridsheetConfig, DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_FILE, DEFAULT_PADDING};
use crate::error::{DecodeError, SheetError};
use crate::layout::GridLayout;
use crate::loader::load_images;
use crate::output::save_png;
use crate::scan::find_image_files;
use crate::spritesheet::{compose, Placement};

/// Settings for a single batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetOptions {
    /// Folder scanned for images
    pub input: PathBuf,
    /// Spritesheet file to write
    pub output: PathBuf,
    /// Gap in pixels between cells
    pub padding: u32,
    /// Decode threads (1 = sequential)
    pub jobs: usize,
    /// Load and lay out, but do not write the output file
    pub dry_run: bool,
}

impl Default for SheetOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_DIR),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            padding: DEFAULT_PADDING,
            jobs: 1,
            dry_run: false,
        }
    }
}

impl From<&GridsheetConfig> for SheetOptions {
    fn from(config: &GridsheetConfig) -> Self {
        Self {
            input: config.sheet.input.clone(),
            output: config.sheet.output.clone(),
            padding: config.sheet.padding,
            jobs: config.decode.jobs,
            dry_run: false,
        }
    }
}

impl SheetOptions {
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// What a successful batch did.
#[derive(Debug)]
pub struct BatchReport {
    /// Supported files found in the input folder, in placement order
    pub discovered: Vec<PathBuf>,
    /// Files that could not be decoded and were left out
    pub failures: Vec<DecodeError>,
    /// Grid used for the sheet
    pub layout: GridLayout,
    /// Canvas size in pixels
    pub size: (u32, u32),
    /// Where each loaded image went
    pub placements: Vec<Placement>,
    /// Output path (written only when `written` is true)
    pub output: PathBuf,
    /// False for dry runs
    pub written: bool,
}

impl BatchReport {
    /// Number of images packed into the sheet.
    pub fn packed(&self) -> usize {
        self.placements.len()
    }
}

/// Run one batch.
///
/// Per-file decode failures are logged and skipped. Only the batch-level
/// conditions below stop the run, and none of them writes an output file.
///
/// # Errors
///
/// * `SheetError::DirectoryNotFound` - the input folder is missing
/// * `SheetError::NoSupportedFiles` - no file has a supported extension
/// * `SheetError::NoImagesToPack` - every file failed to decode
/// * `SheetError::CanvasTooLarge` / `SheetError::Io` / `SheetError::Output`
pub fn run_batch(options: &SheetOptions) -> Result<BatchReport, SheetError> {
    let files = find_image_files(&options.input)?;
    if files.is_empty() {
        return Err(SheetError::NoSupportedFiles { path: options.input.clone() });
    }

    let loaded = load_images(&files, options.jobs);
    let sheet = compose(&loaded.images, options.padding)?;
    drop(loaded.images);

    let written = if options.dry_run {
        log::info!("Dry run: not writing '{}'.", options.output.display());
        false
    } else {
        save_png(&sheet.image, &options.output)?;
        log::info!("Spritesheet saved as '{}'.", options.output.display());
        true
    };

    Ok(BatchReport {
        discovered: files,
        failures: loaded.failures,
        layout: sheet.layout,
        size: (sheet.width(), sheet.height()),
        placements: sheet.placements,
        output: options.output.clone(),
        written,
    })
}
