//! Image loading
//!
//! Decodes image files into RGBA8 buffers. A file that fails to load is
//! reported and skipped; it never aborts the batch.

use std::fs;
use std::path::{Path, PathBuf};

use image::{ImageError, RgbaImage};
use rayon::prelude::*;

use crate::error::DecodeError;

/// A decoded image and the file it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedImage {
    /// Source file
    pub path: PathBuf,
    /// Pixels as 8-bit straight-alpha RGBA
    pub pixels: RgbaImage,
}

impl LoadedImage {
    /// Wrap already-decoded pixels.
    pub fn new(path: impl Into<PathBuf>, pixels: RgbaImage) -> Self {
        Self { path: path.into(), pixels }
    }

    /// Width of the decoded image in pixels.
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Height of the decoded image in pixels.
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }
}

/// Result of loading a batch of files.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Successfully decoded images, in input order
    pub images: Vec<LoadedImage>,
    /// Files that were skipped, in input order
    pub failures: Vec<DecodeError>,
}

/// Decode an in-memory image of any supported format into RGBA8.
///
/// The format is sniffed from the bytes, not taken from a file name.
/// Sources without an alpha channel come out fully opaque.
pub fn decode(bytes: &[u8]) -> Result<RgbaImage, ImageError> {
    Ok(image::load_from_memory(bytes)?.to_rgba8())
}

/// Read and decode a single file.
pub fn load_image(path: &Path) -> Result<LoadedImage, DecodeError> {
    let bytes =
        fs::read(path).map_err(|source| DecodeError::Read { path: path.to_path_buf(), source })?;
    let pixels =
        decode(&bytes).map_err(|source| DecodeError::Decode { path: path.to_path_buf(), source })?;
    Ok(LoadedImage::new(path, pixels))
}

/// Load every file in `paths`, keeping input order and skipping failures.
///
/// With `jobs > 1` the files are decoded on a thread pool of that size. The
/// results, and the log entry for each file, still come out in input order.
pub fn load_images(paths: &[PathBuf], jobs: usize) -> LoadReport {
    let results = decode_all(paths, jobs);

    let mut report = LoadReport::default();
    for result in results {
        match result {
            Ok(image) => {
                log::info!(
                    "Loaded image: {} ({}x{})",
                    image.path.display(),
                    image.width(),
                    image.height()
                );
                report.images.push(image);
            }
            Err(err) => {
                log::error!("{}", err);
                report.failures.push(err);
            }
        }
    }
    report
}

fn decode_all(paths: &[PathBuf], jobs: usize) -> Vec<Result<LoadedImage, DecodeError>> {
    if jobs <= 1 || paths.len() <= 1 {
        return paths.iter().map(|p| load_image(p)).collect();
    }

    match rayon::ThreadPoolBuilder::new().num_threads(jobs).build() {
        Ok(pool) => pool.install(|| paths.par_iter().map(|p| load_image(p)).collect()),
        Err(e) => {
            log::warn!("Could not start {} decode threads ({}), decoding sequentially", jobs, e);
            paths.iter().map(|p| load_image(p)).collect()
        }
    }
}
