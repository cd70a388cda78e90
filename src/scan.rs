//! Input folder scanning
//!
//! Lists the supported image files of a directory in natural sort order.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::SheetError;
use crate::natural::natural_key;

/// File name suffixes accepted as images (matched case-insensitively).
pub const SUPPORTED_EXTENSIONS: [&str; 5] = [".png", ".jpg", ".jpeg", ".bmp", ".gif"];

/// Check if a file name has a supported image extension.
///
/// ```
/// use gridsheet::scan::is_supported_name;
///
/// assert!(is_supported_name("Photo.JPG"));
/// assert!(!is_supported_name("notes.txt"));
/// ```
pub fn is_supported_name(name: &str) -> bool {
    let lower = name.to_lowercase();
    SUPPORTED_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// Find the supported image files directly inside `folder`.
///
/// Subdirectories and files with other extensions are skipped. The result is
/// ordered by natural sort of the file names. Returned paths keep the exact
/// on-disk name, even when it is not valid UTF-8.
/// An empty result is not an error here; the caller decides what that means.
///
/// # Errors
///
/// * `SheetError::DirectoryNotFound` if `folder` is missing or not a directory
/// * `SheetError::Io` if the directory cannot be listed
pub fn find_image_files(folder: &Path) -> Result<Vec<PathBuf>, SheetError> {
    if !folder.is_dir() {
        return Err(SheetError::DirectoryNotFound { path: folder.to_path_buf() });
    }

    log::info!("Scanning for images in \"{}\"...", folder.display());

    let io_err = |source: std::io::Error| SheetError::Io { path: folder.to_path_buf(), source };
    let mut files: Vec<(String, PathBuf)> = Vec::new();
    for entry in fs::read_dir(folder).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        // Lossy text is only used for matching and ordering; the path keeps the raw name
        let name = entry.file_name().to_string_lossy().into_owned();
        if is_supported_name(&name) {
            files.push((name, path));
        }
    }

    files.sort_by_cached_key(|(name, path)| (natural_key(name), name.clone(), path.clone()));
    log::debug!(
        "Found files (natural sorted): {:?}",
        files.iter().map(|(name, _)| name.as_str()).collect::<Vec<_>>()
    );

    Ok(files.into_iter().map(|(_, path)| path).collect())
}
