//! Error types for spritesheet batches

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::output::OutputError;

/// A batch-level failure. Any of these stops the batch without writing output.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SheetError {
    /// The input directory does not exist (or is not a directory)
    #[error("Input folder \"{}\" does not exist", path.display())]
    DirectoryNotFound { path: PathBuf },
    /// The input directory exists but holds no supported image files
    #[error("No image files found in \"{}\"", path.display())]
    NoSupportedFiles { path: PathBuf },
    /// Nothing decoded successfully, so there is nothing to pack
    #[error("No images to pack into spritesheet")]
    NoImagesToPack,
    /// The canvas would not fit in 32-bit dimensions
    #[error("Spritesheet too large: {columns}x{rows} cells of {cell_width}x{cell_height} with padding {padding}")]
    CanvasTooLarge { columns: u32, rows: u32, cell_width: u32, cell_height: u32, padding: u32 },
    /// Listing the input directory failed
    #[error("Failed to read \"{}\": {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Encoding or writing the spritesheet failed
    #[error("Failed to save spritesheet: {0}")]
    Output(#[from] OutputError),
}

/// A single file that could not be loaded. Recovered locally: the file is
/// skipped and the rest of the batch continues.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The file could not be read
    #[error("Failed to load image {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The bytes are not a decodable image
    #[error("Failed to load image {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl DecodeError {
    /// The file that failed to load.
    pub fn path(&self) -> &Path {
        match self {
            DecodeError::Read { path, .. } | DecodeError::Decode { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_not_found_message() {
        let err = SheetError::DirectoryNotFound { path: PathBuf::from("input") };
        assert_eq!(err.to_string(), "Input folder \"input\" does not exist");
    }

    #[test]
    fn test_decode_error_path() {
        let err = DecodeError::Read {
            path: PathBuf::from("input/a.png"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.path(), Path::new("input/a.png"));
        assert!(err.to_string().starts_with("Failed to load image input/a.png"));
    }
}
