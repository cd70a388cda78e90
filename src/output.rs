//! PNG encoding and spritesheet file output

use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder, RgbaImage};
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure while producing the spritesheet file
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum OutputError {
    /// PNG encoding failed
    #[error("Failed to encode spritesheet as PNG: {0}")]
    Encode(#[from] image::ImageError),
    /// Creating directories, writing or renaming failed
    #[error("Failed to write \"{}\": {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// Encode an RGBA image as PNG bytes.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, OutputError> {
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes).write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        ColorType::Rgba8,
    )?;
    Ok(bytes)
}

/// Sibling path used while writing `path`: `sheet.png` -> `.sheet.png.tmp`.
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(path.file_name().unwrap_or(OsStr::new("spritesheet.png")));
    name.push(".tmp");
    path.with_file_name(name)
}

/// Save an RGBA image to a PNG file.
///
/// The image is fully encoded before anything touches the disk, then written
/// to a temporary sibling file and renamed over `path`. A failure therefore
/// never leaves a truncated file at `path`. An existing file is replaced.
///
/// # Arguments
///
/// * `image` - The image to save
/// * `path` - The output file path (missing parent directories are created)
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<(), OutputError> {
    let bytes = encode_png(image)?;

    // Create parent directories if they don't exist
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .map_err(|source| OutputError::Write { path: parent.to_path_buf(), source })?;
        }
    }

    let tmp = temp_path_for(path);
    if let Err(source) = fs::write(&tmp, &bytes).and_then(|()| fs::rename(&tmp, path)) {
        let _ = fs::remove_file(&tmp);
        return Err(OutputError::Write { path: path.to_path_buf(), source });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use tempfile::tempdir;

    #[test]
    fn test_save_png_basic() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.png");

        let mut image = RgbaImage::new(2, 2);
        image.put_pixel(0, 0, Rgba([255, 0, 0, 255])); // Red
        image.put_pixel(1, 0, Rgba([0, 255, 0, 255])); // Green
        image.put_pixel(0, 1, Rgba([0, 0, 255, 255])); // Blue
        image.put_pixel(1, 1, Rgba([0, 0, 0, 0])); // Transparent

        save_png(&image, &path).unwrap();

        let loaded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(loaded, image);
    }

    #[test]
    fn test_save_png_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/dirs/test.png");

        save_png(&RgbaImage::new(1, 1), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_save_png_overwrites_and_cleans_up() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sheet.png");
        fs::write(&path, b"old contents").unwrap();

        save_png(&RgbaImage::from_pixel(3, 1, Rgba([9, 9, 9, 9])), &path).unwrap();

        assert_eq!(image::open(&path).unwrap().width(), 3);
        let leftovers: Vec<_> = fs::read_dir(dir.path()).unwrap().flatten().collect();
        assert_eq!(leftovers.len(), 1, "temporary file should be renamed away");
    }

    #[test]
    fn test_save_png_into_missing_parent_file() {
        let dir = tempdir().unwrap();
        // Parent is a regular file, so the directory cannot be created
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, b"").unwrap();

        let err = save_png(&RgbaImage::new(1, 1), &blocker.join("sheet.png")).unwrap_err();
        match &err {
            OutputError::Write { path, .. } => assert_eq!(path, &blocker.join("sheet.png")),
            other => panic!("expected write error, got {:?}", other),
        }
        assert!(err.to_string().contains("blocker"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_temp_path_for() {
        assert_eq!(temp_path_for(Path::new("out/sheet.png")), PathBuf::from("out/.sheet.png.tmp"));
        assert_eq!(temp_path_for(Path::new("sheet.png")), PathBuf::from(".sheet.png.tmp"));
    }

    #[test]
    fn test_encode_png_signature() {
        let bytes = encode_png(&RgbaImage::new(1, 1)).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }
}
