//! Spritesheet composition - pastes loaded images into a uniform grid

use std::path::PathBuf;

use image::{imageops, Rgba, RgbaImage};

use crate::error::SheetError;
use crate::layout::GridLayout;
use crate::loader::LoadedImage;

/// Transparent color used for the canvas background and padding
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Where one source image was pasted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// Position of the image in the input sequence
    pub index: usize,
    /// Source file
    pub path: PathBuf,
    /// Left edge on the canvas
    pub x: u32,
    /// Top edge on the canvas
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// A composed spritesheet.
#[derive(Debug, Clone)]
pub struct Spritesheet {
    pub layout: GridLayout,
    pub padding: u32,
    pub image: RgbaImage,
    pub placements: Vec<Placement>,
}

impl Spritesheet {
    /// Canvas width in pixels, padding included.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Canvas height in pixels, padding included.
    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

/// Compose images into a grid spritesheet.
///
/// # Arguments
///
/// * `images` - Loaded images, in placement order
/// * `padding` - Gap in pixels between adjacent cells (not on the outer edge)
///
/// # Returns
///
/// The spritesheet, with every image pasted at the top-left corner of its
/// cell. Cells are sized to the largest image; unused space stays transparent.
/// Source pixels replace canvas pixels, they are not alpha-blended.
///
/// # Errors
///
/// * `SheetError::NoImagesToPack` if `images` is empty
/// * `SheetError::CanvasTooLarge` if the canvas size overflows
///
/// # Examples
///
/// ```
/// use image::{Rgba, RgbaImage};
/// use gridsheet::loader::LoadedImage;
/// use gridsheet::spritesheet::compose;
///
/// let frame = RgbaImage::from_pixel(2, 2, Rgba([255, 0, 0, 255]));
/// let images: Vec<_> = (0..4)
///     .map(|i| LoadedImage::new(format!("f{}.png", i), frame.clone()))
///     .collect();
///
/// // 4 images -> 2x2 grid, 1px gap between cells
/// let sheet = compose(&images, 1).unwrap();
/// assert_eq!(sheet.width(), 5);
/// assert_eq!(sheet.height(), 5);
/// ```
pub fn compose(images: &[LoadedImage], padding: u32) -> Result<Spritesheet, SheetError> {
    let layout = match GridLayout::compute(images.iter().map(|img| (img.width(), img.height()))) {
        Some(layout) => layout,
        None => {
            log::error!("No images to pack into spritesheet.");
            return Err(SheetError::NoImagesToPack);
        }
    };

    log::info!(
        "Arranging {} images in a grid: {} columns x {} rows",
        images.len(),
        layout.columns,
        layout.rows
    );
    log::debug!("Cell size: {}x{}", layout.cell_width, layout.cell_height);

    let (sheet_width, sheet_height) = layout.canvas_size(padding)?;
    log::info!("Creating spritesheet of size {}x{}...", sheet_width, sheet_height);

    let mut canvas = RgbaImage::from_pixel(sheet_width, sheet_height, TRANSPARENT);
    let mut placements = Vec::with_capacity(images.len());

    for (i, img) in images.iter().enumerate() {
        let (x, y) = layout.offset(i as u32, padding);
        log::debug!("Pasting image {} at ({}, {})", i, x, y);
        imageops::replace(&mut canvas, &img.pixels, x as i64, y as i64);
        placements.push(Placement {
            index: i,
            path: img.path.clone(),
            x,
            y,
            width: img.width(),
            height: img.height(),
        });
    }

    Ok(Spritesheet { layout, padding, image: canvas, placements })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(name: &str, width: u32, height: u32, color: Rgba<u8>) -> LoadedImage {
        LoadedImage::new(name, RgbaImage::from_pixel(width, height, color))
    }

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const GREEN: Rgba<u8> = Rgba([0, 255, 0, 255]);
    const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);
    const YELLOW: Rgba<u8> = Rgba([255, 255, 0, 255]);

    #[test]
    fn test_empty_input() {
        assert!(matches!(compose(&[], 2), Err(SheetError::NoImagesToPack)));
    }

    #[test]
    fn test_single_image() {
        let sheet = compose(&[solid("a.png", 3, 5, RED)], 2).unwrap();

        assert_eq!((sheet.width(), sheet.height()), (3, 5));
        assert_eq!((sheet.layout.columns, sheet.layout.rows), (1, 1));
        assert_eq!(*sheet.image.get_pixel(0, 0), RED);
        assert_eq!(*sheet.image.get_pixel(2, 4), RED);
    }

    #[test]
    fn test_four_images_2x2_with_padding() {
        let images = vec![
            solid("a.png", 2, 2, RED),
            solid("b.png", 2, 2, GREEN),
            solid("c.png", 2, 2, BLUE),
            solid("d.png", 2, 2, YELLOW),
        ];
        let sheet = compose(&images, 2).unwrap();

        // 2 cols * 2px + 1 gap * 2px
        assert_eq!((sheet.width(), sheet.height()), (6, 6));

        // Row 0: red (0,0), green (4,0)
        assert_eq!(*sheet.image.get_pixel(0, 0), RED);
        assert_eq!(*sheet.image.get_pixel(4, 0), GREEN);
        // Row 1: blue (0,4), yellow (4,4)
        assert_eq!(*sheet.image.get_pixel(0, 4), BLUE);
        assert_eq!(*sheet.image.get_pixel(5, 5), YELLOW);

        // Gap between cells is transparent
        assert_eq!(*sheet.image.get_pixel(2, 0), TRANSPARENT);
        assert_eq!(*sheet.image.get_pixel(3, 3), TRANSPARENT);
        assert_eq!(*sheet.image.get_pixel(0, 2), TRANSPARENT);
    }

    #[test]
    fn test_partial_last_row() {
        // 3 images -> 2 cols, 2 rows, last cell empty
        let images =
            vec![solid("a.png", 2, 2, RED), solid("b.png", 2, 2, GREEN), solid("c.png", 2, 2, BLUE)];
        let sheet = compose(&images, 0).unwrap();

        assert_eq!((sheet.width(), sheet.height()), (4, 4));
        assert_eq!(*sheet.image.get_pixel(0, 2), BLUE);
        assert_eq!(*sheet.image.get_pixel(2, 2), TRANSPARENT);
        assert_eq!(*sheet.image.get_pixel(3, 3), TRANSPARENT);
    }

    #[test]
    fn test_smaller_images_anchor_top_left() {
        let images = vec![solid("small.png", 2, 1, RED), solid("large.png", 4, 3, GREEN)];
        let sheet = compose(&images, 1).unwrap();

        // 2 cols of 4px + 1px gap, 1 row of 3px
        assert_eq!((sheet.width(), sheet.height()), (9, 3));
        assert_eq!(*sheet.image.get_pixel(0, 0), RED);
        assert_eq!(*sheet.image.get_pixel(1, 0), RED);
        assert_eq!(*sheet.image.get_pixel(2, 0), TRANSPARENT);
        assert_eq!(*sheet.image.get_pixel(0, 1), TRANSPARENT);
        assert_eq!(*sheet.image.get_pixel(5, 0), GREEN);
        assert_eq!(*sheet.image.get_pixel(8, 2), GREEN);
    }

    #[test]
    fn test_single_image_with_max_padding() {
        let sheet = compose(&[solid("a.png", 2, 2, RED)], u32::MAX).unwrap();
        assert_eq!((sheet.width(), sheet.height()), (2, 2));
        assert_eq!((sheet.placements[0].x, sheet.placements[0].y), (0, 0));
    }

    #[test]
    fn test_max_padding_with_several_images_is_rejected() {
        let images = vec![solid("a.png", 1, 1, RED), solid("b.png", 1, 1, GREEN)];
        assert!(matches!(compose(&images, u32::MAX), Err(SheetError::CanvasTooLarge { .. })));
    }

    #[test]
    fn test_paste_overwrites_instead_of_blending() {
        let translucent = Rgba([200, 100, 50, 128]);
        let sheet = compose(&[solid("a.png", 1, 1, translucent)], 0).unwrap();
        assert_eq!(*sheet.image.get_pixel(0, 0), translucent);
    }

    #[test]
    fn test_placements_follow_input_order() {
        let images: Vec<_> = (0..5).map(|i| solid(&format!("{}.png", i), 3, 2, RED)).collect();
        let sheet = compose(&images, 2).unwrap();

        let offsets: Vec<_> = sheet.placements.iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(offsets, vec![(0, 0), (5, 0), (10, 0), (0, 4), (5, 4)]);
        assert_eq!(sheet.placements[3].path, PathBuf::from("3.png"));
        assert_eq!((sheet.width(), sheet.height()), (13, 6));
    }

    #[test]
    fn test_compose_is_deterministic() {
        let images = vec![solid("a.png", 2, 3, RED), solid("b.png", 3, 2, BLUE)];
        let first = compose(&images, 2).unwrap();
        let second = compose(&images, 2).unwrap();
        assert_eq!(first.image, second.image);
    }
}
