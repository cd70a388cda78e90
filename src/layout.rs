//! Grid layout for uniform-cell spritesheets

use crate::error::SheetError;

/// Column/row count and cell size for a spritesheet.
///
/// Cells are all the same size, large enough for the largest image. Images
/// fill the grid left to right, top to bottom; the last row may be partial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub columns: u32,
    pub rows: u32,
    pub cell_width: u32,
    pub cell_height: u32,
}

/// Smallest `c` with `c * c >= n`, i.e. `ceil(sqrt(n))` without float rounding.
pub fn ceil_sqrt(n: u32) -> u32 {
    if n <= 1 {
        return n;
    }
    let n64 = n as u64;
    let mut c = (n as f64).sqrt() as u64;
    while c * c < n64 {
        c += 1;
    }
    while c > 1 && (c - 1) * (c - 1) >= n64 {
        c -= 1;
    }
    c as u32
}

/// Columns and rows for `count` items: `columns = ceil(sqrt(count))`,
/// `rows = ceil(count / columns)`.
///
/// ```
/// use gridsheet::layout::grid_shape;
///
/// assert_eq!(grid_shape(1), (1, 1));
/// assert_eq!(grid_shape(5), (3, 2));
/// assert_eq!(grid_shape(9), (3, 3));
/// assert_eq!(grid_shape(10), (4, 3));
/// ```
pub fn grid_shape(count: u32) -> (u32, u32) {
    if count == 0 {
        return (0, 0);
    }
    let columns = ceil_sqrt(count);
    (columns, count.div_ceil(columns))
}

impl GridLayout {
    /// Compute the layout for images of the given `(width, height)` sizes.
    ///
    /// Returns `None` when there are no sizes.
    pub fn compute<I>(sizes: I) -> Option<Self>
    where
        I: IntoIterator<Item = (u32, u32)>,
    {
        let mut count: u32 = 0;
        let mut cell_width = 0;
        let mut cell_height = 0;
        for (w, h) in sizes {
            count = count.saturating_add(1);
            cell_width = cell_width.max(w);
            cell_height = cell_height.max(h);
        }
        if count == 0 {
            return None;
        }

        let (columns, rows) = grid_shape(count);
        Some(Self { columns, rows, cell_width, cell_height })
    }

    /// Number of cells in the grid (occupied or not).
    pub fn capacity(&self) -> u64 {
        self.columns as u64 * self.rows as u64
    }

    /// Grid position `(column, row)` of the item at `index`.
    pub fn cell(&self, index: u32) -> (u32, u32) {
        (index % self.columns, index / self.columns)
    }

    /// Pixel offset of the top-left corner of the cell holding item `index`.
    ///
    /// Never larger than the matching `canvas_size` side, so it cannot overflow
    /// once `canvas_size` has succeeded for the same padding.
    pub fn offset(&self, index: u32, padding: u32) -> (u32, u32) {
        let (col, row) = self.cell(index);
        (col * self.cell_width + col * padding, row * self.cell_height + row * padding)
    }

    /// Canvas size with `padding` between cells and none on the outer edge.
    ///
    /// # Errors
    ///
    /// `SheetError::CanvasTooLarge` if either side overflows `u32`.
    pub fn canvas_size(&self, padding: u32) -> Result<(u32, u32), SheetError> {
        let side = |cells: u32, cell: u32| {
            cells.checked_mul(cell)?.checked_add(padding.checked_mul(cells.saturating_sub(1))?)
        };
        match (side(self.columns, self.cell_width), side(self.rows, self.cell_height)) {
            (Some(w), Some(h)) => Ok((w, h)),
            _ => Err(SheetError::CanvasTooLarge {
                columns: self.columns,
                rows: self.rows,
                cell_width: self.cell_width,
                cell_height: self.cell_height,
                padding,
            }),
        }
    }
}
