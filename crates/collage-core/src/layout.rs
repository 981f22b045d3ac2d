//! Grid layout: how many rows and columns, and where each tile goes.
//!
//! For `n` images the grid has `floor(sqrt(n))` columns and as many rows as
//! needed to hold every image. The canvas is square, sized by the larger of
//! the two counts.

use serde::{Deserialize, Serialize};

use crate::error::{CollageError, Result};

/// How a flat image index becomes a pixel position.
///
/// Both orders compute `row = index / num_cols` and `col = index % num_cols`.
/// They differ in which axis the row index drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillOrder {
    /// `x = row * tile`, `y = col * tile`. Consecutive images run down a
    /// column of `num_cols` tiles, then move one column right.
    #[default]
    ColumnMajor,
    /// `x = col * tile`, `y = row * tile`. Consecutive images run left to
    /// right across a row of `num_cols` tiles.
    RowMajor,
}

/// Rows and columns for a given number of images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridLayout {
    pub num_images: u32,
    pub num_cols: u32,
    pub num_rows: u32,
}

impl GridLayout {
    /// Compute the grid for `count` images.
    ///
    /// # Errors
    ///
    /// Returns `CollageError::NoImagesFound` when `count` is zero; the
    /// caller fills in the folder it scanned.
    pub fn for_count(count: u32) -> Result<Self> {
        if count == 0 {
            return Err(CollageError::NoImagesFound {
                dir: Default::default(),
            });
        }

        let num_cols = isqrt(count);
        let num_rows = count.div_ceil(num_cols);

        Ok(Self {
            num_images: count,
            num_cols,
            num_rows,
        })
    }

    /// Side of the square canvas in pixels, or `None` if it overflows.
    pub fn canvas_side(&self, tile_size: u32) -> Option<u32> {
        self.num_cols.max(self.num_rows).checked_mul(tile_size)
    }

    /// `(row, col)` of the image at `index`.
    pub fn cell(&self, index: u32) -> (u32, u32) {
        (index / self.num_cols, index % self.num_cols)
    }

    /// Top-left pixel of the tile for the image at `index`.
    pub fn origin(&self, index: u32, tile_size: u32, order: FillOrder) -> (u32, u32) {
        let (row, col) = self.cell(index);
        match order {
            FillOrder::ColumnMajor => (row * tile_size, col * tile_size),
            FillOrder::RowMajor => (col * tile_size, row * tile_size),
        }
    }

    /// True when the last row is not completely filled.
    pub fn has_partial_last_row(&self) -> bool {
        self.num_images % self.num_cols != 0
    }

    /// Canvas height after dropping `remove_rows` trailing rows.
    ///
    /// # Errors
    ///
    /// Returns `CollageError::InvalidCropRequest` if no row would remain.
    pub fn trimmed_height(&self, tile_size: u32, remove_rows: u32) -> Result<u32> {
        if remove_rows >= self.num_rows {
            return Err(CollageError::InvalidCropRequest {
                remove_rows,
                num_rows: self.num_rows,
            });
        }
        Ok((self.num_rows - remove_rows) * tile_size)
    }
}

/// Largest `r` with `r * r <= n`.
fn isqrt(n: u32) -> u32 {
    let mut r = f64::from(n).sqrt() as u32;
    // Float rounding can land one off in either direction
    while u64::from(r) * u64::from(r) > u64::from(n) {
        r -= 1;
    }
    while u64::from(r + 1) * u64::from(r + 1) <= u64::from(n) {
        r += 1;
    }
    r
}


// ============================================================================
// Property-Based Tests
// ============================================================================
