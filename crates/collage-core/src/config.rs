//! Run configuration and defaults.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::decode::FilterType;
use crate::error::{CollageError, Result};
use crate::layout::FillOrder;

/// Folder scanned when no input is given.
pub const DEFAULT_INPUT_DIR: &str = "img";
/// Output written when no file name is given.
pub const DEFAULT_OUTPUT_FILE: &str = "collage.jpg";
/// Side of each tile in pixels.
pub const DEFAULT_TILE_SIZE: u32 = 400;
/// Trailing rows dropped from the bottom of the collage.
pub const DEFAULT_REMOVE_ROWS: u32 = 2;
/// JPEG quality used when the output is a JPEG.
pub const DEFAULT_JPEG_QUALITY: u8 = 75;
/// File name suffixes picked up from the input folder.
pub const IMAGE_EXTENSIONS: [&str; 2] = ["jpg", "png"];
/// Largest canvas buffer, in bytes, a run may allocate (2 GiB).
pub const MAX_CANVAS_BYTES: u64 = 2 << 30;

/// What to do with a source file that cannot be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnreadablePolicy {
    /// Fail the whole run.
    #[default]
    Abort,
    /// Log a warning and leave the file out of the collage.
    Skip,
}

/// Everything a collage run needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollageConfig {
    /// Folder containing the source photos.
    pub input_dir: PathBuf,
    /// Output file; its extension picks the format.
    pub output: PathBuf,
    /// Side of each tile in pixels.
    pub tile_size: u32,
    /// Trailing rows to drop after layout.
    pub remove_rows: u32,
    /// Resampling filter for scaling photos down to tiles.
    pub resize_filter: FilterType,
    /// How image indices map onto the canvas.
    pub fill_order: FillOrder,
    /// Handling of files that fail to decode.
    pub unreadable: UnreadablePolicy,
    /// JPEG quality (1-100), ignored for other formats.
    pub jpeg_quality: u8,
}

impl Default for CollageConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            tile_size: DEFAULT_TILE_SIZE,
            remove_rows: DEFAULT_REMOVE_ROWS,
            resize_filter: FilterType::default(),
            fill_order: FillOrder::default(),
            unreadable: UnreadablePolicy::default(),
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl CollageConfig {
    /// Check the values that do not depend on the input folder.
    ///
    /// # Errors
    ///
    /// Returns `CollageError::InvalidConfig` for a zero tile size or a JPEG
    /// quality outside 1-100.
    pub fn validate(&self) -> Result<()> {
        if self.tile_size == 0 {
            return Err(CollageError::InvalidConfig {
                reason: "tile size must be at least 1 pixel".to_string(),
            });
        }
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(CollageError::InvalidConfig {
                reason: format!("JPEG quality must be 1-100, got {}", self.jpeg_quality),
            });
        }
        Ok(())
    }
}
