//! Per-image transforms applied after decoding.
//!
//! Every source photo goes through the same two steps:
//! 1. Crop to the largest centered square
//! 2. Resize that square to the tile size
//!
//! # Coordinate System
//!
//! - Crop boxes are in pixels
//! - Origin is top-left corner

mod crop;
mod tile;

pub use crop::{center_square, center_square_box, crop_region, CropBox};
pub use tile::make_tile;
