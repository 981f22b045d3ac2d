//! Collage Core - photo grid collage library
//!
//! This crate assembles a square grid collage from a folder of photos:
//! each photo is rotated according to its EXIF orientation, center-cropped
//! to a square, resized to the tile size and pasted into a black canvas.
//! Trailing rows are then trimmed and the result is saved in the format
//! implied by the output file name.
//!
//! # Module Structure
//!
//! - `decode` - Image decoding, EXIF orientation, resizing
//! - `transform` - Center-square cropping and tile creation
//! - `layout` - Grid dimensions and tile placement
//! - `canvas` - The RGB buffer tiles are pasted into
//! - `encode` - Output format selection and encoding
//! - `source` - Selecting photos from the input folder
//! - `collage` - The end-to-end pipeline
//!
//! Progress is reported through `tracing`; installing a subscriber is left
//! to the caller.

pub mod canvas;
pub mod collage;
pub mod config;
pub mod decode;
pub mod encode;
pub mod error;
pub mod layout;
pub mod source;
pub mod transform;

#[cfg(test)]
mod test_support;

pub use canvas::Canvas;
pub use collage::{build_collage, compose, CollageSummary};
pub use config::{CollageConfig, UnreadablePolicy};
pub use error::{CollageError, Result};
pub use layout::{FillOrder, GridLayout};
pub use source::{list_images, SourceImage};
