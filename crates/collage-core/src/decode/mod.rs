//! Image decoding pipeline.
//!
//! This module provides functionality for:
//! - Decoding JPEG and PNG images from bytes or from disk
//! - Reading the EXIF orientation and undoing camera rotation
//! - Resizing decoded images
//!
//! All decoded images are converted to 8-bit RGB. Alpha is discarded.

mod load;
mod orientation;
mod resize;
mod types;

pub use load::{decode_image, load_image};
pub use orientation::{apply_orientation, read_orientation};
pub use resize::resize;
pub use types::{DecodeError, DecodedImage, FilterType, Orientation};
