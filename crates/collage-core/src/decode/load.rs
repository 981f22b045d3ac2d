//! Image decoding with EXIF orientation handling.

use std::io::Cursor;
use std::path::Path;

use image::ImageReader;
use tracing::debug;

use super::orientation::{apply_orientation, read_orientation};
use super::{DecodeError, DecodedImage};

/// Decode an image from bytes, applying EXIF orientation correction.
///
/// The format is guessed from the content, so a misnamed file still
/// decodes as long as its codec is enabled.
///
/// # Errors
///
/// Returns `DecodeError::CorruptedFile` if the bytes cannot be decoded.
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    // First, extract EXIF orientation before decoding
    let orientation = read_orientation(bytes);

    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if orientation.is_corrected() {
        debug!("Correcting EXIF orientation {:?}", orientation);
    }
    let oriented = apply_orientation(img, orientation);
    let decoded = DecodedImage::from_rgb_image(oriented.into_rgb8());

    if decoded.is_empty() {
        return Err(DecodeError::InvalidFormat);
    }
    Ok(decoded)
}

/// Read and decode an image file.
///
/// The whole file is read up front, so the handle is released before
/// decoding begins.
///
/// # Errors
///
/// Returns `DecodeError::Io` if the file cannot be read, otherwise the
/// errors of [`decode_image`].
pub fn load_image(path: &Path) -> Result<DecodedImage, DecodeError> {
    let bytes = std::fs::read(path)?;
    decode_image(&bytes)
}
