//! Image encoding and output.
//!
//! The output format follows the file extension. JPEG output goes through
//! [`encode_jpeg`] so its quality can be chosen; every other format uses the
//! `image` crate's encoder for that format.
//!
//! Images are fully encoded in memory before anything touches the disk, so a
//! failed encode never leaves a truncated file behind.

mod jpeg;

use std::io::Cursor;
use std::path::Path;

use image::ImageFormat;
use thiserror::Error;

use crate::decode::DecodedImage;

pub use jpeg::encode_jpeg;

/// Errors that can occur while encoding or writing an image.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The output extension does not name a writable format
    #[error("Unsupported output format: '{extension}'")]
    UnsupportedFormat { extension: String },

    /// The encoder failed
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),

    /// Writing the encoded bytes failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Validate dimensions and buffer length of an RGB8 image.
fn check_buffer(pixels: &[u8], width: u32, height: u32) -> Result<(), EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected = (width as usize) * (height as usize) * 3;
    if pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: pixels.len(),
        });
    }
    Ok(())
}

/// Resolve the output format from a path's extension.
///
/// # Errors
///
/// Returns `EncodeError::UnsupportedFormat` if the extension is missing,
/// unknown, or names a format this build cannot write.
pub fn output_format(path: &Path) -> Result<ImageFormat, EncodeError> {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().into_owned())
        .unwrap_or_default();

    match ImageFormat::from_path(path) {
        Ok(format) if format.writing_enabled() => Ok(format),
        _ => Err(EncodeError::UnsupportedFormat { extension }),
    }
}

/// Encode an RGB image into `format`.
///
/// # Errors
///
/// Returns the buffer validation errors of [`encode_jpeg`], or
/// `EncodeError::EncodingFailed` if the encoder rejects the image.
pub fn encode_image(
    image: &DecodedImage,
    format: ImageFormat,
    jpeg_quality: u8,
) -> Result<Vec<u8>, EncodeError> {
    if format == ImageFormat::Jpeg {
        return encode_jpeg(&image.pixels, image.width, image.height, jpeg_quality);
    }

    check_buffer(&image.pixels, image.width, image.height)?;
    let rgb = image
        .to_rgb_image()
        .ok_or_else(|| EncodeError::EncodingFailed("Failed to create RgbImage".to_string()))?;

    let mut buffer = Cursor::new(Vec::new());
    rgb.write_to(&mut buffer, format)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;
    Ok(buffer.into_inner())
}

/// Encode `image` in the format implied by `path` and write it there.
///
/// # Errors
///
/// Returns any error of [`output_format`] or [`encode_image`], or
/// `EncodeError::Io` if the file cannot be written.
pub fn write_image(path: &Path, image: &DecodedImage, jpeg_quality: u8) -> Result<(), EncodeError> {
    let format = output_format(path)?;
    let bytes = encode_image(image, format, jpeg_quality)?;
    std::fs::write(path, bytes)?;
    Ok(())
}
