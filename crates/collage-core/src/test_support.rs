//! Shared fixtures for unit tests.

use std::io::Cursor;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use crate::decode::DecodedImage;

/// Gradient image where red follows x and green follows y.
pub fn gradient(width: u32, height: u32) -> DecodedImage {
    let mut pixels = Vec::with_capacity((width * height * 3) as usize);
    for y in 0..height {
        for x in 0..width {
            pixels.push(((x * 255) / width.max(1)) as u8); // R
            pixels.push(((y * 255) / height.max(1)) as u8); // G
            pixels.push(128); // B
        }
    }
    DecodedImage::new(width, height, pixels)
}

/// Image where every pixel has the same color.
pub fn solid(width: u32, height: u32, rgb: [u8; 3]) -> DecodedImage {
    let pixels = rgb
        .iter()
        .copied()
        .cycle()
        .take((width * height * 3) as usize)
        .collect();
    DecodedImage::new(width, height, pixels)
}

/// Image where each pixel encodes its own position, `(y * width + x) % 256`.
pub fn positional(width: u32, height: u32) -> DecodedImage {
    let mut pixels = Vec::with_capacity((width * height * 3) as usize);
    for y in 0..height {
        for x in 0..width {
            let v = ((y * width + x) % 256) as u8;
            pixels.extend_from_slice(&[v, v, v]);
        }
    }
    DecodedImage::new(width, height, pixels)
}

/// Encode a gradient as JPEG.
pub fn jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = gradient(width, height);
    let mut buffer = Cursor::new(Vec::new());
    JpegEncoder::new_with_quality(&mut buffer, 95)
        .write_image(&img.pixels, width, height, ExtendedColorType::Rgb8)
        .unwrap();
    buffer.into_inner()
}

/// Encode a gradient as PNG.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    encode_png(&gradient(width, height))
}

/// Encode an arbitrary image as PNG (lossless, handy for color checks).
pub fn encode_png(img: &DecodedImage) -> Vec<u8> {
    let mut buffer = Cursor::new(Vec::new());
    PngEncoder::new(&mut buffer)
        .write_image(&img.pixels, img.width, img.height, ExtendedColorType::Rgb8)
        .unwrap();
    buffer.into_inner()
}

/// Insert an EXIF APP1 segment carrying only an orientation tag right
/// after the JPEG SOI marker.
pub fn with_exif_orientation(jpeg: &[u8], orientation: u16) -> Vec<u8> {
    assert_eq!(&jpeg[..2], &[0xFF, 0xD8], "not a JPEG");

    // Little-endian TIFF header, one IFD at offset 8 with a single SHORT entry
    let mut tiff = vec![0x49, 0x49, 0x2A, 0x00, 0x08, 0x00, 0x00, 0x00];
    tiff.extend_from_slice(&1u16.to_le_bytes()); // entry count
    tiff.extend_from_slice(&0x0112u16.to_le_bytes()); // Orientation
    tiff.extend_from_slice(&3u16.to_le_bytes()); // SHORT
    tiff.extend_from_slice(&1u32.to_le_bytes()); // count
    tiff.extend_from_slice(&orientation.to_le_bytes());
    tiff.extend_from_slice(&[0x00, 0x00]); // value padding
    tiff.extend_from_slice(&0u32.to_le_bytes()); // no next IFD

    let mut payload = b"Exif\0\0".to_vec();
    payload.extend_from_slice(&tiff);
    let segment_len = (payload.len() + 2) as u16;

    let mut out = Vec::with_capacity(jpeg.len() + payload.len() + 4);
    out.extend_from_slice(&jpeg[..2]);
    out.extend_from_slice(&[0xFF, 0xE1]);
    out.extend_from_slice(&segment_len.to_be_bytes());
    out.extend_from_slice(&payload);
    out.extend_from_slice(&jpeg[2..]);
    out
}

/// Write `count` JPEG photos of varying sizes into `dir`, named
/// `photo_00.jpg`, `photo_01.jpg`, ...
pub fn write_photos(dir: &Path, count: usize) {
    for i in 0..count {
        let (w, h) = match i % 3 {
            0 => (64, 48),
            1 => (40, 72),
            _ => (50, 50),
        };
        std::fs::write(dir.join(format!("photo_{i:02}.jpg")), jpeg_bytes(w, h)).unwrap();
    }
}
