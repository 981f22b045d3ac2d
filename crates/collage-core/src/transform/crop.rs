//! Image cropping operations.
//!
//! Crops are expressed in pixel coordinates with the origin at the
//! top-left corner.

use crate::decode::DecodedImage;

/// Axis-aligned pixel box, `[left, left + width) x [top, top + height)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropBox {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

impl CropBox {
    /// Exclusive right edge.
    pub fn right(&self) -> u32 {
        self.left + self.width
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> u32 {
        self.top + self.height
    }
}

/// The largest square centered on a `width x height` image.
///
/// The side is `min(width, height)` and the offsets round down, so for odd
/// leftovers the extra pixel is dropped from the right or bottom edge.
pub fn center_square_box(width: u32, height: u32) -> CropBox {
    let side = width.min(height);
    CropBox {
        left: (width - side) / 2,
        top: (height - side) / 2,
        width: side,
        height: side,
    }
}

/// Crop a pixel region out of an image.
///
/// # Behavior
///
/// - If the region extends beyond image bounds, it is clamped
/// - A region that starts outside the image yields an empty image
pub fn crop_region(image: &DecodedImage, region: CropBox) -> DecodedImage {
    // Fast path: full crop returns a clone
    if region.left == 0
        && region.top == 0
        && region.width >= image.width
        && region.height >= image.height
    {
        return image.clone();
    }

    let left = region.left.min(image.width);
    let top = region.top.min(image.height);
    let right = region.right().min(image.width);
    let bottom = region.bottom().min(image.height);

    let out_width = right.saturating_sub(left);
    let out_height = bottom.saturating_sub(top);

    let src_stride = image.width as usize * 3;
    let row_bytes = out_width as usize * 3;
    let mut output = Vec::with_capacity(row_bytes * out_height as usize);

    // Copy pixel data row by row for efficiency
    for y in top..bottom {
        let start = y as usize * src_stride + left as usize * 3;
        output.extend_from_slice(&image.pixels[start..start + row_bytes]);
    }

    DecodedImage {
        width: out_width,
        height: out_height,
        pixels: output,
    }
}

/// Crop the largest centered square out of an image.
pub fn center_square(image: &DecodedImage) -> DecodedImage {
    crop_region(image, center_square_box(image.width, image.height))
}


// ============================================================================
// Property-Based Tests
// ============================================================================
