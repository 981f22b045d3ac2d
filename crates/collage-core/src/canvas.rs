//! The collage canvas: a black RGB buffer that tiles are pasted into.

use image::{imageops, ImageBuffer, Rgb, RgbImage};

use crate::decode::DecodedImage;

/// RGB8 raster the collage is assembled on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    /// A black square canvas of `side x side` pixels.
    pub fn new(side: u32) -> Self {
        Self {
            image: RgbImage::new(side, side),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// RGB value at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        self.image.get_pixel_checked(x, y).map(|p| p.0)
    }

    /// Copy `tile` onto the canvas with its top-left corner at `(x, y)`.
    ///
    /// Existing pixels are overwritten. Parts of the tile that fall outside
    /// the canvas are dropped, as is a tile whose buffer does not match its
    /// dimensions.
    pub fn paste(&mut self, tile: &DecodedImage, x: u32, y: u32) {
        let Some(view) =
            ImageBuffer::<Rgb<u8>, &[u8]>::from_raw(tile.width, tile.height, tile.pixels.as_slice())
        else {
            return;
        };
        imageops::replace(&mut self.image, &view, i64::from(x), i64::from(y));
    }

    /// Keep only the top `height` rows. Width is unchanged.
    ///
    /// A height at or above the current one leaves the canvas as is.
    pub fn crop_height(&mut self, height: u32) {
        if height >= self.height() {
            return;
        }
        self.image = imageops::crop_imm(&self.image, 0, 0, self.width(), height).to_image();
    }

    /// Hand over the pixels for encoding.
    pub fn into_image(self) -> DecodedImage {
        DecodedImage::from_rgb_image(self.image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{positional, solid};

    #[test]
    fn test_new_is_black() {
        let canvas = Canvas::new(4);

        assert_eq!((canvas.width(), canvas.height()), (4, 4));
        assert!(canvas.into_image().pixels.iter().all(|&p| p == 0));
    }

    #[test]
    fn test_paste_places_tile() {
        let mut canvas = Canvas::new(6);
        canvas.paste(&solid(2, 2, [10, 20, 30]), 2, 4);

        assert_eq!(canvas.pixel(2, 4), Some([10, 20, 30]));
        assert_eq!(canvas.pixel(3, 5), Some([10, 20, 30]));
        assert_eq!(canvas.pixel(1, 4), Some([0, 0, 0]));
        assert_eq!(canvas.pixel(4, 4), Some([0, 0, 0]));
        assert_eq!(canvas.pixel(2, 3), Some([0, 0, 0]));
    }

    #[test]
    fn test_paste_overwrites_without_blending() {
        let mut canvas = Canvas::new(4);
        canvas.paste(&solid(4, 4, [200, 200, 200]), 0, 0);
        canvas.paste(&solid(2, 2, [1, 2, 3]), 1, 1);

        assert_eq!(canvas.pixel(1, 1), Some([1, 2, 3]));
        assert_eq!(canvas.pixel(0, 0), Some([200, 200, 200]));
    }

    #[test]
    fn test_paste_keeps_tile_layout() {
        let mut canvas = Canvas::new(8);
        let tile = positional(3, 3);
        canvas.paste(&tile, 4, 2);

        for ty in 0..3 {
            for tx in 0..3 {
                assert_eq!(canvas.pixel(4 + tx, 2 + ty), tile.pixel(tx, ty));
            }
        }
    }

    #[test]
    fn test_paste_clips_at_edges() {
        let mut canvas = Canvas::new(4);
        canvas.paste(&solid(3, 3, [9, 9, 9]), 2, 2);

        assert_eq!(canvas.pixel(3, 3), Some([9, 9, 9]));
        assert_eq!((canvas.width(), canvas.height()), (4, 4));

        // Completely outside: nothing happens
        canvas.paste(&solid(2, 2, [5, 5, 5]), 4, 0);
        assert_eq!(canvas.pixel(3, 0), Some([0, 0, 0]));
        assert_eq!(canvas.into_image().pixels.len(), 4 * 4 * 3);
    }

    #[test]
    fn test_crop_height() {
        let mut canvas = Canvas::new(5);
        canvas.paste(&solid(5, 1, [7, 7, 7]), 0, 1);
        canvas.crop_height(2);

        assert_eq!((canvas.width(), canvas.height()), (5, 2));
        assert_eq!(canvas.pixel(0, 1), Some([7, 7, 7]));
        assert_eq!(canvas.pixel(0, 2), None);
        let image = canvas.into_image();
        assert_eq!((image.width, image.height), (5, 2));
        assert_eq!(image.pixels.len(), 5 * 2 * 3);
    }

    #[test]
    fn test_paste_ignores_mismatched_buffer() {
        let mut canvas = Canvas::new(4);
        let broken = DecodedImage {
            width: 2,
            height: 2,
            pixels: vec![255; 5],
        };
        canvas.paste(&broken, 0, 0);

        assert_eq!(canvas.pixel(0, 0), Some([0, 0, 0]));
    }

    #[test]
    fn test_crop_height_larger_is_noop() {
        let mut canvas = Canvas::new(3);
        canvas.crop_height(10);
        assert_eq!(canvas.height(), 3);
    }
}
