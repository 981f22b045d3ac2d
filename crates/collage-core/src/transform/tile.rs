//! Turning a decoded photo into a collage tile.

use crate::decode::{resize, DecodeError, DecodedImage, FilterType};

use super::crop::center_square;

/// Center-crop `image` to a square and resize it to `tile_size x tile_size`
/// with `filter`.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if `tile_size` is zero or the image
/// has no pixels.
pub fn make_tile(
    image: &DecodedImage,
    tile_size: u32,
    filter: FilterType,
) -> Result<DecodedImage, DecodeError> {
    let square = center_square(image);
    resize(&square, tile_size, tile_size, filter)
}
