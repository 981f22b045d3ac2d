//! Image resizing using the `image` crate's algorithms.

use super::{DecodeError, DecodedImage, FilterType};

/// Resize an image to exact dimensions.
///
/// Aspect ratio is not preserved; callers crop first when they need to.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if a target dimension is zero, and
/// `DecodeError::CorruptedFile` if the pixel buffer does not match the
/// declared dimensions.
pub fn resize(
    image: &DecodedImage,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<DecodedImage, DecodeError> {
    if width == 0 || height == 0 || image.is_empty() {
        return Err(DecodeError::InvalidFormat);
    }

    // Fast path: if dimensions match, just clone
    if image.width == width && image.height == height {
        return Ok(image.clone());
    }

    let rgb_image = image
        .to_rgb_image()
        .ok_or_else(|| DecodeError::CorruptedFile("Failed to create RgbImage".to_string()))?;

    let resized = image::imageops::resize(&rgb_image, width, height, filter.to_image_filter());

    Ok(DecodedImage::from_rgb_image(resized))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::gradient;

    #[test]
    fn test_resize_basic() {
        let img = gradient(100, 50);
        let resized = resize(&img, 50, 25, FilterType::Bilinear).unwrap();

        assert_eq!(resized.width, 50);
        assert_eq!(resized.height, 25);
        assert_eq!(resized.pixels.len(), 50 * 25 * 3);
    }

    #[test]
    fn test_resize_same_dimensions() {
        let img = gradient(100, 50);
        let resized = resize(&img, 100, 50, FilterType::Lanczos3).unwrap();

        assert_eq!(resized, img);
    }

    #[test]
    fn test_resize_upscale() {
        let img = gradient(50, 25);
        let resized = resize(&img, 100, 50, FilterType::Lanczos3).unwrap();

        assert_eq!(resized.width, 100);
        assert_eq!(resized.height, 50);
    }

    #[test]
    fn test_resize_ignores_aspect_ratio() {
        let img = gradient(30, 10);
        let resized = resize(&img, 20, 20, FilterType::Lanczos3).unwrap();

        assert_eq!((resized.width, resized.height), (20, 20));
    }

    #[test]
    fn test_resize_zero_dimensions_error() {
        let img = gradient(100, 50);

        assert!(resize(&img, 0, 50, FilterType::Bilinear).is_err());
        assert!(resize(&img, 50, 0, FilterType::Bilinear).is_err());
    }

    #[test]
    fn test_resize_empty_source_error() {
        let img = DecodedImage::new(0, 0, vec![]);
        assert!(resize(&img, 10, 10, FilterType::Lanczos3).is_err());
    }

    #[test]
    fn test_all_filter_types() {
        let img = gradient(100, 50);

        for filter in [
            FilterType::Nearest,
            FilterType::Bilinear,
            FilterType::Lanczos3,
        ] {
            let resized = resize(&img, 50, 25, filter).unwrap();
            assert_eq!(resized.width, 50);
            assert_eq!(resized.height, 25);
        }
    }
}
