//! EXIF orientation lookup and correction.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::DynamicImage;

use super::Orientation;

/// The EXIF tag that carries orientation, resolved once.
const ORIENTATION_TAG: Tag = Tag::Orientation;

/// Read the EXIF orientation from encoded image bytes.
///
/// Any failure along the way (no EXIF container, no orientation field,
/// a value of the wrong type) yields `Orientation::Normal`.
pub fn read_orientation(bytes: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(bytes);

    let Ok(exif) = Reader::new().read_from_container(&mut cursor) else {
        return Orientation::Normal;
    };

    exif.get_field(ORIENTATION_TAG, In::PRIMARY)
        .and_then(|field| field.value.get_uint(0))
        .map(Orientation::from)
        .unwrap_or_default()
}

/// Undo the camera rotation recorded in `orientation`.
///
/// Right-angle rotations expand the canvas so no corner is clipped.
/// Mirrored orientations are returned untouched.
pub fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Rotate180 => img.rotate180(),
        Orientation::Rotate90CW => img.rotate90(),
        Orientation::Rotate270CW => img.rotate270(),
        Orientation::Normal
        | Orientation::FlipHorizontal
        | Orientation::FlipVertical
        | Orientation::Transpose
        | Orientation::Transverse => img,
    }
}
