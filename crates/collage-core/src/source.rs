//! Selecting source photos from the input folder.

use std::path::{Path, PathBuf};

use crate::config::IMAGE_EXTENSIONS;
use crate::error::{CollageError, Result};

/// A photo picked up from the input folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceImage {
    pub path: PathBuf,
}

impl SourceImage {
    /// Build a reference if the file name ends in an allowed extension.
    ///
    /// Matching is on the literal, case-sensitive suffix (`.jpg`, `.png`)
    /// of the raw name, so names that are not valid UTF-8 still qualify.
    pub fn from_path(path: PathBuf) -> Option<Self> {
        let name = path.file_name()?.as_encoded_bytes();
        let matched = IMAGE_EXTENSIONS.into_iter().any(|ext| {
            name.strip_suffix(ext.as_bytes())
                .is_some_and(|stem| stem.ends_with(b"."))
        });
        matched.then_some(Self { path })
    }
}

/// List the eligible photos directly inside `dir`, sorted by file name.
///
/// Subdirectories are not descended into.
///
/// # Errors
///
/// Returns `CollageError::InputUnavailable` if the folder cannot be read.
pub fn list_images(dir: &Path) -> Result<Vec<SourceImage>> {
    let unavailable = |source: std::io::Error| CollageError::InputUnavailable {
        dir: dir.to_path_buf(),
        source,
    };

    let mut images = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(unavailable)? {
        let path = entry.map_err(unavailable)?.path();
        // is_file follows symlinks, so linked photos are still picked up
        if !path.is_file() {
            continue;
        }
        if let Some(image) = SourceImage::from_path(path) {
            images.push(image);
        }
    }

    images.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));
    Ok(images)
}
