//! Crate-level error type for collage runs.

use std::path::PathBuf;

use thiserror::Error;

use crate::decode::DecodeError;
use crate::encode::EncodeError;

/// Everything that can stop a collage run.
///
/// Each variant maps to its own process exit code via [`CollageError::exit_code`].
#[derive(Debug, Error)]
pub enum CollageError {
    /// The source directory has no eligible images (or all were skipped).
    #[error("no images found in '{}'", .dir.display())]
    NoImagesFound { dir: PathBuf },

    /// Removing the requested rows would leave nothing to save.
    #[error("invalid crop: cannot remove {remove_rows} row(s) from a collage of {num_rows} row(s)")]
    InvalidCropRequest { remove_rows: u32, num_rows: u32 },

    /// A source image could not be read or decoded.
    #[error("cannot read image '{}': {source}", .path.display())]
    UnreadableImage {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },

    /// The collage could not be encoded or written.
    #[error("cannot write collage to '{}': {source}", .path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: EncodeError,
    },

    /// The source directory itself could not be listed.
    #[error("cannot list input folder '{}': {source}", .dir.display())]
    InputUnavailable {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configuration value is out of range.
    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl CollageError {
    /// Process exit code for this error. Success is 0 and argument errors
    /// reported by the command line parser are 2.
    pub fn exit_code(&self) -> u8 {
        match self {
            CollageError::InvalidConfig { .. } => 2,
            CollageError::NoImagesFound { .. } => 3,
            CollageError::InvalidCropRequest { .. } => 4,
            CollageError::UnreadableImage { .. } => 5,
            CollageError::WriteFailure { .. } => 6,
            CollageError::InputUnavailable { .. } => 7,
        }
    }
}

/// Convenience alias for collage results.
pub type Result<T> = std::result::Result<T, CollageError>;
