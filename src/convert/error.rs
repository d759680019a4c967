use std::path::PathBuf;

use thiserror::Error;

use super::sizes::IconSize;

/// Everything that can go wrong while loading or converting an image
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The source file was gone before it could be read
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The file's content is not PNG, whatever its extension says
    #[error("{} is not a valid PNG image", .0.display())]
    NotPng(PathBuf),

    /// Requested dimensions fall outside the accepted range
    #[error("invalid icon size: {0}")]
    InvalidSize(IconSize),

    /// Decode or encode failure inside the imaging library
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// Filesystem failure while writing the output
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
