//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, image codec and preset errors, and provides semantic
//! variants for argument validation and the crop-only size check.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to load image from {path}: {source}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to save image to {path}: {source}")]
    ImageSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("{role} format must be PNG, JPG, or JPEG. Got: {path}")]
    UnsupportedFormat { path: PathBuf, role: &'static str },

    #[error(
        "Target size must be less than or equal to input size for cropping. \
         Target: {target_width}x{target_height}, input: {source_width}x{source_height}"
    )]
    InvalidTarget {
        target_width: u32,
        target_height: u32,
        source_width: u32,
        source_height: u32,
    },

    #[error(
        "Target size {target_width}x{target_height} is too large to allocate"
    )]
    TargetTooLarge {
        target_width: u32,
        target_height: u32,
    },

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Failed to read preset {path}: {source}")]
    Preset {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
