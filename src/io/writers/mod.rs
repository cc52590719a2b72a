//! Encoders for the supported output containers. `write_image` picks one
//! from the output path's extension.
pub mod jpeg;
pub mod png;

use std::fs;
use std::path::Path;

use image::DynamicImage;
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::FileFormat;

/// Encode `image` to `output`, creating parent directories as needed.
pub fn write_image(image: &DynamicImage, output: &Path, jpeg_quality: u8) -> Result<()> {
    let format = FileFormat::from_path(output).ok_or_else(|| Error::UnsupportedFormat {
        path: output.to_path_buf(),
        role: "Output",
    })?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    debug!("Writing {} {}x{} to {:?}", format, image.width(), image.height(), output);

    match format {
        FileFormat::Png => png::write_png(output, image),
        FileFormat::Jpeg => jpeg::write_jpeg(output, image, jpeg_quality),
    }
}
