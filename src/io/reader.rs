use std::path::Path;

use image::{DynamicImage, ImageError, ImageReader};
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::FileFormat;

/// Decode a PNG/JPEG input. The extension is checked before the file is opened.
pub fn read_image(path: &Path) -> Result<DynamicImage> {
    let format = FileFormat::from_path(path).ok_or_else(|| Error::UnsupportedFormat {
        path: path.to_path_buf(),
        role: "Input",
    })?;

    let load_error = |source: ImageError| Error::ImageLoad {
        path: path.to_path_buf(),
        source,
    };
    // Sniff the header so a mislabelled PNG/JPEG still decodes
    let image = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| load_error(ImageError::IoError(e)))?
        .decode()
        .map_err(load_error)?;

    debug!(
        "Decoded {:?} as {} ({}x{}, {:?})",
        path,
        format,
        image.width(),
        image.height(),
        image.color()
    );

    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unsupported_extension_before_opening() {
        let err = read_image(Path::new("/definitely/missing/picture.gif")).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat { role: "Input", .. }));
        assert_eq!(
            err.to_string(),
            "Input format must be PNG, JPG, or JPEG. Got: /definitely/missing/picture.gif"
        );
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let err = read_image(Path::new("/definitely/missing/picture.png")).unwrap_err();
        assert!(matches!(err, Error::ImageLoad { .. }));
    }

    #[test]
    fn reads_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.PNG");
        image::RgbImage::new(6, 4).save_with_format(&path, image::ImageFormat::Png).unwrap();

        let img = read_image(&path).unwrap();
        assert_eq!((img.width(), img.height()), (6, 4));
    }
}
