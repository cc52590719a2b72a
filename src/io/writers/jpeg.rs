use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::DynamicImage;
use image::codecs::jpeg::JpegEncoder;

use crate::error::{Error, Result};

/// JPEG only stores 8-bit luma or RGB; other layouts are narrowed here, at
/// encode time, so the normalized buffer itself stays untouched.
fn jpeg_compatible(image: &DynamicImage) -> Cow<'_, DynamicImage> {
    match image {
        DynamicImage::ImageLuma8(_) | DynamicImage::ImageRgb8(_) => Cow::Borrowed(image),
        DynamicImage::ImageLumaA8(_)
        | DynamicImage::ImageLuma16(_)
        | DynamicImage::ImageLumaA16(_) => Cow::Owned(DynamicImage::ImageLuma8(image.to_luma8())),
        other => Cow::Owned(DynamicImage::ImageRgb8(other.to_rgb8())),
    }
}

pub fn write_jpeg(output: &Path, image: &DynamicImage, quality: u8) -> Result<()> {
    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    let encoder = JpegEncoder::new_with_quality(&mut writer, quality);
    jpeg_compatible(image)
        .write_with_encoder(encoder)
        .map_err(|source| Error::ImageSave {
            path: output.to_path_buf(),
            source,
        })?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayAlphaImage, LumaA, Rgba, RgbaImage};

    #[test]
    fn narrows_alpha_layouts() {
        let rgba = DynamicImage::ImageRgba8(RgbaImage::from_pixel(1, 1, Rgba([1, 2, 3, 4])));
        assert!(matches!(
            jpeg_compatible(&rgba).as_ref(),
            DynamicImage::ImageRgb8(_)
        ));

        let la = DynamicImage::ImageLumaA8(GrayAlphaImage::from_pixel(1, 1, LumaA([5, 6])));
        assert!(matches!(
            jpeg_compatible(&la).as_ref(),
            DynamicImage::ImageLuma8(_)
        ));
    }

    #[test]
    fn writes_decodable_jpeg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jpg");
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(8, 4, Rgba([200, 10, 10, 255])));
        write_jpeg(&path, &img, 90).unwrap();

        let decoded = image::open(&path).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (8, 4));
    }
}
