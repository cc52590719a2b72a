use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::DynamicImage;
use image::codecs::png::PngEncoder;

use crate::error::{Error, Result};

fn png_compatible(image: &DynamicImage) -> Cow<'_, DynamicImage> {
    match image {
        DynamicImage::ImageRgb32F(_) => Cow::Owned(DynamicImage::ImageRgb16(image.to_rgb16())),
        DynamicImage::ImageRgba32F(_) => Cow::Owned(DynamicImage::ImageRgba16(image.to_rgba16())),
        _ => Cow::Borrowed(image),
    }
}

pub fn write_png(output: &Path, image: &DynamicImage) -> Result<()> {
    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    let encoder = PngEncoder::new(&mut writer);
    png_compatible(image)
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
    use image::{ImageBuffer, Rgba};

    #[test]
    fn preserves_16_bit_rgba() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deep.png");
        let buf = ImageBuffer::from_pixel(3, 2, Rgba([1000u16, 2000, 3000, u16::MAX]));
        write_png(&path, &DynamicImage::ImageRgba16(buf.clone())).unwrap();

        let decoded = image::open(&path).unwrap();
        assert_eq!(decoded.as_rgba16(), Some(&buf));
    }
}
