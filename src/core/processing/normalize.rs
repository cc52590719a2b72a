use image::{DynamicImage, ImageBuffer, Limits, Luma, LumaA, Pixel, Rgb, Rgba, imageops};
use tracing::debug;

use crate::core::processing::geometry::Placement;
use crate::error::{Error, Result};
use crate::types::{FitPolicy, TargetSize};

/// Normalize a decoded image to exactly `target` pixels.
///
/// Axes larger than the target are center-cropped, axes smaller than the
/// target are center-padded with opaque white. Pixels inside the overlap are
/// copied unchanged in the image's own layout.
pub fn normalize(image: &DynamicImage, target: TargetSize) -> DynamicImage {
    match image {
        DynamicImage::ImageLuma8(buf) => {
            DynamicImage::ImageLuma8(normalize_buffer(buf, target, Luma([u8::MAX])))
        }
        DynamicImage::ImageLumaA8(buf) => {
            DynamicImage::ImageLumaA8(normalize_buffer(buf, target, LumaA([u8::MAX; 2])))
        }
        DynamicImage::ImageRgb8(buf) => {
            DynamicImage::ImageRgb8(normalize_buffer(buf, target, Rgb([u8::MAX; 3])))
        }
        DynamicImage::ImageRgba8(buf) => {
            DynamicImage::ImageRgba8(normalize_buffer(buf, target, Rgba([u8::MAX; 4])))
        }
        DynamicImage::ImageLuma16(buf) => {
            DynamicImage::ImageLuma16(normalize_buffer(buf, target, Luma([u16::MAX])))
        }
        DynamicImage::ImageLumaA16(buf) => {
            DynamicImage::ImageLumaA16(normalize_buffer(buf, target, LumaA([u16::MAX; 2])))
        }
        DynamicImage::ImageRgb16(buf) => {
            DynamicImage::ImageRgb16(normalize_buffer(buf, target, Rgb([u16::MAX; 3])))
        }
        DynamicImage::ImageRgba16(buf) => {
            DynamicImage::ImageRgba16(normalize_buffer(buf, target, Rgba([u16::MAX; 4])))
        }
        DynamicImage::ImageRgb32F(buf) => {
            DynamicImage::ImageRgb32F(normalize_buffer(buf, target, Rgb([1.0; 3])))
        }
        DynamicImage::ImageRgba32F(buf) => {
            DynamicImage::ImageRgba32F(normalize_buffer(buf, target, Rgba([1.0; 4])))
        }
        other => DynamicImage::ImageRgba8(normalize_buffer(
            &other.to_rgba8(),
            target,
            Rgba([u8::MAX; 4]),
        )),
    }
}

/// Like [`normalize`], but checked: under [`FitPolicy::Crop`] a target larger
/// than the source on either axis is rejected instead of padded, and a padded
/// canvas beyond `image`'s default allocation limit is rejected up front.
pub fn normalize_with_policy(
    image: &DynamicImage,
    target: TargetSize,
    policy: FitPolicy,
) -> Result<DynamicImage> {
    if policy == FitPolicy::Crop {
        ensure_croppable(image.width(), image.height(), target)?;
    }
    ensure_allocatable(image, target)?;
    Ok(normalize(image, target))
}

/// Only a target that grows an axis can need more memory than the source.
pub fn ensure_allocatable(image: &DynamicImage, target: TargetSize) -> Result<()> {
    if target.width() <= image.width() && target.height() <= image.height() {
        return Ok(());
    }

    let too_large = || Error::TargetTooLarge {
        target_width: target.width(),
        target_height: target.height(),
    };

    let bytes = u64::from(target.width())
        .checked_mul(u64::from(target.height()))
        .and_then(|pixels| pixels.checked_mul(u64::from(image.color().bytes_per_pixel())))
        .ok_or_else(too_large)?;

    let mut limits = Limits::default();
    limits
        .check_dimensions(target.width(), target.height())
        .and_then(|()| limits.reserve(bytes))
        .map_err(|_| too_large())
}

pub fn ensure_croppable(source_width: u32, source_height: u32, target: TargetSize) -> Result<()> {
    if target.width() > source_width || target.height() > source_height {
        return Err(Error::InvalidTarget {
            target_width: target.width(),
            target_height: target.height(),
            source_width,
            source_height,
        });
    }
    Ok(())
}

/// Normalize a typed pixel buffer, using `fill` for padded pixels.
pub fn normalize_buffer<P: Pixel + 'static>(
    src: &ImageBuffer<P, Vec<P::Subpixel>>,
    target: TargetSize,
    fill: P,
) -> ImageBuffer<P, Vec<P::Subpixel>> {
    let placement = Placement::new(src.width(), src.height(), target);
    debug!(
        "Placement: {}x{} -> {}x{} (x: {} src+{} dst+{}, y: {} src+{} dst+{})",
        placement.source_width,
        placement.source_height,
        placement.target_width,
        placement.target_height,
        placement.x.action,
        placement.x.src_offset,
        placement.x.dst_offset,
        placement.y.action,
        placement.y.src_offset,
        placement.y.dst_offset,
    );
    apply_placement(src, &placement, fill)
}

/// Apply a precomputed placement in a single pass.
pub fn apply_placement<P: Pixel + 'static>(
    src: &ImageBuffer<P, Vec<P::Subpixel>>,
    placement: &Placement,
    fill: P,
) -> ImageBuffer<P, Vec<P::Subpixel>> {
    if placement.is_identity() {
        return src.clone();
    }

    let (left, top, width, height) = placement.source_rect();
    if !placement.needs_fill() {
        return imageops::crop_imm(src, left, top, width, height).to_image();
    }

    let mut canvas = ImageBuffer::from_pixel(placement.target_width, placement.target_height, fill);

    let channels = usize::from(P::CHANNEL_COUNT);
    let src_stride = src.width() as usize * channels;
    let dst_stride = placement.target_width as usize * channels;
    let row_len = width as usize * channels;
    let (dst_left, dst_top) = placement.destination_origin();

    let src_raw: &[P::Subpixel] = src.as_raw();
    let dst_raw: &mut [P::Subpixel] = &mut canvas;

    // Copy per row using slice copies, cropped window and pad offset together
    for row in 0..height as usize {
        let src_offset = (top as usize + row) * src_stride + left as usize * channels;
        let dst_offset = (dst_top as usize + row) * dst_stride + dst_left as usize * channels;
        dst_raw[dst_offset..dst_offset + row_len]
            .copy_from_slice(&src_raw[src_offset..src_offset + row_len]);
    }

    canvas
}
