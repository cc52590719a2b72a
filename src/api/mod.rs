//! High-level, ergonomic library API: clip in-memory images, single files and
//! batches of files. Prefer these entrypoints over the low-level `core` and
//! `io` modules when integrating imgclip.
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use image::DynamicImage;
use tracing::{error, info};

use crate::core::params::ClipParams;
use crate::core::processing::normalize::normalize_with_policy;
use crate::error::{Error, Result};
use crate::io::{dedupe_path, default_batch_output_path, format_kb, read_image, write_image};
use crate::types::FileFormat;

/// Normalize an already-decoded image according to `params`.
pub fn clip_image(image: &DynamicImage, params: &ClipParams) -> Result<DynamicImage> {
    normalize_with_policy(image, params.target, params.policy)
}

/// Outcome of one clipped file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub input_width: u32,
    pub input_height: u32,
    pub output_width: u32,
    pub output_height: u32,
    pub input_bytes: u64,
    pub output_bytes: u64,
}

impl fmt::Display for ClipReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Input size: {}x{}", self.input_width, self.input_height)?;
        writeln!(f, "Input file size: {}", format_kb(self.input_bytes))?;
        writeln!(f, "Output size: {}x{}", self.output_width, self.output_height)?;
        writeln!(f, "Output file size: {}", format_kb(self.output_bytes))?;
        write!(f, "Path: {}", self.output.display())
    }
}

fn ensure_supported(path: &Path, role: &'static str) -> Result<()> {
    match FileFormat::from_path(path) {
        Some(_) => Ok(()),
        None => Err(Error::UnsupportedFormat {
            path: path.to_path_buf(),
            role,
        }),
    }
}

/// Read `input`, normalize it and write the result to `output`.
///
/// Both extensions are validated before anything is decoded, so a bad output
/// path never costs a decode.
pub fn clip_file_to_path(input: &Path, output: &Path, params: &ClipParams) -> Result<ClipReport> {
    params.validate()?;
    ensure_supported(input, "Input")?;
    ensure_supported(output, "Output")?;

    let input_bytes = fs::metadata(input)?.len();
    let image = read_image(input)?;
    let clipped = clip_image(&image, params)?;
    write_image(&clipped, output, params.jpeg_quality)?;
    let output_bytes = fs::metadata(output)?.len();

    Ok(ClipReport {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        input_width: image.width(),
        input_height: image.height(),
        output_width: clipped.width(),
        output_height: clipped.height(),
        input_bytes,
        output_bytes,
    })
}

/// Batch processing report
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub processed: usize,
    pub errors: usize,
    pub reports: Vec<ClipReport>,
    /// Failed inputs with the rendered error
    pub failures: Vec<(PathBuf, String)>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.processed + self.errors
    }
}

/// Clip every input into `output_dir` with default batch names sharing `timestamp`.
///
/// Inputs are processed one after another. If `continue_on_error` is true,
/// failures are recorded in the report and processing continues; otherwise the
/// first error is returned.
pub fn clip_files_to_dir(
    inputs: &[PathBuf],
    output_dir: &Path,
    params: &ClipParams,
    timestamp: &str,
    continue_on_error: bool,
) -> Result<BatchReport> {
    params.validate()?;

    let mut report = BatchReport::default();
    let mut used = HashSet::new();

    for input in inputs {
        let output = dedupe_path(
            default_batch_output_path(output_dir, input, params.target, timestamp),
            &mut used,
        );
        info!("Processing: {:?} -> {:?}", input, output);

        match clip_file_to_path(input, &output, params) {
            Ok(clip) => {
                info!("Successfully processed: {:?}", input);
                report.processed += 1;
                report.reports.push(clip);
            }
            Err(e) if continue_on_error => {
                error!("Error processing {:?}: {}", input, e);
                report.errors += 1;
                report.failures.push((input.clone(), e.to_string()));
            }
            Err(e) => return Err(e),
        }
    }

    info!(
        "Batch processing complete! Processed: {}, Errors: {}",
        report.processed, report.errors
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FitPolicy, TargetSize};
    use image::{Rgb, RgbImage};

    #[test]
    fn report_renders_five_lines() {
        let report = ClipReport {
            input: PathBuf::from("in.png"),
            output: PathBuf::from("output/out.jpg"),
            input_width: 100,
            input_height: 50,
            output_width: 80,
            output_height: 70,
            input_bytes: 4096,
            output_bytes: 3072,
        };
        assert_eq!(
            report.to_string(),
            "Input size: 100x50\nInput file size: 4KB\nOutput size: 80x70\n\
             Output file size: 3KB\nPath: output/out.jpg"
        );
    }

    #[test]
    fn clip_image_honours_policy() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(4, 4, Rgb([0, 0, 0])));
        let mut params = ClipParams::new(TargetSize::new(6, 2).unwrap());
        assert_eq!(clip_image(&img, &params).unwrap().width(), 6);

        params.policy = FitPolicy::Crop;
        assert!(matches!(
            clip_image(&img, &params),
            Err(Error::InvalidTarget { .. })
        ));
    }

    #[test]
    fn clip_image_reports_oversized_target() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(2, 2, Rgb([0, 0, 0])));
        let params = ClipParams::new(TargetSize::new(u32::MAX, u32::MAX).unwrap());
        let err = clip_image(&img, &params).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Target size 4294967295x4294967295 is too large to allocate"
        );
    }

    #[test]
    fn bad_output_extension_is_rejected_before_decoding() {
        let params = ClipParams::new(TargetSize::new(2, 2).unwrap());
        let err = clip_file_to_path(Path::new("missing.png"), Path::new("out.bmp"), &params)
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat { role: "Output", .. }));
    }
}
