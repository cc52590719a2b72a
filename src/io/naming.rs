//! Default output naming. The timestamp is produced once per run by
//! [`batch_timestamp`] and handed to every call, so all files written by one
//! invocation share it.
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::types::{FileFormat, TargetSize};

pub const DEFAULT_OUTPUT_DIR: &str = "output";

const DEFAULT_OUTPUT_FORMAT: FileFormat = FileFormat::Jpeg;

pub fn batch_timestamp() -> String {
    Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// `<dir>/output_<W>x<H>_<timestamp>.jpg`
pub fn default_output_path(dir: &Path, target: TargetSize, timestamp: &str) -> PathBuf {
    dir.join(format!(
        "output_{}_{}.{}",
        target,
        timestamp,
        DEFAULT_OUTPUT_FORMAT.extension()
    ))
}

/// `<dir>/<input stem>_<W>x<H>_<timestamp>.jpg`
pub fn default_batch_output_path(
    dir: &Path,
    input: &Path,
    target: TargetSize,
    timestamp: &str,
) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_else(|| "output".into());
    dir.join(format!(
        "{}_{}_{}.{}",
        stem,
        target,
        timestamp,
        DEFAULT_OUTPUT_FORMAT.extension()
    ))
}

/// Appends `_2`, `_3`, ... to the stem until the path is unused in this run.
pub fn dedupe_path(path: PathBuf, used: &mut HashSet<PathBuf>) -> PathBuf {
    if used.insert(path.clone()) {
        return path;
    }

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = path
        .extension()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut n = 2usize;
    loop {
        let candidate = path.with_file_name(format!("{stem}_{n}.{ext}"));
        if used.insert(candidate.clone()) {
            return candidate;
        }
        n += 1;
    }
}

pub fn format_kb(size_bytes: u64) -> String {
    format!("{:.0}KB", size_bytes as f64 / 1024.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target() -> TargetSize {
        TargetSize::new(640, 480).unwrap()
    }

    #[test]
    fn single_default_name() {
        let path = default_output_path(Path::new("output"), target(), "20260101_120000");
        assert_eq!(path, PathBuf::from("output/output_640x480_20260101_120000.jpg"));
    }

    #[test]
    fn batch_default_name_uses_stem() {
        let path = default_batch_output_path(
            Path::new("out"),
            Path::new("/photos/cat.png"),
            target(),
            "20260101_120000",
        );
        assert_eq!(path, PathBuf::from("out/cat_640x480_20260101_120000.jpg"));
    }

    #[test]
    fn dedupe_appends_counter() {
        let mut used = HashSet::new();
        let a = dedupe_path(PathBuf::from("out/cat.jpg"), &mut used);
        let b = dedupe_path(PathBuf::from("out/cat.jpg"), &mut used);
        let c = dedupe_path(PathBuf::from("out/cat.jpg"), &mut used);
        assert_eq!(a, PathBuf::from("out/cat.jpg"));
        assert_eq!(b, PathBuf::from("out/cat_2.jpg"));
        assert_eq!(c, PathBuf::from("out/cat_3.jpg"));
    }

    #[test]
    fn timestamp_shape() {
        let ts = batch_timestamp();
        assert_eq!(ts.len(), 15);
        assert_eq!(ts.as_bytes()[8], b'_');
    }

    #[test]
    fn kb_formatting() {
        assert_eq!(format_kb(0), "0KB");
        assert_eq!(format_kb(2048), "2KB");
        assert_eq!(format_kb(1400), "1KB");
        assert_eq!(format_kb(1700), "2KB");
    }
}
