//! Shared types and enums used across imgclip.
//! Includes `TargetSize`, `FitPolicy`, `FileFormat` and the per-axis
//! `AxisAction` reported by the geometry planner.
use std::fmt;
use std::num::NonZeroU32;
use std::path::Path;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Exact output size in pixels. Both sides are non-zero by construction.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct TargetSize {
    pub width: NonZeroU32,
    pub height: NonZeroU32,
}

impl TargetSize {
    /// Returns `None` when either side is zero.
    pub fn new(width: u32, height: u32) -> Option<Self> {
        Some(Self {
            width: NonZeroU32::new(width)?,
            height: NonZeroU32::new(height)?,
        })
    }

    pub fn width(&self) -> u32 {
        self.width.get()
    }

    pub fn height(&self) -> u32 {
        self.height.get()
    }
}

impl fmt::Display for TargetSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TargetParseError {
    #[error("Target must be in WIDTH:HEIGHT format.")]
    MissingSeparator,

    #[error("Target dimensions must be integers.")]
    NotInteger,

    #[error("Target dimensions must be positive integers.")]
    NotPositive,
}

/// Parses `WIDTH:HEIGHT`. Signed parsing keeps "-5" a sign error rather
/// than an integer error.
impl FromStr for TargetSize {
    type Err = TargetParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (width_str, height_str) = value
            .split_once(':')
            .ok_or(TargetParseError::MissingSeparator)?;

        let width = width_str
            .trim()
            .parse::<i64>()
            .map_err(|_| TargetParseError::NotInteger)?;
        let height = height_str
            .trim()
            .parse::<i64>()
            .map_err(|_| TargetParseError::NotInteger)?;

        if width <= 0 || height <= 0 {
            return Err(TargetParseError::NotPositive);
        }

        let width = u32::try_from(width).map_err(|_| TargetParseError::NotInteger)?;
        let height = u32::try_from(height).map_err(|_| TargetParseError::NotInteger)?;

        TargetSize::new(width, height).ok_or(TargetParseError::NotPositive)
    }
}

/// What to do when the target is larger than the source on an axis.
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum FitPolicy {
    /// Center-pad with the background color.
    #[default]
    Pad,
    /// Crop only; a target larger than the source is an error.
    Crop,
}

impl fmt::Display for FitPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FitPolicy::Pad => write!(f, "pad"),
            FitPolicy::Crop => write!(f, "crop"),
        }
    }
}

/// Container formats accepted for input and output.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum FileFormat {
    Png,
    Jpeg,
}

impl FileFormat {
    /// Detect the container from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "png" => Some(FileFormat::Png),
            "jpg" | "jpeg" => Some(FileFormat::Jpeg),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            FileFormat::Png => "png",
            FileFormat::Jpeg => "jpg",
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileFormat::Png => write!(f, "PNG"),
            FileFormat::Jpeg => write!(f, "JPEG"),
        }
    }
}

/// Per-axis geometry decision.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum AxisAction {
    Keep,
    Crop,
    Pad,
}

impl fmt::Display for AxisAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisAction::Keep => write!(f, "keep"),
            AxisAction::Crop => write!(f, "crop"),
            AxisAction::Pad => write!(f, "pad"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_width_height() {
        let target: TargetSize = "800:600".parse().unwrap();
        assert_eq!(target.width(), 800);
        assert_eq!(target.height(), 600);
        assert_eq!(target.to_string(), "800x600");
    }

    #[test]
    fn rejects_bad_targets() {
        assert_eq!(
            "800x600".parse::<TargetSize>(),
            Err(TargetParseError::MissingSeparator)
        );
        assert_eq!(
            "800:abc".parse::<TargetSize>(),
            Err(TargetParseError::NotInteger)
        );
        assert_eq!(
            "0:600".parse::<TargetSize>(),
            Err(TargetParseError::NotPositive)
        );
        assert_eq!(
            "-5:10".parse::<TargetSize>(),
            Err(TargetParseError::NotPositive)
        );
    }

    #[test]
    fn detects_formats_case_insensitively() {
        assert_eq!(FileFormat::from_path(Path::new("a.PNG")), Some(FileFormat::Png));
        assert_eq!(FileFormat::from_path(Path::new("b.jpeg")), Some(FileFormat::Jpeg));
        assert_eq!(FileFormat::from_path(Path::new("c.Jpg")), Some(FileFormat::Jpeg));
        assert_eq!(FileFormat::from_path(Path::new("d.gif")), None);
        assert_eq!(FileFormat::from_path(Path::new("noext")), None);
    }

    #[test]
    fn target_size_deserializes_and_rejects_zero() {
        let target: TargetSize = serde_json::from_str(r#"{"width":4,"height":3}"#).unwrap();
        assert_eq!(target, TargetSize::new(4, 3).unwrap());
        assert!(serde_json::from_str::<TargetSize>(r#"{"width":0,"height":3}"#).is_err());
    }
}
