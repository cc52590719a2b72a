use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{FitPolicy, TargetSize};

pub const DEFAULT_JPEG_QUALITY: u8 = 90;

fn default_jpeg_quality() -> u8 {
    DEFAULT_JPEG_QUALITY
}

/// Clip parameters suitable for JSON preset files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipParams {
    pub target: TargetSize,
    #[serde(default)]
    pub policy: FitPolicy,
    /// Only used when the output container is JPEG
    #[serde(default = "default_jpeg_quality")]
    pub jpeg_quality: u8,
}

impl ClipParams {
    pub fn new(target: TargetSize) -> Self {
        Self {
            target,
            policy: FitPolicy::default(),
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(Error::InvalidArgument {
                arg: "jpeg_quality",
                value: self.jpeg_quality.to_string(),
            });
        }
        Ok(())
    }

    /// Load and validate a JSON preset.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let params: ClipParams = serde_json::from_str(&text).map_err(|source| Error::Preset {
            path: path.to_path_buf(),
            source,
        })?;
        params.validate()?;
        Ok(params)
    }
}
