use clap::Parser;
use std::path::PathBuf;

use imgclip::io::DEFAULT_OUTPUT_DIR;
use imgclip::{FitPolicy, TargetSize};

#[derive(Parser, Debug)]
#[command(
    name = "imgclip",
    version,
    about = "Resize by clipping or padding equally from each side to center the composition"
)]
pub struct CliArgs {
    /// Input images (PNG, JPG or JPEG)
    #[arg(required = true, value_name = "INPUT")]
    pub inputs: Vec<PathBuf>,

    /// Target size in WIDTH:HEIGHT format (e.g. 1080:1350)
    #[arg(short, long, allow_hyphen_values = true)]
    pub target: Option<TargetSize>,

    /// Output filename (single input only)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Directory for default-named outputs
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// What to do when the target is larger than the input (pad or crop) [default: pad]
    #[arg(long, value_enum)]
    pub policy: Option<FitPolicy>,

    /// JPEG quality (1-100) [default: 90]
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=100))]
    pub quality: Option<u8>,

    /// JSON preset with target, policy and jpeg_quality; flags override it
    #[arg(long)]
    pub preset: Option<PathBuf>,

    /// Stop at the first failing input instead of continuing the batch
    #[arg(long, default_value_t = false)]
    pub fail_fast: bool,

    /// Enable debug logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
