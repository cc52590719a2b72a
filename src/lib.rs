#![doc = r#"
imgclip — normalize images to an exact pixel size without resampling.

Every axis is handled on its own: when the source is larger than the target it
is center-cropped, when it is smaller it is centered on an opaque-white canvas.
Odd margins are floor-divided, so the spare pixel always ends up on the
bottom/right. Pixels that survive are copied byte-for-byte; nothing is ever
scaled or interpolated.

The crate powers the `imgclip` CLI and can be embedded in your own Rust
applications.

Quick start: normalize an in-memory image
-----------------------------------------
```rust
use image::{DynamicImage, RgbImage};
use imgclip::{TargetSize, normalize};

let source = DynamicImage::ImageRgb8(RgbImage::new(100, 50));
// Width is cropped (100 -> 80), height is padded (50 -> 70)
let result = normalize(&source, TargetSize::new(80, 70).unwrap());
assert_eq!((result.width(), result.height()), (80, 70));
```

Clip a file to a file
---------------------
```rust,no_run
use std::path::Path;
use imgclip::{ClipParams, FitPolicy, TargetSize, clip_file_to_path};

fn main() -> imgclip::Result<()> {
    let params = ClipParams {
        target: TargetSize::new(1080, 1080).unwrap(),
        policy: FitPolicy::Pad,
        jpeg_quality: 90,
    };

    let report = clip_file_to_path(Path::new("in.png"), Path::new("out/square.jpg"), &params)?;
    println!("{report}");
    Ok(())
}
```

Batch helpers
-------------
```rust,no_run
use std::path::{Path, PathBuf};
use imgclip::{ClipParams, TargetSize, batch_timestamp, clip_files_to_dir};

fn main() -> imgclip::Result<()> {
    let params = ClipParams::new(TargetSize::new(640, 480).unwrap());
    let inputs = vec![PathBuf::from("a.png"), PathBuf::from("b.jpg")];

    let report = clip_files_to_dir(
        &inputs,
        Path::new("output"),
        &params,
        &batch_timestamp(),
        true, // continue_on_error
    )?;

    println!("processed={} errors={}", report.processed, report.errors);
    Ok(())
}
```

Error handling
--------------
All fallible functions return `imgclip::Result<T>`. Under `FitPolicy::Crop`
a target larger than the source on either axis yields `Error::InvalidTarget`;
under the default `FitPolicy::Pad` that case is padded instead.

Useful modules
--------------
- [`api`] — high-level entry points for images, files and batches.
- [`core`] — geometry planning and the normalizer itself.
- [`io`] — decoding, encoding and output naming.
- [`types`] — `TargetSize`, `FitPolicy`, `FileFormat`.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use crate::core::params::ClipParams;
pub use crate::core::processing::geometry::{AxisPlan, Placement};
pub use crate::core::processing::normalize::{normalize, normalize_buffer, normalize_with_policy};
pub use crate::error::{Error, Result};
pub use crate::types::{AxisAction, FileFormat, FitPolicy, TargetSize};

pub use crate::io::{batch_timestamp, read_image, write_image};

pub use crate::api::{BatchReport, ClipReport, clip_file_to_path, clip_files_to_dir, clip_image};
