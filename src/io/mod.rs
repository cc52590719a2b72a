//! I/O layer: decoding input images after extension checks, encoding results
//! in the container implied by the output path, and output file naming.
pub mod naming;
pub mod reader;
pub mod writers;

pub use naming::{
    DEFAULT_OUTPUT_DIR, batch_timestamp, dedupe_path, default_batch_output_path,
    default_output_path, format_kb,
};
pub use reader::read_image;
pub use writers::write_image;
