//! Core building blocks: the per-axis geometry planner, the normalizer that
//! applies it to pixel buffers, and the serializable clip parameters. These are
//! pure, I/O-free primitives consumed by the high-level `api` module.
pub mod params;
pub mod processing;
