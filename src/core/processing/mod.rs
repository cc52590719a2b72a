pub mod geometry;
pub mod normalize;
