//! Background/foreground separation — auto-crop bounds and matting.

pub mod background;
pub mod bounds;
pub mod matte;

pub use bounds::{detect_bounds, BoundingBox};
pub use matte::{remove_background, SegmentationProvider, SegmentationResult};
