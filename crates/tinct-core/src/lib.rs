//! Tinct Core — domain layer for image color analysis.
//!
//! This crate contains the color science and composition heuristics:
//! color space conversions, k-means palette extraction, harmony
//! derivation, image character classification, and background
//! separation for auto-crop and matting. No network or filesystem
//! access — callers hand in decoded pixel buffers and receive palettes,
//! crop boxes, and masks.
//!
//! All passes are synchronous pure functions whose cost scales with the
//! buffer supplied; callers are expected to downsample large images
//! before clustering or statistics.

pub mod analysis;
pub mod buffer;
pub mod color;
pub mod error;
pub mod palette;
pub mod params;
pub mod segment;
pub mod stats;

// Re-exports for convenience.
pub use analysis::{analyze_image, ImageAnalysis};
pub use buffer::PixelBuffer;
pub use color::convert::ColorHsl;
pub use color::harmony::ColorHarmony;
pub use error::{AnalysisError, Result};
pub use params::AnalysisParams;
pub use segment::bounds::BoundingBox;
pub use segment::matte::{SegmentationProvider, SegmentationResult};
pub use stats::ColorCharacter;
