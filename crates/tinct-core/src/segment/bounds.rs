//! Content bounding box detection for auto-crop.
//!
//! # Algorithm
//! 1. Estimate the background color from the four corners.
//! 2. Scan every pixel; anything outside `tolerance` of the estimate on
//!    at least one channel is content. Alpha participates when the
//!    source carried an alpha channel.
//! 3. Pad the tight content box by `padding_percent` of each image
//!    dimension and clamp to the image bounds.

use serde::{Deserialize, Serialize};

use crate::buffer::PixelBuffer;
use crate::error::{AnalysisError, Result};
use crate::segment::background::estimate_background;

/// A crop rectangle in image pixel coordinates.
///
/// Invariants: `x + width <= image_width`, `y + height <= image_height`,
/// `width >= 1`, `height >= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Find the padded bounding box of non-background content.
///
/// Returns [`AnalysisError::NoContentDetected`] when every pixel matches
/// the background estimate, and [`AnalysisError::EmptyBuffer`] for an
/// empty buffer.
pub fn detect_bounds(buffer: &PixelBuffer, tolerance: u8, padding_percent: f32) -> Result<BoundingBox> {
    let background = estimate_background(buffer).ok_or(AnalysisError::EmptyBuffer)?;
    let channels = if buffer.source_has_alpha { 4 } else { 3 };

    let mut min_x = u32::MAX;
    let mut min_y = u32::MAX;
    let mut max_x = 0u32;
    let mut max_y = 0u32;
    let mut found = false;

    for y in 0..buffer.height {
        for x in 0..buffer.width {
            let px = buffer.pixel(x, y);
            let matches_background =
                (0..channels).all(|ch| px[ch].abs_diff(background[ch]) <= tolerance);
            if matches_background {
                continue;
            }
            found = true;
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
    }

    if !found {
        return Err(AnalysisError::NoContentDetected);
    }

    // Padding is a fraction of the full image dimension, per axis.
    let pad_x = (buffer.width as f32 * padding_percent / 100.0).round() as u32;
    let pad_y = (buffer.height as f32 * padding_percent / 100.0).round() as u32;

    let x0 = min_x.saturating_sub(pad_x);
    let y0 = min_y.saturating_sub(pad_y);
    let x1 = (max_x + pad_x).min(buffer.width - 1);
    let y1 = (max_y + pad_y).min(buffer.height - 1);

    let bounds = BoundingBox {
        x: x0,
        y: y0,
        width: x1 - x0 + 1,
        height: y1 - y0 + 1,
    };
    tracing::debug!(?bounds, ?background, "content bounds detected");
    Ok(bounds)
}
