//! Heuristic background removal producing a mask and a matte.
//!
//! Uses the same corner-sampled background estimate as auto-crop, but
//! matches on RGB only — a source alpha channel carries through to the
//! matte instead of driving the match. This is the last-resort strategy;
//! learned segmentation providers are expected to outrank it, which is
//! why every result carries a provider tag.

use serde::{Deserialize, Serialize};

use crate::buffer::PixelBuffer;
use crate::error::{AnalysisError, Result};
use crate::segment::background::estimate_background;

/// Radius of the box blur softening the matte's alpha edges.
const BLUR_RADIUS: i64 = 1;

/// Which strategy produced a segmentation result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentationProvider {
    /// Corner-sampled color matching — the lowest quality tier.
    Heuristic,
}

/// Output of background separation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentationResult {
    /// Binary mask: white where foreground, black where background.
    pub mask: PixelBuffer,
    /// Source image with background alpha zeroed and edges softened.
    pub matte: PixelBuffer,
    /// Strategy that produced this result.
    pub provider: SegmentationProvider,
}

/// Separate foreground from a corner-estimated background color.
///
/// Pixels within `tolerance` of the estimate on every RGB channel are
/// background. Returns [`AnalysisError::EmptyBuffer`] for an empty
/// buffer.
pub fn remove_background(buffer: &PixelBuffer, tolerance: u8) -> Result<SegmentationResult> {
    let background = estimate_background(buffer).ok_or(AnalysisError::EmptyBuffer)?;

    let mut mask_pixels = Vec::with_capacity(buffer.len());
    let mut matte_pixels = Vec::with_capacity(buffer.len());
    let mut foreground_count = 0usize;

    for &px in &buffer.pixels {
        let matches_background = (0..3).all(|ch| px[ch].abs_diff(background[ch]) <= tolerance);
        if matches_background {
            mask_pixels.push([0, 0, 0, 255]);
            matte_pixels.push([px[0], px[1], px[2], 0]);
        } else {
            mask_pixels.push([255, 255, 255, 255]);
            matte_pixels.push(px);
            foreground_count += 1;
        }
    }

    let mask = PixelBuffer {
        width: buffer.width,
        height: buffer.height,
        pixels: mask_pixels,
        source_has_alpha: false,
    };
    let mut matte = PixelBuffer {
        width: buffer.width,
        height: buffer.height,
        pixels: matte_pixels,
        source_has_alpha: true,
    };
    blur_alpha(&mut matte, BLUR_RADIUS);

    tracing::debug!(
        foreground = foreground_count,
        total = buffer.len(),
        ?background,
        "background separated"
    );

    Ok(SegmentationResult {
        mask,
        matte,
        provider: SegmentationProvider::Heuristic,
    })
}

/// Box-blur the alpha channel in place. Neighbors outside the image do
/// not contribute, so flat regions keep their exact alpha.
fn blur_alpha(buffer: &mut PixelBuffer, radius: i64) {
    let width = buffer.width as i64;
    let height = buffer.height as i64;
    let source: Vec<u8> = buffer.pixels.iter().map(|px| px[3]).collect();

    for y in 0..height {
        for x in 0..width {
            let mut sum = 0u32;
            let mut count = 0u32;
            for dy in -radius..=radius {
                for dx in -radius..=radius {
                    let nx = x + dx;
                    let ny = y + dy;
                    if nx < 0 || ny < 0 || nx >= width || ny >= height {
                        continue;
                    }
                    sum += source[(ny * width + nx) as usize] as u32;
                    count += 1;
                }
            }
            let blurred = (sum as f64 / count as f64).round() as u8;
            buffer.pixels[(y * width + x) as usize][3] = blurred;
        }
    }
}
