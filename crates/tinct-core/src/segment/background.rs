//! Corner-sampled background color estimation.

use crate::buffer::PixelBuffer;

/// Estimate the background color from the four corner pixels.
///
/// The most frequent corner color wins; ties go to the corner sampled
/// first (top-left, top-right, bottom-left, bottom-right order).
/// Returns `None` for an empty buffer.
pub fn estimate_background(buffer: &PixelBuffer) -> Option<[u8; 4]> {
    if buffer.is_empty() {
        return None;
    }

    let right = buffer.width - 1;
    let bottom = buffer.height - 1;
    let corners = [
        buffer.pixel(0, 0),
        buffer.pixel(right, 0),
        buffer.pixel(0, bottom),
        buffer.pixel(right, bottom),
    ];

    let mut best = corners[0];
    let mut best_count = 0usize;
    for &corner in &corners {
        let count = corners.iter().filter(|&&other| other == corner).count();
        // Strict `>` keeps ties on the earlier corner.
        if count > best_count {
            best_count = count;
            best = corner;
        }
    }
    Some(best)
}
