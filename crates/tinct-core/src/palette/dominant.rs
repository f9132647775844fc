//! Dominant color resolution against an extracted palette.

use crate::color::convert::hex_to_rgb;
use crate::color::distance::euclidean_rgb;
use crate::error::Result;

/// Returned when the palette has no entries to resolve against.
const DEFAULT_DOMINANT: &str = "#000000";

/// Pick the palette entry covering the most pixels.
///
/// Every pixel is matched to its nearest palette entry by RGB distance;
/// the entry with the highest tally wins, with ties going to the
/// earlier palette entry. An empty palette resolves to `#000000`.
pub fn find_dominant(pixels: &[[u8; 3]], palette: &[String]) -> Result<String> {
    if palette.is_empty() {
        return Ok(DEFAULT_DOMINANT.to_string());
    }

    let counts = palette_tally(pixels, palette)?;
    let mut best = 0usize;
    let mut best_count = counts[0];
    for (i, &count) in counts.iter().enumerate().skip(1) {
        // Strict `>` keeps ties on the first-seen entry.
        if count > best_count {
            best_count = count;
            best = i;
        }
    }
    Ok(palette[best].clone())
}

/// Per-entry pixel counts for a palette, in palette order.
///
/// Callers use this to weight palette entries by coverage.
pub fn palette_tally(pixels: &[[u8; 3]], palette: &[String]) -> Result<Vec<u64>> {
    let entries = palette
        .iter()
        .map(|hex| hex_to_rgb(hex))
        .collect::<Result<Vec<_>>>()?;
    if entries.is_empty() {
        return Ok(Vec::new());
    }

    let mut counts = vec![0u64; entries.len()];
    for &px in pixels {
        let mut best = 0usize;
        let mut best_distance = f64::INFINITY;
        for (i, &entry) in entries.iter().enumerate() {
            let distance = euclidean_rgb(px, entry);
            if distance < best_distance {
                best_distance = distance;
                best = i;
            }
        }
        counts[best] += 1;
    }
    Ok(counts)
}
