//! Palette extraction via fixed-budget k-means in RGB space.
//!
//! # Algorithm
//! 1. Collect the distinct colors in first-seen order and sample
//!    `min(k, distinct)` of them without replacement as initial
//!    centroids.
//! 2. Run exactly [`ITERATIONS`] assignment/update rounds: every pixel
//!    joins its nearest centroid (ties go to the lowest centroid index);
//!    each non-empty cluster moves to the integer-rounded per-channel
//!    mean of its members; empty clusters keep their previous centroid.
//! 3. Sort the final centroids brightest-first by luminance
//!    `0.299r + 0.587g + 0.114b` and hex-encode them.
//!
//! # Complexity
//! O([`ITERATIONS`] × pixels × k). There is no convergence check — the
//! fixed budget keeps the cost deterministic. Callers downsample large
//! images before extraction.
//!
//! Initialization draws from the supplied RNG, so two runs only agree
//! when the caller seeds it. Tests use [`extract_palette_seeded`].

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};

use crate::color::convert::rgb_to_hex;
use crate::color::distance::euclidean_rgb;

/// Fixed iteration budget for every extraction.
pub const ITERATIONS: usize = 10;

/// Extract a luminance-ordered palette of up to `k` colors.
///
/// Returns an empty palette for an empty input, and fewer than `k`
/// entries when the input holds fewer distinct colors.
pub fn extract_palette<R: Rng + ?Sized>(pixels: &[[u8; 3]], k: usize, rng: &mut R) -> Vec<String> {
    if pixels.is_empty() || k == 0 {
        return Vec::new();
    }

    // Distinct colors in first-seen order; the centroid count shrinks to
    // what is actually available.
    let mut seen = HashSet::new();
    let mut distinct = Vec::new();
    for &px in pixels {
        if seen.insert(px) {
            distinct.push(px);
        }
    }

    let cluster_count = k.min(distinct.len());
    let mut centroids: Vec<[u8; 3]> = index::sample(rng, distinct.len(), cluster_count)
        .iter()
        .map(|i| distinct[i])
        .collect();

    let mut assignment = vec![0usize; pixels.len()];
    for _ in 0..ITERATIONS {
        // Assignment phase. Strict `<` keeps ties on the first centroid.
        for (pi, &px) in pixels.iter().enumerate() {
            let mut best = 0usize;
            let mut best_distance = f64::INFINITY;
            for (ci, &centroid) in centroids.iter().enumerate() {
                let distance = euclidean_rgb(px, centroid);
                if distance < best_distance {
                    best_distance = distance;
                    best = ci;
                }
            }
            assignment[pi] = best;
        }

        // Update phase, after all assignments are final.
        let mut sums = vec![[0u64; 3]; centroids.len()];
        let mut counts = vec![0u64; centroids.len()];
        for (pi, &px) in pixels.iter().enumerate() {
            let ci = assignment[pi];
            for ch in 0..3 {
                sums[ci][ch] += px[ch] as u64;
            }
            counts[ci] += 1;
        }
        for (ci, centroid) in centroids.iter_mut().enumerate() {
            if counts[ci] == 0 {
                continue;
            }
            for ch in 0..3 {
                centroid[ch] = (sums[ci][ch] as f64 / counts[ci] as f64).round() as u8;
            }
        }
    }

    centroids.sort_by(|a, b| luminance(*b).total_cmp(&luminance(*a)));
    tracing::debug!(clusters = centroids.len(), requested = k, "palette extracted");

    centroids.iter().map(|&c| rgb_to_hex(c)).collect()
}

/// [`extract_palette`] with a reproducible RNG seeded from `seed`.
pub fn extract_palette_seeded(pixels: &[[u8; 3]], k: usize, seed: u64) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    extract_palette(pixels, k, &mut rng)
}

/// Perceptual luminance used for palette ordering (brightest first).
pub(crate) fn luminance(rgb: [u8; 3]) -> f64 {
    0.299 * rgb[0] as f64 + 0.587 * rgb[1] as f64 + 0.114 * rgb[2] as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::convert::hex_to_rgb;

    #[test]
    fn test_empty_input_yields_empty_palette() {
        assert!(extract_palette_seeded(&[], 5, 1).is_empty());
    }

    #[test]
    fn test_palette_size_bounded_by_distinct_colors() {
        let pixels = vec![[10, 20, 30]; 100];
        let palette = extract_palette_seeded(&pixels, 5, 1);
        assert_eq!(palette, vec!["#0a141e".to_string()]);
    }

    #[test]
    fn test_red_green_split_sorts_green_first() {
        // Green carries the 0.587 luminance weight, so it sorts ahead of red.
        let pixels = [[255, 0, 0], [255, 0, 0], [0, 255, 0]];
        let palette = extract_palette_seeded(&pixels, 2, 7);
        assert_eq!(palette, vec!["#00ff00".to_string(), "#ff0000".to_string()]);
    }

    #[test]
    fn test_palette_is_sorted_by_descending_luminance() {
        let pixels: Vec<[u8; 3]> = (0..255u8)
            .map(|v| [v, v.wrapping_mul(3), v.wrapping_mul(7)])
            .collect();
        let palette = extract_palette_seeded(&pixels, 6, 42);
        let lums: Vec<f64> = palette
            .iter()
            .map(|hex| luminance(hex_to_rgb(hex).unwrap()))
            .collect();
        for pair in lums.windows(2) {
            assert!(pair[0] >= pair[1], "palette not luminance-ordered: {palette:?}");
        }
    }

    #[test]
    fn test_same_seed_is_deterministic() {
        let pixels: Vec<[u8; 3]> = (0..600u32)
            .map(|i| [(i % 256) as u8, (i * 5 % 256) as u8, (i * 11 % 256) as u8])
            .collect();
        let a = extract_palette_seeded(&pixels, 5, 99);
        let b = extract_palette_seeded(&pixels, 5, 99);
        assert_eq!(a, b);
        assert_eq!(a.len(), 5);
    }

    #[test]
    fn test_two_well_separated_clusters_recover_their_means() {
        // 60 near-black and 40 near-white pixels; the two centroids must
        // land on the per-cluster means regardless of initialization.
        let mut pixels = Vec::new();
        for i in 0..60u8 {
            pixels.push([i % 8, i % 8, i % 8]);
        }
        for i in 0..40u8 {
            pixels.push([248 + i % 8, 248 + i % 8, 248 + i % 8]);
        }
        let palette = extract_palette_seeded(&pixels, 2, 3);
        assert_eq!(palette.len(), 2);
        let bright = hex_to_rgb(&palette[0]).unwrap();
        let dark = hex_to_rgb(&palette[1]).unwrap();
        assert!(bright[0] > 240, "bright cluster off: {palette:?}");
        assert!(dark[0] < 16, "dark cluster off: {palette:?}");
    }
}
