//! High-level analysis entry point combining the individual passes.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::buffer::PixelBuffer;
use crate::color::harmony::{color_harmony, ColorHarmony};
use crate::error::Result;
use crate::palette::dominant::find_dominant;
use crate::palette::kmeans::extract_palette;
use crate::params::AnalysisParams;
use crate::stats::{self, ColorCharacter};

/// Complete color analysis of one image, ready for JSON metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAnalysis {
    /// Extracted palette, brightest entry first.
    pub palette: Vec<String>,
    /// Palette entry covering the most pixels.
    pub dominant_color: String,
    /// Harmony set derived from the dominant color.
    pub harmony: ColorHarmony,
    /// Coarse character buckets.
    pub character: ColorCharacter,
}

/// Run palette extraction, dominant resolution, harmony derivation, and
/// character classification in one pass.
///
/// Degrades gracefully on an empty buffer: empty palette, `#000000`
/// dominant, neutral character. Cost scales with the buffer supplied —
/// callers downsample large images first.
pub fn analyze_image(buffer: &PixelBuffer, params: &AnalysisParams) -> Result<ImageAnalysis> {
    let pixels = buffer.rgb_pixels();
    let mut rng = match params.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let palette = extract_palette(&pixels, params.palette_size, &mut rng);
    let dominant_color = find_dominant(&pixels, &palette)?;
    let harmony = color_harmony(&dominant_color)?;
    let character = stats::analyze(buffer);

    tracing::debug!(
        palette_len = palette.len(),
        dominant = %dominant_color,
        "image analysis complete"
    );

    Ok(ImageAnalysis {
        palette,
        dominant_color,
        harmony,
        character,
    })
}
