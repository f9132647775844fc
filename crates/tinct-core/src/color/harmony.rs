//! Color harmony derivation from a base color.
//!
//! All harmonies are fixed hue rotations in HSL space; saturation and
//! lightness carry over from the base color unchanged.

use serde::{Deserialize, Serialize};

use crate::color::convert::{hex_to_rgb, hsl_to_rgb, rgb_to_hex, rgb_to_hsl, ColorHsl};
use crate::error::Result;

/// Harmony set derived from one base color, hex-encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorHarmony {
    /// Hue + 180°.
    pub complementary: String,
    /// Hue ± 30°.
    pub analogous: [String; 2],
    /// Hue + 120° and + 240°.
    pub triadic: [String; 2],
    /// Hue + 150° and + 210°.
    pub split_complementary: [String; 2],
}

/// Derive the harmony set for a base hex color.
pub fn color_harmony(base: &str) -> Result<ColorHarmony> {
    let hsl = rgb_to_hsl(hex_to_rgb(base)?);

    let rotate = |degrees: u16| {
        rgb_to_hex(hsl_to_rgb(ColorHsl {
            h: (hsl.h + degrees) % 360,
            ..hsl
        }))
    };

    Ok(ColorHarmony {
        complementary: rotate(180),
        // -30° expressed as +330° to stay non-negative.
        analogous: [rotate(30), rotate(330)],
        triadic: [rotate(120), rotate(240)],
        split_complementary: [rotate(150), rotate(210)],
    })
}
