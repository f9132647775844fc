//! RGB ↔ hex ↔ HSL conversions, luminance, and contrast.
//!
//! Hex strings are the canonical serialization at every boundary:
//! lowercase, 6 digits, `#`-prefixed. HSL components are integer-rounded
//! (hue in degrees, saturation/lightness in percent), which makes the
//! RGB→HSL→RGB round trip lossy by at most 1 per channel.

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, Result};

/// A color in HSL space with integer components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorHsl {
    /// Hue in degrees, `0..360`.
    pub h: u16,
    /// Saturation in percent, `0..=100`.
    pub s: u8,
    /// Lightness in percent, `0..=100`.
    pub l: u8,
}

/// Encode an RGB triple as a canonical hex string.
pub fn rgb_to_hex(rgb: [u8; 3]) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2])
}

/// Decode a hex color string into an RGB triple.
///
/// Accepts an optional `#` prefix and either case; anything other than
/// exactly 6 hex digits is rejected.
pub fn hex_to_rgb(hex: &str) -> Result<[u8; 3]> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(AnalysisError::InvalidHex(hex.to_string()));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|_| AnalysisError::InvalidHex(hex.to_string()))
    };
    Ok([channel(0..2)?, channel(2..4)?, channel(4..6)?])
}

/// Convert an RGB triple to HSL.
pub fn rgb_to_hsl(rgb: [u8; 3]) -> ColorHsl {
    let r = rgb[0] as f64 / 255.0;
    let g = rgb[1] as f64 / 255.0;
    let b = rgb[2] as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        // Achromatic.
        return ColorHsl {
            h: 0,
            s: 0,
            l: (l * 100.0).round() as u8,
        };
    }

    let delta = max - min;
    let s = if l > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    let h = if max == r {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    ColorHsl {
        h: (h * 60.0).round() as u16 % 360,
        s: (s * 100.0).round() as u8,
        l: (l * 100.0).round() as u8,
    }
}

/// Convert an HSL color back to RGB.
pub fn hsl_to_rgb(hsl: ColorHsl) -> [u8; 3] {
    let h = hsl.h as f64 / 360.0;
    let s = hsl.s as f64 / 100.0;
    let l = hsl.l as f64 / 100.0;

    if s == 0.0 {
        let v = (l * 255.0).round() as u8;
        return [v, v, v];
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    [
        (hue_to_rgb(p, q, h + 1.0 / 3.0) * 255.0).round() as u8,
        (hue_to_rgb(p, q, h) * 255.0).round() as u8,
        (hue_to_rgb(p, q, h - 1.0 / 3.0) * 255.0).round() as u8,
    ]
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// WCAG relative luminance of an RGB triple.
///
/// ```text
/// c <= 0.03928 → c / 12.92
/// c >  0.03928 → ((c + 0.055) / 1.055) ^ 2.4
///
/// L = 0.2126 R + 0.7152 G + 0.0722 B
/// ```
pub fn relative_luminance(rgb: [u8; 3]) -> f64 {
    let linear = |c: u8| {
        let c = c as f64 / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    0.2126 * linear(rgb[0]) + 0.7152 * linear(rgb[1]) + 0.0722 * linear(rgb[2])
}

/// WCAG contrast ratio between two hex colors. Symmetric, in `1.0..=21.0`.
pub fn contrast_ratio(a: &str, b: &str) -> Result<f64> {
    let lum_a = relative_luminance(hex_to_rgb(a)?);
    let lum_b = relative_luminance(hex_to_rgb(b)?);

    let lighter = lum_a.max(lum_b);
    let darker = lum_a.min(lum_b);
    Ok((lighter + 0.05) / (darker + 0.05))
}

/// Shift a hex color's lightness by `delta` percentage points, clamped
/// to `0..=100`.
pub fn adjust_brightness(hex: &str, delta: i32) -> Result<String> {
    let mut hsl = rgb_to_hsl(hex_to_rgb(hex)?);
    hsl.l = (hsl.l as i32 + delta).clamp(0, 100) as u8;
    Ok(rgb_to_hex(hsl_to_rgb(hsl)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::palette::{FromColor, Hsl, Srgb};

    #[test]
    fn test_hex_roundtrip_preserves_rgb() {
        // Stepped grid over the full cube; step 17 lands on both 0 and 255.
        for r in (0..=255u16).step_by(17) {
            for g in (0..=255u16).step_by(17) {
                for b in (0..=255u16).step_by(17) {
                    let rgb = [r as u8, g as u8, b as u8];
                    assert_eq!(hex_to_rgb(&rgb_to_hex(rgb)).unwrap(), rgb);
                }
            }
        }
    }

    #[test]
    fn test_hex_encoding_is_canonical() {
        assert_eq!(rgb_to_hex([255, 0, 170]), "#ff00aa");
    }

    #[test]
    fn test_hex_parse_accepts_prefix_and_case() {
        assert_eq!(hex_to_rgb("#FF00aa").unwrap(), [255, 0, 170]);
        assert_eq!(hex_to_rgb("ff00aa").unwrap(), [255, 0, 170]);
    }

    #[test]
    fn test_hex_parse_rejects_malformed_input() {
        for bad in ["", "#fff", "#ff00a", "#ff00aa0", "#ff00ag", "fff00aa"] {
            assert!(
                matches!(hex_to_rgb(bad), Err(AnalysisError::InvalidHex(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_hsl_roundtrip_within_one_per_channel() {
        for r in (0..=255u16).step_by(15) {
            for g in (0..=255u16).step_by(15) {
                for b in (0..=255u16).step_by(15) {
                    let rgb = [r as u8, g as u8, b as u8];
                    let back = hsl_to_rgb(rgb_to_hsl(rgb));
                    for ch in 0..3 {
                        assert!(
                            rgb[ch].abs_diff(back[ch]) <= 1,
                            "{rgb:?} -> {back:?} drifted more than 1 on channel {ch}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_hsl_known_values() {
        assert_eq!(rgb_to_hsl([255, 0, 0]), ColorHsl { h: 0, s: 100, l: 50 });
        assert_eq!(rgb_to_hsl([0, 255, 0]), ColorHsl { h: 120, s: 100, l: 50 });
        assert_eq!(rgb_to_hsl([0, 0, 255]), ColorHsl { h: 240, s: 100, l: 50 });
        assert_eq!(rgb_to_hsl([255, 255, 255]), ColorHsl { h: 0, s: 0, l: 100 });
    }

    #[test]
    fn test_hsl_agrees_with_palette_crate() {
        for rgb in [[200u8, 40, 40], [12, 200, 111], [90, 90, 200], [250, 250, 10]] {
            let ours = rgb_to_hsl(rgb);
            let reference = Hsl::from_color(Srgb::new(
                rgb[0] as f32 / 255.0,
                rgb[1] as f32 / 255.0,
                rgb[2] as f32 / 255.0,
            ));
            let ref_h = reference.hue.into_positive_degrees();
            assert!(
                (ours.h as f32 - ref_h).abs() < 1.0 || (ours.h as f32 - ref_h).abs() > 359.0,
                "hue mismatch for {rgb:?}: {} vs {ref_h}",
                ours.h
            );
            assert!((ours.s as f32 - reference.saturation * 100.0).abs() < 1.0);
            assert!((ours.l as f32 - reference.lightness * 100.0).abs() < 1.0);
        }
    }

    #[test]
    fn test_contrast_ratio_bounds() {
        let extremes = contrast_ratio("#000000", "#ffffff").unwrap();
        assert!((extremes - 21.0).abs() < 0.01);

        let same = contrast_ratio("#3366cc", "#3366cc").unwrap();
        assert!((same - 1.0).abs() < 1e-9);

        for (a, b) in [("#ff0000", "#00ff00"), ("#123456", "#fedcba")] {
            let ratio = contrast_ratio(a, b).unwrap();
            assert!((1.0..=21.0).contains(&ratio));
            let flipped = contrast_ratio(b, a).unwrap();
            assert!((ratio - flipped).abs() < 1e-12, "contrast must be symmetric");
        }
    }

    #[test]
    fn test_adjust_brightness_clamps_lightness() {
        assert_eq!(adjust_brightness("#808080", 200).unwrap(), "#ffffff");
        assert_eq!(adjust_brightness("#808080", -200).unwrap(), "#000000");
    }

    #[test]
    fn test_adjust_brightness_lightens() {
        let lighter = adjust_brightness("#404040", 20).unwrap();
        let before = rgb_to_hsl(hex_to_rgb("#404040").unwrap());
        let after = rgb_to_hsl(hex_to_rgb(&lighter).unwrap());
        assert_eq!(after.l, before.l + 20);
    }
}
