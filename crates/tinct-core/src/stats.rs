//! Channel statistics and image character classification.
//!
//! Classifies an image into coarse brightness/saturation/warmth/contrast
//! buckets from per-channel means and standard deviations. The
//! saturation and contrast buckets both read the channel spread with
//! different cut points — the spread is the only texture signal this
//! pass keeps, which is a deliberate simplification.

use serde::{Deserialize, Serialize};

use crate::buffer::PixelBuffer;

/// Per-channel mean and standard deviation over a buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelStats {
    /// Mean per RGB channel, `0..=255`.
    pub mean: [f64; 3],
    /// Population standard deviation per RGB channel.
    pub stddev: [f64; 3],
}

impl ChannelStats {
    /// Compute channel statistics. `None` for an empty buffer.
    pub fn compute(buffer: &PixelBuffer) -> Option<Self> {
        let n = buffer.len() as f64;
        if n < 1.0 {
            return None;
        }

        let mut sum = [0.0_f64; 3];
        let mut sum_sq = [0.0_f64; 3];
        for px in &buffer.pixels {
            for ch in 0..3 {
                let v = px[ch] as f64;
                sum[ch] += v;
                sum_sq[ch] += v * v;
            }
        }

        let mut mean = [0.0_f64; 3];
        let mut stddev = [0.0_f64; 3];
        for ch in 0..3 {
            mean[ch] = sum[ch] / n;
            let variance = (sum_sq[ch] / n) - (mean[ch] * mean[ch]);
            stddev[ch] = variance.max(0.0).sqrt();
        }

        Some(Self { mean, stddev })
    }
}

/// Overall brightness bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Brightness {
    Dark,
    Medium,
    Light,
}

/// Saturation bucket, proxied by channel spread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaturationLevel {
    Low,
    Medium,
    High,
}

/// Warmth bucket from the red/blue channel balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Warmth {
    Cool,
    Neutral,
    Warm,
}

/// Contrast bucket, proxied by channel spread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContrastLevel {
    Low,
    Medium,
    High,
}

/// Coarse character classification of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorCharacter {
    pub brightness: Brightness,
    pub saturation: SaturationLevel,
    pub warmth: Warmth,
    pub contrast: ContrastLevel,
}

impl ColorCharacter {
    /// The graceful-degradation default when no statistics are available.
    pub const fn neutral() -> Self {
        Self {
            brightness: Brightness::Medium,
            saturation: SaturationLevel::Medium,
            warmth: Warmth::Neutral,
            contrast: ContrastLevel::Medium,
        }
    }
}

/// Classify channel statistics into character buckets.
pub fn classify(stats: &ChannelStats) -> ColorCharacter {
    let brightness_mean = (stats.mean[0] + stats.mean[1] + stats.mean[2]) / 3.0;
    let brightness = if brightness_mean < 85.0 {
        Brightness::Dark
    } else if brightness_mean > 170.0 {
        Brightness::Light
    } else {
        Brightness::Medium
    };

    let spread = (stats.stddev[0] + stats.stddev[1] + stats.stddev[2]) / 3.0;
    let saturation = if spread < 30.0 {
        SaturationLevel::Low
    } else if spread > 60.0 {
        SaturationLevel::High
    } else {
        SaturationLevel::Medium
    };

    // IEEE division semantics stand in for edge handling: r/0 = ∞ reads
    // warm, 0/0 = NaN fails both comparisons and reads neutral.
    let warmth_ratio = stats.mean[0] / stats.mean[2];
    let warmth = if warmth_ratio < 0.9 {
        Warmth::Cool
    } else if warmth_ratio > 1.1 {
        Warmth::Warm
    } else {
        Warmth::Neutral
    };

    let contrast = if spread < 40.0 {
        ContrastLevel::Low
    } else if spread > 80.0 {
        ContrastLevel::High
    } else {
        ContrastLevel::Medium
    };

    ColorCharacter {
        brightness,
        saturation,
        warmth,
        contrast,
    }
}

/// Classify a buffer directly, degrading to [`ColorCharacter::neutral`]
/// when statistics cannot be computed.
pub fn analyze(buffer: &PixelBuffer) -> ColorCharacter {
    match ChannelStats::compute(buffer) {
        Some(stats) => classify(&stats),
        None => ColorCharacter::neutral(),
    }
}
