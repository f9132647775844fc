//! Numeric configuration surface for the analysis passes.

use serde::{Deserialize, Serialize};

/// Tunable parameters with the defaults callers start from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisParams {
    /// Number of palette clusters to extract. Default: 5.
    pub palette_size: usize,
    /// Per-channel tolerance when matching pixels against the background
    /// estimate for auto-crop. Default: 10.
    pub crop_tolerance: u8,
    /// Padding around detected content, as a percentage of each image
    /// dimension. Default: 5.0.
    pub padding_percent: f32,
    /// Per-channel tolerance for background removal. Default: 30.
    pub background_tolerance: u8,
    /// Seed for the clustering RNG. `None` draws fresh entropy per call,
    /// making palettes non-reproducible across runs.
    pub seed: Option<u64>,
}

impl Default for AnalysisParams {
    fn default() -> Self {
        Self {
            palette_size: 5,
            crop_tolerance: 10,
            padding_percent: 5.0,
            background_tolerance: 30,
            seed: None,
        }
    }
}
