//! Error taxonomy for the analysis core.

/// Errors surfaced to callers.
///
/// Pure numeric paths never fail; only structurally invalid input
/// (malformed hex strings, empty or mis-sized buffers) and the explicit
/// no-content case reach this type.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// The string is not a 6-digit hex color (optionally `#`-prefixed).
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),

    /// An operation that requires pixels received none.
    #[error("pixel buffer is empty")]
    EmptyBuffer,

    /// The raw pixel data does not match the declared dimensions.
    #[error("pixel data holds {actual} pixels but {width}x{height} needs {expected}")]
    DimensionMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// Auto-crop found no pixel distinguishable from the background.
    #[error("no content distinguishable from the background estimate")]
    NoContentDetected,
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
