//! Curve error types

use thiserror::Error;

/// Curve computation errors
///
/// Also used as the skip reason in per-class outcomes, so the variants are
/// comparable in tests.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CurveError {
    #[error("Empty input")]
    EmptyInput,

    #[error("Scores length {scores} != labels length {labels}")]
    LengthMismatch { scores: usize, labels: usize },

    #[error("No positive samples in ground truth")]
    NoPositiveSamples,

    #[error("No negative samples in ground truth")]
    NoNegativeSamples,

    #[error("Ground truth shape {y:?} != prediction shape {pred:?}")]
    ShapeMismatch { y: (usize, usize), pred: (usize, usize) },

    #[error("{labels} class labels for {columns} matrix columns")]
    ClassCountMismatch { labels: usize, columns: usize },
}

/// Result type for curve operations
pub type Result<T> = std::result::Result<T, CurveError>;
