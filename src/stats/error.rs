//! Statistics error types

use thiserror::Error;

/// Statistics errors
#[derive(Debug, Error, PartialEq)]
pub enum StatsError {
    #[error("{labels} class labels for {rows} matrix rows")]
    LabelCountMismatch { labels: usize, rows: usize },

    #[error("No runs in AUC matrix")]
    NoRuns,

    #[error("Ground truth shape {y:?} != prediction shape {pred:?}")]
    ShapeMismatch { y: (usize, usize), pred: (usize, usize) },

    #[error("Sample fraction {0} outside (0, 1]")]
    InvalidFraction(f64),
}

/// Result type for statistics operations
pub type Result<T> = std::result::Result<T, StatsError>;
