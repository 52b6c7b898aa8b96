//! Evaluation error types

use thiserror::Error;

/// Evaluation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    #[error("Ground truth shape {y:?} != prediction shape {pred:?}")]
    ShapeMismatch { y: (usize, usize), pred: (usize, usize) },

    #[error("{labels} class labels for {columns} matrix columns")]
    ClassCountMismatch { labels: usize, columns: usize },
}

/// Result type for evaluation operations
pub type Result<T> = std::result::Result<T, EvalError>;
