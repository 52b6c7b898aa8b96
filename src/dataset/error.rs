//! Dataset error types

use thiserror::Error;

/// Dataset errors
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Sample index {index} out of range for table with {len} rows")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Column not found: {0}")]
    MissingColumn(String),

    #[error("Row has {got} cells, table has {expected} columns")]
    RowArity { expected: usize, got: usize },

    #[error("Cell at row {row}, column {column} is not numeric")]
    NonNumericCell { row: usize, column: String },

    #[error("Cell at row {row}, column {column} is not a valid image id")]
    InvalidImageId { row: usize, column: String },

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type for dataset operations
pub type Result<T> = std::result::Result<T, DatasetError>;
