//! X-ray dataset adapter
//!
//! Maps rows of a sample table to (image tensor, label vector) pairs:
//!
//! - In-memory column-labelled sample table
//! - Decode + resize + tensor conversion transform pipeline
//! - Per-index access with typed errors, one decode per access

mod error;
mod table;
mod transform;
mod xray;


// Re-export all public types
pub use error::{DatasetError, Result};
pub use table::{Cell, SampleTable};
pub use transform::{ColorMode, Transform};
pub use xray::XRayDataset;
