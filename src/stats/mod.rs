//! Bootstrap statistics
//!
//! Confidence bands for per-class AUC estimates:
//!
//! - Bootstrap resampling producing a (classes x runs) AUC matrix, driven
//!   by a caller-supplied seeded RNG
//! - Linear-interpolation percentiles
//! - Mean and 5th/95th percentile interval report per class

mod bootstrap;
mod error;
mod interval;

#[cfg(test)]
mod tests;

// Re-export all public types
pub use bootstrap::bootstrap_auc;
pub use error::{Result, StatsError};
pub use interval::{interval_report, percentile, ConfidenceInterval, IntervalReport, IntervalRow};
