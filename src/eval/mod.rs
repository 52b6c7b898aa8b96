//! Per-class performance metrics
//!
//! Builds the per-class report a multi-label classification study tables:
//! confusion counts at a decision threshold, accuracy, prevalence,
//! sensitivity/specificity, PPV/NPV, AUC and F1, with an explicit
//! compute/omit configuration per metric.

mod config;
mod confusion;
mod error;
mod report;


// Re-export all public types
pub use config::{ReportConfig, ReportMetric, DEFAULT_THRESHOLD};
pub use confusion::{prevalence, ConfusionCounts};
pub use error::{EvalError, Result};
pub use report::{performance_report, ClassRow, MetricCell, PerformanceReport};
