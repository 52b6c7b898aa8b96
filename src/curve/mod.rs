//! ROC and precision-recall curves
//!
//! Per-class curve computation over aligned ground-truth / prediction
//! matrices with typed partial-failure outcomes:
//!
//! - ROC curve walk with trapezoidal AUC
//! - Precision-recall curve with average precision
//! - Per-class `Computed` / `Skipped` outcomes (one degenerate class never
//!   aborts the whole figure)
//! - Shared terminal chart with legend

mod chart;
mod error;
mod outcome;
mod pr;
mod roc;

#[cfg(test)]
mod tests;

// Re-export all public types
pub use chart::CurveChart;
pub use error::{CurveError, Result};
pub use outcome::{curve_set, ClassCurve, CurveKind, CurveOutcome, CurveSet};
pub use pr::{average_precision, pr_curve, PrCurve, PrPoint};
pub use roc::{roc_auc, roc_curve, RocCurve, RocPoint};
