//! Evaluation helpers for multi-label chest X-ray classifiers
//!
//! Provides the glue between a tabular dataset of X-ray images and the
//! metrics a radiology classification study reports:
//!
//! - `dataset`: per-index access from a sample table to an
//!   (image tensor, label vector) pair with a configurable transform
//! - `eval`: per-class performance report (confusion counts, accuracy,
//!   sensitivity/specificity, PPV/NPV, AUC, F1) at configurable thresholds
//! - `curve`: ROC and precision-recall curves with typed per-class
//!   outcomes and a shared terminal chart
//! - `stats`: bootstrap AUC replicates and percentile confidence intervals
//! - `imagenet`: top-k label formatting for ImageNet-style predictions
//!
//! # Example
//!
//! ```ignore
//! use evaluar::eval::{performance_report, ReportConfig};
//!
//! let config = ReportConfig::all();
//! let report = performance_report(y.view(), pred.view(), &labels, &config)?;
//! println!("{report}");
//! ```

pub mod curve;
pub mod dataset;
pub mod eval;
pub mod imagenet;
pub mod stats;

// Re-export the main entry points
pub use curve::{curve_set, CurveChart, CurveKind, CurveSet};
pub use dataset::{SampleTable, Transform, XRayDataset};
pub use eval::{performance_report, MetricCell, PerformanceReport, ReportConfig, ReportMetric};
pub use stats::{interval_report, ConfidenceInterval, IntervalReport};
