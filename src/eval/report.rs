//! Per-class performance report

use std::fmt;

use ndarray::ArrayView2;
use serde::{Serialize, Serializer};

use crate::curve::roc_auc;

use super::config::{ReportConfig, ReportMetric};
use super::confusion::{prevalence, ConfusionCounts};
use super::error::{EvalError, Result};

/// Sentinel rendered for omitted or undefined metrics
const NOT_DEFINED: &str = "Not Defined";

/// One report cell: a rounded value or the undefined sentinel
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MetricCell {
    /// Computed value, rounded to 3 decimals
    Value(f64),
    /// Metric omitted by configuration or undefined for this class
    NotDefined,
}

impl MetricCell {
    fn from_option(value: Option<f64>) -> Self {
        match value {
            Some(v) => MetricCell::Value(round3(v)),
            None => MetricCell::NotDefined,
        }
    }

    /// Numeric value, if defined
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        match self {
            MetricCell::Value(v) => Some(*v),
            MetricCell::NotDefined => None,
        }
    }

    /// Whether the cell holds a value
    #[must_use]
    pub fn is_defined(&self) -> bool {
        matches!(self, MetricCell::Value(_))
    }
}

impl fmt::Display for MetricCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricCell::Value(v) => write!(f, "{v:.3}"),
            MetricCell::NotDefined => write!(f, "{NOT_DEFINED}"),
        }
    }
}

impl Serialize for MetricCell {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            MetricCell::Value(v) => serializer.serialize_f64(*v),
            MetricCell::NotDefined => serializer.serialize_str(NOT_DEFINED),
        }
    }
}

/// One report row, keyed by class name
#[derive(Clone, Debug, Serialize)]
pub struct ClassRow {
    /// Class name
    pub label: String,
    /// True positives at the threshold
    pub tp: usize,
    /// True negatives at the threshold
    pub tn: usize,
    /// False positives at the threshold
    pub fp: usize,
    /// False negatives at the threshold
    #[serde(rename = "fn")]
    pub fn_: usize,
    pub accuracy: MetricCell,
    pub prevalence: MetricCell,
    pub sensitivity: MetricCell,
    pub specificity: MetricCell,
    pub ppv: MetricCell,
    pub npv: MetricCell,
    pub auc: MetricCell,
    pub f1: MetricCell,
    /// Decision threshold used for this class, rounded to 3 decimals
    pub threshold: f64,
}

impl ClassRow {
    /// Cell for a derived metric
    #[must_use]
    pub fn get(&self, metric: ReportMetric) -> &MetricCell {
        match metric {
            ReportMetric::Accuracy => &self.accuracy,
            ReportMetric::Prevalence => &self.prevalence,
            ReportMetric::Sensitivity => &self.sensitivity,
            ReportMetric::Specificity => &self.specificity,
            ReportMetric::Ppv => &self.ppv,
            ReportMetric::Npv => &self.npv,
            ReportMetric::Auc => &self.auc,
            ReportMetric::F1 => &self.f1,
        }
    }
}

/// Per-class performance report
///
/// Row order matches the `class_labels` order the report was built with.
#[derive(Clone, Debug, Default, Serialize)]
pub struct PerformanceReport {
    rows: Vec<ClassRow>,
}

impl PerformanceReport {
    /// All rows, in class order
    #[must_use]
    pub fn rows(&self) -> &[ClassRow] {
        &self.rows
    }

    /// Row for a class name
    #[must_use]
    pub fn row(&self, label: &str) -> Option<&ClassRow> {
        self.rows.iter().find(|r| r.label == label)
    }

    /// Class names in row order
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.label.as_str()).collect()
    }
}

impl fmt::Display for PerformanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label_width =
            self.rows.iter().map(|r| r.label.len()).max().unwrap_or(5).max(5);

        write!(f, "{:label_width$} {:>6} {:>6} {:>6} {:>6}", "", "TP", "TN", "FP", "FN")?;
        for metric in ReportMetric::ALL {
            write!(f, " {:>12}", metric.name())?;
        }
        writeln!(f, " {:>12}", "Threshold")?;

        for row in &self.rows {
            write!(
                f,
                "{:label_width$} {:>6} {:>6} {:>6} {:>6}",
                row.label, row.tp, row.tn, row.fp, row.fn_
            )?;
            for metric in ReportMetric::ALL {
                write!(f, " {:>12}", row.get(metric).to_string())?;
            }
            writeln!(f, " {:>12.3}", row.threshold)?;
        }

        Ok(())
    }
}

/// Build the per-class report over aligned matrices
///
/// `y` and `pred` are (samples x classes) with columns in `class_labels`
/// order. Per class, independently: predictions are binarized at the class
/// threshold, confusion counts are tallied, and each metric enabled in
/// `config` is computed; disabled metrics render as "Not Defined". AUC is
/// undefined for a class whose ground truth has no positive or no negative
/// samples.
///
/// # Errors
///
/// Returns an error on matrix shape mismatch or when the class label count
/// does not match the column count.
pub fn performance_report(
    y: ArrayView2<'_, f64>,
    pred: ArrayView2<'_, f64>,
    class_labels: &[&str],
    config: &ReportConfig,
) -> Result<PerformanceReport> {
    if y.dim() != pred.dim() {
        return Err(EvalError::ShapeMismatch { y: y.dim(), pred: pred.dim() });
    }
    if class_labels.len() != y.ncols() {
        return Err(EvalError::ClassCountMismatch {
            labels: class_labels.len(),
            columns: y.ncols(),
        });
    }

    let thresholds = config.resolved_thresholds(class_labels.len());

    let rows = class_labels
        .iter()
        .zip(thresholds.iter())
        .enumerate()
        .map(|(i, (&label, &threshold))| {
            let truth: Vec<f64> = y.column(i).to_vec();
            let scores: Vec<f64> = pred.column(i).to_vec();
            class_row(label, &truth, &scores, threshold, config)
        })
        .collect();

    Ok(PerformanceReport { rows })
}

fn class_row(
    label: &str,
    truth: &[f64],
    scores: &[f64],
    threshold: f64,
    config: &ReportConfig,
) -> ClassRow {
    let counts = ConfusionCounts::from_scores(truth, scores, threshold);

    let cell = |metric: ReportMetric, value: Option<f64>| {
        if config.computes(metric) {
            MetricCell::from_option(value)
        } else {
            MetricCell::NotDefined
        }
    };

    // AUC walks the full score column, so only compute it when enabled
    let auc = if config.computes(ReportMetric::Auc) {
        let bools: Vec<bool> = truth.iter().map(|&v| v > 0.5).collect();
        MetricCell::from_option(roc_auc(scores, &bools).ok())
    } else {
        MetricCell::NotDefined
    };

    ClassRow {
        label: label.to_string(),
        tp: counts.true_positives(),
        tn: counts.true_negatives(),
        fp: counts.false_positives(),
        fn_: counts.false_negatives(),
        accuracy: cell(ReportMetric::Accuracy, counts.accuracy()),
        prevalence: cell(ReportMetric::Prevalence, prevalence(truth)),
        sensitivity: cell(ReportMetric::Sensitivity, counts.sensitivity()),
        specificity: cell(ReportMetric::Specificity, counts.specificity()),
        ppv: cell(ReportMetric::Ppv, counts.ppv()),
        npv: cell(ReportMetric::Npv, counts.npv()),
        auc,
        f1: cell(ReportMetric::F1, counts.f1()),
        threshold: round3(threshold),
    }
}

fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}
