//! Percentile confidence intervals

use std::fmt;

use ndarray::ArrayView2;
use serde::Serialize;

use super::error::{Result, StatsError};

/// Percentiles of the reported confidence band
const LO_PERCENTILE: f64 = 5.0;
const HI_PERCENTILE: f64 = 95.0;

/// Mean with a percentile band, formatted as "mean (lo-hi)"
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ConfidenceInterval {
    /// Mean over runs
    pub mean: f64,
    /// Lower band edge (5th percentile)
    pub lo: f64,
    /// Upper band edge (95th percentile)
    pub hi: f64,
}

impl fmt::Display for ConfidenceInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} ({:.2}-{:.2})", self.mean, self.lo, self.hi)
    }
}

/// One labelled interval
///
/// `interval` is `None` when no run produced a finite value for the class.
#[derive(Clone, Debug, Serialize)]
pub struct IntervalRow {
    /// Class name
    pub label: String,
    /// Interval over the finite runs, if any
    pub interval: Option<ConfidenceInterval>,
}

/// Per-class confidence interval report
#[derive(Clone, Debug, Serialize)]
pub struct IntervalReport {
    rows: Vec<IntervalRow>,
}

impl IntervalReport {
    /// All rows, in class order
    #[must_use]
    pub fn rows(&self) -> &[IntervalRow] {
        &self.rows
    }

    /// Row for a class name
    #[must_use]
    pub fn row(&self, label: &str) -> Option<&IntervalRow> {
        self.rows.iter().find(|r| r.label == label)
    }
}

impl fmt::Display for IntervalReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label_width =
            self.rows.iter().map(|r| r.label.len()).max().unwrap_or(5).max(5);

        writeln!(f, "{:label_width$} {:>20}", "", "Mean AUC (CI 5%-95%)")?;
        for row in &self.rows {
            match &row.interval {
                Some(interval) => {
                    writeln!(f, "{:label_width$} {:>20}", row.label, interval.to_string())?;
                }
                None => writeln!(f, "{:label_width$} {:>20}", row.label, "Not Defined")?,
            }
        }
        Ok(())
    }
}

/// Linear-interpolation percentile of `values`, `q` in [0, 100]
///
/// Returns `None` for an empty slice. Non-finite values are the caller's
/// concern; [`interval_report`] filters them beforehand.
#[must_use]
pub fn percentile(values: &[f64], q: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let rank = (q.clamp(0.0, 100.0) / 100.0) * (sorted.len() - 1) as f64;
    let below = rank.floor() as usize;
    let above = rank.ceil() as usize;
    let weight = rank - below as f64;

    Some(sorted[below] + (sorted[above] - sorted[below]) * weight)
}

/// Summarize a (classes x runs) AUC matrix into per-class intervals
///
/// Each row yields the mean and the 5th/95th percentile band over its
/// finite entries; a row with no finite entry reports `None`.
///
/// # Errors
///
/// Returns an error if the matrix has zero runs or the label count does
/// not match the row count.
pub fn interval_report(
    runs: ArrayView2<'_, f64>,
    class_labels: &[&str],
) -> Result<IntervalReport> {
    if runs.ncols() == 0 {
        return Err(StatsError::NoRuns);
    }
    if class_labels.len() != runs.nrows() {
        return Err(StatsError::LabelCountMismatch {
            labels: class_labels.len(),
            rows: runs.nrows(),
        });
    }

    let rows = class_labels
        .iter()
        .enumerate()
        .map(|(i, &label)| {
            let finite: Vec<f64> =
                runs.row(i).iter().copied().filter(|v| v.is_finite()).collect();
            let interval = (!finite.is_empty()).then(|| ConfidenceInterval {
                mean: finite.iter().sum::<f64>() / finite.len() as f64,
                lo: percentile(&finite, LO_PERCENTILE).unwrap_or(f64::NAN),
                hi: percentile(&finite, HI_PERCENTILE).unwrap_or(f64::NAN),
            });
            IntervalRow { label: label.to_string(), interval }
        })
        .collect();

    Ok(IntervalReport { rows })
}
