//! Per-class curve outcomes

use ndarray::ArrayView2;

use super::error::{CurveError, Result};
use super::pr::pr_curve;
use super::roc::roc_curve;

/// Which curve family a set was computed for
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CurveKind {
    /// True-positive rate vs false-positive rate; summary score is AUC
    Roc,
    /// Precision vs recall; summary score is average precision
    PrecisionRecall,
}

impl CurveKind {
    /// Figure title
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            CurveKind::Roc => "ROC curve",
            CurveKind::PrecisionRecall => "Precision-Recall curve",
        }
    }

    /// Axis labels as (x, y)
    #[must_use]
    pub fn axis_labels(&self) -> (&'static str, &'static str) {
        match self {
            CurveKind::Roc => ("False positive rate", "True positive rate"),
            CurveKind::PrecisionRecall => ("Recall", "Precision"),
        }
    }
}

/// A computed curve for one class
#[derive(Debug, Clone)]
pub struct ClassCurve {
    /// Class name, used as the legend label
    pub label: String,
    /// Curve points as (x, y): (FPR, TPR) for ROC, (recall, precision) for PR
    pub points: Vec<(f64, f64)>,
    /// Summary score: AUC for ROC, average precision for PR
    pub score: f64,
}

/// Outcome of curve computation for one class
///
/// A class whose ground-truth column is degenerate is skipped with a typed
/// reason instead of aborting the whole figure.
#[derive(Debug, Clone)]
pub enum CurveOutcome {
    /// Curve computed successfully
    Computed(ClassCurve),
    /// Curve could not be computed for this class
    Skipped {
        /// Class name
        label: String,
        /// Why the curve was skipped
        reason: CurveError,
    },
}

/// All per-class outcomes for one figure
#[derive(Debug, Clone)]
pub struct CurveSet {
    kind: CurveKind,
    outcomes: Vec<CurveOutcome>,
}

impl CurveSet {
    /// Curve family of this set
    #[must_use]
    pub fn kind(&self) -> CurveKind {
        self.kind
    }

    /// All outcomes, in class order
    #[must_use]
    pub fn outcomes(&self) -> &[CurveOutcome] {
        &self.outcomes
    }

    /// Computed curves only, in class order
    pub fn computed(&self) -> impl Iterator<Item = &ClassCurve> {
        self.outcomes.iter().filter_map(|o| match o {
            CurveOutcome::Computed(curve) => Some(curve),
            CurveOutcome::Skipped { .. } => None,
        })
    }

    /// Summary scores (AUC / average precision) of computed classes only
    #[must_use]
    pub fn aucs(&self) -> Vec<f64> {
        self.computed().map(|c| c.score).collect()
    }

    /// Skipped classes with their reasons
    #[must_use]
    pub fn skipped(&self) -> Vec<(&str, &CurveError)> {
        self.outcomes
            .iter()
            .filter_map(|o| match o {
                CurveOutcome::Skipped { label, reason } => Some((label.as_str(), reason)),
                CurveOutcome::Computed(_) => None,
            })
            .collect()
    }
}

/// Compute one curve per class over aligned matrices
///
/// `y` and `pred` are (samples x classes) with columns in `class_labels`
/// order; ground-truth values > 0.5 count as positive. Per-class failures
/// become `Skipped` outcomes; partial results are expected.
///
/// # Errors
///
/// Returns an error only for structural problems: matrix shape mismatch or
/// a class label count that does not match the column count.
pub fn curve_set(
    y: ArrayView2<'_, f64>,
    pred: ArrayView2<'_, f64>,
    class_labels: &[&str],
    kind: CurveKind,
) -> Result<CurveSet> {
    if y.dim() != pred.dim() {
        return Err(CurveError::ShapeMismatch { y: y.dim(), pred: pred.dim() });
    }
    if class_labels.len() != y.ncols() {
        return Err(CurveError::ClassCountMismatch {
            labels: class_labels.len(),
            columns: y.ncols(),
        });
    }

    let outcomes = class_labels
        .iter()
        .enumerate()
        .map(|(i, &label)| {
            let truth: Vec<bool> = y.column(i).iter().map(|&v| v > 0.5).collect();
            let scores: Vec<f64> = pred.column(i).to_vec();
            class_outcome(label, &scores, &truth, kind)
        })
        .collect();

    Ok(CurveSet { kind, outcomes })
}

fn class_outcome(label: &str, scores: &[f64], truth: &[bool], kind: CurveKind) -> CurveOutcome {
    let computed = match kind {
        CurveKind::Roc => roc_curve(scores, truth).map(|c| ClassCurve {
            label: label.to_string(),
            points: c.points.iter().map(|p| (p.fpr, p.tpr)).collect(),
            score: c.auc,
        }),
        CurveKind::PrecisionRecall => pr_curve(scores, truth).map(|c| ClassCurve {
            label: label.to_string(),
            points: c.points.iter().map(|p| (p.recall, p.precision)).collect(),
            score: c.average_precision,
        }),
    };

    match computed {
        Ok(curve) => CurveOutcome::Computed(curve),
        Err(reason) => CurveOutcome::Skipped { label: label.to_string(), reason },
    }
}
