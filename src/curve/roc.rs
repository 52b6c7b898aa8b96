//! ROC curve and AUC

use super::error::{CurveError, Result};

/// A single point on the ROC curve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RocPoint {
    /// Score threshold at which this point is reached
    pub threshold: f64,
    /// False positive rate: FP / (FP + TN)
    pub fpr: f64,
    /// True positive rate: TP / (TP + FN)
    pub tpr: f64,
}

/// ROC curve with its area under the curve
#[derive(Debug, Clone)]
pub struct RocCurve {
    /// Points from (0, 0) to (1, 1), one per distinct score
    pub points: Vec<RocPoint>,
    /// Area under the curve, trapezoidal rule
    pub auc: f64,
}

/// Compute the ROC curve from continuous scores and binary labels
///
/// Walks thresholds in descending score order, emitting one (FPR, TPR)
/// point per distinct score. Tied scores collapse into a single point.
///
/// # Errors
///
/// Returns an error if the inputs are empty, have different lengths, or
/// the labels contain no positive or no negative samples.
pub fn roc_curve(scores: &[f64], labels: &[bool]) -> Result<RocCurve> {
    let order = sorted_descending(scores, labels)?;

    let pos = labels.iter().filter(|&&l| l).count() as f64;
    let neg = labels.len() as f64 - pos;

    let mut points = vec![RocPoint { threshold: f64::INFINITY, fpr: 0.0, tpr: 0.0 }];
    let mut auc = 0.0;
    let (mut tp, mut fp) = (0usize, 0usize);

    let mut i = 0;
    while i < order.len() {
        let threshold = scores[order[i]];
        while i < order.len() && scores[order[i]] == threshold {
            if labels[order[i]] {
                tp += 1;
            } else {
                fp += 1;
            }
            i += 1;
        }

        let point = RocPoint { threshold, fpr: fp as f64 / neg, tpr: tp as f64 / pos };
        let prev = points[points.len() - 1];
        auc += (point.fpr - prev.fpr) * (point.tpr + prev.tpr) / 2.0;
        points.push(point);
    }

    Ok(RocCurve { points, auc })
}

/// Area under the ROC curve
///
/// # Errors
///
/// Same failure modes as [`roc_curve`].
pub fn roc_auc(scores: &[f64], labels: &[bool]) -> Result<f64> {
    Ok(roc_curve(scores, labels)?.auc)
}

/// Validate inputs and return sample indices sorted by descending score
fn sorted_descending(scores: &[f64], labels: &[bool]) -> Result<Vec<usize>> {
    if scores.is_empty() {
        return Err(CurveError::EmptyInput);
    }
    if scores.len() != labels.len() {
        return Err(CurveError::LengthMismatch { scores: scores.len(), labels: labels.len() });
    }

    let pos = labels.iter().filter(|&&l| l).count();
    if pos == 0 {
        return Err(CurveError::NoPositiveSamples);
    }
    if pos == labels.len() {
        return Err(CurveError::NoNegativeSamples);
    }

    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| {
        scores[b].partial_cmp(&scores[a]).unwrap_or(std::cmp::Ordering::Equal)
    });
    Ok(order)
}
