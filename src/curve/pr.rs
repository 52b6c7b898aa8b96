//! Precision-recall curve and average precision

use super::error::{CurveError, Result};

/// A single point on the precision-recall curve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrPoint {
    /// Score threshold at which this point is reached
    pub threshold: f64,
    /// Precision: TP / (TP + FP)
    pub precision: f64,
    /// Recall: TP / (TP + FN)
    pub recall: f64,
}

/// Precision-recall curve with its average precision
#[derive(Debug, Clone)]
pub struct PrCurve {
    /// Points from recall 0 to recall 1, one per distinct score
    pub points: Vec<PrPoint>,
    /// Average precision: step-wise sum of precision x recall increments
    pub average_precision: f64,
}

/// Compute the precision-recall curve from scores and binary labels
///
/// Unlike the ROC curve, an all-positive ground truth is computable here
/// (precision is 1 at every threshold), so only positives are required.
///
/// # Errors
///
/// Returns an error if the inputs are empty, have different lengths, or
/// the labels contain no positive samples.
pub fn pr_curve(scores: &[f64], labels: &[bool]) -> Result<PrCurve> {
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

    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| {
        scores[b].partial_cmp(&scores[a]).unwrap_or(std::cmp::Ordering::Equal)
    });

    let pos = pos as f64;
    let mut points = vec![PrPoint { threshold: f64::INFINITY, precision: 1.0, recall: 0.0 }];
    let mut average_precision = 0.0;
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

        let point = PrPoint {
            threshold,
            precision: tp as f64 / (tp + fp) as f64,
            recall: tp as f64 / pos,
        };
        let prev_recall = points[points.len() - 1].recall;
        average_precision += (point.recall - prev_recall) * point.precision;
        points.push(point);
    }

    Ok(PrCurve { points, average_precision })
}

/// Average precision only
///
/// # Errors
///
/// Same failure modes as [`pr_curve`].
pub fn average_precision(scores: &[f64], labels: &[bool]) -> Result<f64> {
    Ok(pr_curve(scores, labels)?.average_precision)
}
