//! Bootstrap AUC resampling

use ndarray::{Array2, ArrayView2};
use rand::Rng;

use crate::curve::roc_auc;

use super::error::{Result, StatsError};

/// Redraws allowed before a replicate is recorded as NaN
const MAX_REDRAWS: usize = 100;

/// Bootstrap per-class AUC replicates
///
/// Resamples row indices with replacement (`sample_fraction` of the sample
/// count, at least one) and computes one AUC per class per run, producing
/// the (classes x runs) matrix consumed by
/// [`interval_report`](super::interval_report). A resample whose
/// ground-truth column is single-valued is redrawn; after [`MAX_REDRAWS`]
/// attempts the replicate is recorded as NaN, which the interval report
/// skips.
///
/// The RNG is caller-supplied so runs are reproducible from an explicit
/// seed.
///
/// # Errors
///
/// Returns an error on matrix shape mismatch, an empty matrix, or a sample
/// fraction outside (0, 1].
pub fn bootstrap_auc<R: Rng>(
    y: ArrayView2<'_, f64>,
    pred: ArrayView2<'_, f64>,
    n_runs: usize,
    sample_fraction: f64,
    rng: &mut R,
) -> Result<Array2<f64>> {
    if y.dim() != pred.dim() {
        return Err(StatsError::ShapeMismatch { y: y.dim(), pred: pred.dim() });
    }
    if y.nrows() == 0 {
        return Err(StatsError::NoRuns);
    }
    if !(sample_fraction > 0.0 && sample_fraction <= 1.0) {
        return Err(StatsError::InvalidFraction(sample_fraction));
    }

    let n_samples = y.nrows();
    let n_classes = y.ncols();
    let sample_len = ((n_samples as f64 * sample_fraction).round() as usize).max(1);

    let mut aucs = Array2::from_elem((n_classes, n_runs), f64::NAN);

    for class in 0..n_classes {
        let truth: Vec<f64> = y.column(class).to_vec();
        let scores: Vec<f64> = pred.column(class).to_vec();

        for run in 0..n_runs {
            aucs[[class, run]] = replicate_auc(&truth, &scores, sample_len, rng);
        }
    }

    Ok(aucs)
}

fn replicate_auc<R: Rng>(truth: &[f64], scores: &[f64], sample_len: usize, rng: &mut R) -> f64 {
    for _ in 0..MAX_REDRAWS {
        let mut sample_truth = Vec::with_capacity(sample_len);
        let mut sample_scores = Vec::with_capacity(sample_len);
        for _ in 0..sample_len {
            let idx = rng.gen_range(0..truth.len());
            sample_truth.push(truth[idx] > 0.5);
            sample_scores.push(scores[idx]);
        }

        // Single-valued resample: redraw instead of failing the run
        let positives = sample_truth.iter().filter(|&&l| l).count();
        if positives == 0 || positives == sample_truth.len() {
            continue;
        }

        if let Ok(auc) = roc_auc(&sample_scores, &sample_truth) {
            return auc;
        }
    }
    f64::NAN
}
