//! Thresholded binary confusion counts

/// Confusion counts for one class at a decision threshold
///
/// Scores at or above the threshold are treated as positive calls; ground
/// truth values > 0.5 are treated as positive labels. Derived rates return
/// `None` when their denominator is zero, so degenerate classes surface as
/// undefined instead of NaN.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConfusionCounts {
    tp: usize,
    tn: usize,
    fp: usize,
    fn_: usize,
}

impl ConfusionCounts {
    /// Count outcomes for a ground-truth column and a score column
    ///
    /// Truncates to the shorter of the two columns; the report layer
    /// validates shapes before calling.
    #[must_use]
    pub fn from_scores(truth: &[f64], scores: &[f64], threshold: f64) -> Self {
        let mut counts = Self::default();
        for (&y, &score) in truth.iter().zip(scores.iter()) {
            let actual = y > 0.5;
            let called = score >= threshold;
            match (actual, called) {
                (true, true) => counts.tp += 1,
                (false, false) => counts.tn += 1,
                (false, true) => counts.fp += 1,
                (true, false) => counts.fn_ += 1,
            }
        }
        counts
    }

    /// True positives
    #[must_use]
    pub fn true_positives(&self) -> usize {
        self.tp
    }

    /// True negatives
    #[must_use]
    pub fn true_negatives(&self) -> usize {
        self.tn
    }

    /// False positives
    #[must_use]
    pub fn false_positives(&self) -> usize {
        self.fp
    }

    /// False negatives
    #[must_use]
    pub fn false_negatives(&self) -> usize {
        self.fn_
    }

    /// Total number of samples
    #[must_use]
    pub fn total(&self) -> usize {
        self.tp + self.tn + self.fp + self.fn_
    }

    /// Fraction of correct calls: (TP + TN) / total
    #[must_use]
    pub fn accuracy(&self) -> Option<f64> {
        ratio(self.tp + self.tn, self.total())
    }

    /// True positive rate: TP / (TP + FN)
    #[must_use]
    pub fn sensitivity(&self) -> Option<f64> {
        ratio(self.tp, self.tp + self.fn_)
    }

    /// True negative rate: TN / (TN + FP)
    #[must_use]
    pub fn specificity(&self) -> Option<f64> {
        ratio(self.tn, self.tn + self.fp)
    }

    /// Positive predictive value: TP / (TP + FP)
    #[must_use]
    pub fn ppv(&self) -> Option<f64> {
        ratio(self.tp, self.tp + self.fp)
    }

    /// Negative predictive value: TN / (TN + FN)
    #[must_use]
    pub fn npv(&self) -> Option<f64> {
        ratio(self.tn, self.tn + self.fn_)
    }

    /// F1 score: 2TP / (2TP + FP + FN)
    #[must_use]
    pub fn f1(&self) -> Option<f64> {
        ratio(2 * self.tp, 2 * self.tp + self.fp + self.fn_)
    }
}

/// Fraction of positive labels in a ground-truth column
#[must_use]
pub fn prevalence(truth: &[f64]) -> Option<f64> {
    let pos = truth.iter().filter(|&&y| y > 0.5).count();
    ratio(pos, truth.len())
}

fn ratio(numerator: usize, denominator: usize) -> Option<f64> {
    if denominator == 0 {
        None
    } else {
        Some(numerator as f64 / denominator as f64)
    }
}
