//! Report configuration

use serde::{Deserialize, Serialize};

/// Decision threshold used when no valid per-class list is supplied
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// Derived metrics the report can compute
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportMetric {
    /// Fraction of correct calls at the threshold
    Accuracy,
    /// Fraction of positive ground-truth labels
    Prevalence,
    /// True positive rate
    Sensitivity,
    /// True negative rate
    Specificity,
    /// Positive predictive value
    Ppv,
    /// Negative predictive value
    Npv,
    /// Area under the ROC curve (threshold independent)
    Auc,
    /// Harmonic mean of PPV and sensitivity
    F1,
}

impl ReportMetric {
    /// Every derived metric, in report column order
    pub const ALL: [ReportMetric; 8] = [
        ReportMetric::Accuracy,
        ReportMetric::Prevalence,
        ReportMetric::Sensitivity,
        ReportMetric::Specificity,
        ReportMetric::Ppv,
        ReportMetric::Npv,
        ReportMetric::Auc,
        ReportMetric::F1,
    ];

    /// Report column header
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            ReportMetric::Accuracy => "Accuracy",
            ReportMetric::Prevalence => "Prevalence",
            ReportMetric::Sensitivity => "Sensitivity",
            ReportMetric::Specificity => "Specificity",
            ReportMetric::Ppv => "PPV",
            ReportMetric::Npv => "NPV",
            ReportMetric::Auc => "AUC",
            ReportMetric::F1 => "F1",
        }
    }
}

/// Which derived metrics to compute and at which thresholds
///
/// Confusion counts and the threshold column are always reported. Each
/// derived metric is either computed or omitted explicitly; an omitted
/// metric renders as the "Not Defined" sentinel, never as zero.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    metrics: Vec<ReportMetric>,
    thresholds: Option<Vec<f64>>,
}

impl ReportConfig {
    /// Confusion counts only, every derived metric omitted
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute every derived metric
    #[must_use]
    pub fn all() -> Self {
        Self { metrics: ReportMetric::ALL.to_vec(), thresholds: None }
    }

    /// Enable one derived metric
    #[must_use]
    pub fn with_metric(mut self, metric: ReportMetric) -> Self {
        if !self.metrics.contains(&metric) {
            self.metrics.push(metric);
        }
        self
    }

    /// Supply per-class decision thresholds
    ///
    /// A list whose length does not match the class count is replaced by
    /// [`DEFAULT_THRESHOLD`] for every class at report time.
    #[must_use]
    pub fn with_thresholds(mut self, thresholds: Vec<f64>) -> Self {
        self.thresholds = Some(thresholds);
        self
    }

    /// Whether a metric is enabled
    #[must_use]
    pub fn computes(&self, metric: ReportMetric) -> bool {
        self.metrics.contains(&metric)
    }

    /// Effective per-class thresholds for `n_classes` classes
    #[must_use]
    pub fn resolved_thresholds(&self, n_classes: usize) -> Vec<f64> {
        match &self.thresholds {
            Some(list) if list.len() == n_classes => list.clone(),
            _ => vec![DEFAULT_THRESHOLD; n_classes],
        }
    }
}
