//! Statistics module tests

use approx::assert_relative_eq;
use ndarray::{array, Array2};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::*;

#[test]
fn percentile_of_constant_array_is_the_constant() {
    let values = vec![0.8; 100];
    assert_relative_eq!(percentile(&values, 5.0).unwrap(), 0.8);
    assert_relative_eq!(percentile(&values, 95.0).unwrap(), 0.8);
}

#[test]
fn percentile_interpolates_linearly() {
    let values = [1.0, 2.0, 3.0, 4.0, 5.0];
    assert_relative_eq!(percentile(&values, 0.0).unwrap(), 1.0);
    assert_relative_eq!(percentile(&values, 50.0).unwrap(), 3.0);
    assert_relative_eq!(percentile(&values, 100.0).unwrap(), 5.0);
    assert_relative_eq!(percentile(&values, 25.0).unwrap(), 2.0);
}

#[test]
fn percentile_of_empty_is_none() {
    assert_eq!(percentile(&[], 50.0), None);
}

#[test]
fn constant_runs_report_flat_band() {
    let runs = Array2::from_elem((1, 100), 0.8);
    let report = interval_report(runs.view(), &["Cardiomegaly"]).unwrap();

    let interval = report.rows()[0].interval.unwrap();
    assert_relative_eq!(interval.mean, 0.8);
    assert_eq!(interval.to_string(), "0.80 (0.80-0.80)");

    let table = report.to_string();
    assert!(table.contains("Mean AUC (CI 5%-95%)"));
    assert!(table.contains("0.80 (0.80-0.80)"));
}

#[test]
fn nan_runs_are_skipped_when_averaging() {
    let runs = array![[0.7, f64::NAN, 0.9, f64::NAN]];
    let report = interval_report(runs.view(), &["Edema"]).unwrap();

    let interval = report.rows()[0].interval.unwrap();
    assert_relative_eq!(interval.mean, 0.8);
}

#[test]
fn all_nan_row_reports_none() {
    let runs = array![[f64::NAN, f64::NAN], [0.6, 0.8]];
    let report = interval_report(runs.view(), &["Edema", "Effusion"]).unwrap();

    assert!(report.rows()[0].interval.is_none());
    assert!(report.rows()[1].interval.is_some());
    assert!(report.to_string().contains("Not Defined"));
}

#[test]
fn label_count_mismatch_is_an_error() {
    let runs = Array2::from_elem((2, 10), 0.8);
    let err = interval_report(runs.view(), &["only-one"]).unwrap_err();
    assert_eq!(err, StatsError::LabelCountMismatch { labels: 1, rows: 2 });
}

#[test]
fn zero_runs_is_an_error() {
    let runs = Array2::<f64>::zeros((1, 0));
    assert_eq!(interval_report(runs.view(), &["a"]).unwrap_err(), StatsError::NoRuns);
}

#[test]
fn bootstrap_shape_and_range() {
    let y = array![[1.0, 0.0], [0.0, 1.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0], [0.0, 0.0]];
    let pred = array![
        [0.9, 0.2],
        [0.1, 0.8],
        [0.8, 0.3],
        [0.2, 0.9],
        [0.7, 0.6],
        [0.3, 0.4]
    ];

    let mut rng = StdRng::seed_from_u64(42);
    let aucs = bootstrap_auc(y.view(), pred.view(), 25, 1.0, &mut rng).unwrap();

    assert_eq!(aucs.dim(), (2, 25));
    for &auc in &aucs {
        assert!(auc.is_nan() || (0.0..=1.0).contains(&auc));
    }
}

#[test]
fn bootstrap_is_reproducible_from_the_seed() {
    let y = array![[1.0], [0.0], [1.0], [0.0]];
    let pred = array![[0.9], [0.2], [0.6], [0.3]];

    let mut rng_a = StdRng::seed_from_u64(7);
    let mut rng_b = StdRng::seed_from_u64(7);
    let a = bootstrap_auc(y.view(), pred.view(), 10, 1.0, &mut rng_a).unwrap();
    let b = bootstrap_auc(y.view(), pred.view(), 10, 1.0, &mut rng_b).unwrap();

    assert_eq!(a, b);
}

#[test]
fn bootstrap_degenerate_class_yields_nan_row() {
    // Class 0 ground truth is constant: every resample redraws out
    let y = array![[0.0], [0.0], [0.0]];
    let pred = array![[0.9], [0.2], [0.6]];

    let mut rng = StdRng::seed_from_u64(3);
    let aucs = bootstrap_auc(y.view(), pred.view(), 5, 1.0, &mut rng).unwrap();
    assert!(aucs.iter().all(|v| v.is_nan()));

    let report = interval_report(aucs.view(), &["Edema"]).unwrap();
    assert!(report.rows()[0].interval.is_none());
}

#[test]
fn bootstrap_rejects_bad_fraction() {
    let y = array![[1.0], [0.0]];
    let pred = array![[0.9], [0.1]];
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(
        bootstrap_auc(y.view(), pred.view(), 2, 0.0, &mut rng).unwrap_err(),
        StatsError::InvalidFraction(0.0)
    );
}
