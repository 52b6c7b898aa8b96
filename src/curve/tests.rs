//! Curve module tests

use approx::assert_relative_eq;
use ndarray::array;

use super::*;

#[test]
fn roc_auc_perfect_separation() {
    let scores = [0.9, 0.8, 0.2, 0.1];
    let labels = [true, true, false, false];
    assert_relative_eq!(roc_auc(&scores, &labels).unwrap(), 1.0);
}

#[test]
fn roc_auc_reversed_separation() {
    let scores = [0.1, 0.2, 0.8, 0.9];
    let labels = [true, true, false, false];
    assert_relative_eq!(roc_auc(&scores, &labels).unwrap(), 0.0);
}

#[test]
fn roc_auc_matches_sklearn_reference() {
    // sklearn: roc_auc_score([0, 0, 1, 1], [0.1, 0.4, 0.35, 0.8]) = 0.75
    let scores = [0.1, 0.4, 0.35, 0.8];
    let labels = [false, false, true, true];
    assert_relative_eq!(roc_auc(&scores, &labels).unwrap(), 0.75, epsilon = 1e-9);
}

#[test]
fn roc_auc_tied_scores_give_half() {
    let scores = [0.5, 0.5];
    let labels = [true, false];
    assert_relative_eq!(roc_auc(&scores, &labels).unwrap(), 0.5);
}

#[test]
fn roc_curve_endpoints() {
    let scores = [0.1, 0.4, 0.35, 0.8];
    let labels = [false, false, true, true];
    let curve = roc_curve(&scores, &labels).unwrap();

    let first = curve.points.first().unwrap();
    assert_relative_eq!(first.fpr, 0.0);
    assert_relative_eq!(first.tpr, 0.0);

    let last = curve.points.last().unwrap();
    assert_relative_eq!(last.fpr, 1.0);
    assert_relative_eq!(last.tpr, 1.0);
}

#[test]
fn roc_rejects_degenerate_labels() {
    assert_eq!(
        roc_auc(&[0.1, 0.2], &[false, false]).unwrap_err(),
        CurveError::NoPositiveSamples
    );
    assert_eq!(
        roc_auc(&[0.1, 0.2], &[true, true]).unwrap_err(),
        CurveError::NoNegativeSamples
    );
    assert_eq!(roc_auc(&[], &[]).unwrap_err(), CurveError::EmptyInput);
    assert_eq!(
        roc_auc(&[0.1], &[true, false]).unwrap_err(),
        CurveError::LengthMismatch { scores: 1, labels: 2 }
    );
}

#[test]
fn average_precision_matches_sklearn_reference() {
    // sklearn: average_precision_score([0, 0, 1, 1], [0.1, 0.4, 0.35, 0.8])
    //          = 0.8333333333333333
    let scores = [0.1, 0.4, 0.35, 0.8];
    let labels = [false, false, true, true];
    assert_relative_eq!(
        average_precision(&scores, &labels).unwrap(),
        0.833_333_333_333_333_3,
        epsilon = 1e-9
    );
}

#[test]
fn pr_curve_allows_all_positive_labels() {
    let curve = pr_curve(&[0.9, 0.8], &[true, true]).unwrap();
    assert_relative_eq!(curve.average_precision, 1.0);
    for point in &curve.points {
        assert_relative_eq!(point.precision, 1.0);
    }
}

#[test]
fn pr_curve_rejects_no_positives() {
    assert_eq!(
        pr_curve(&[0.9, 0.8], &[false, false]).unwrap_err(),
        CurveError::NoPositiveSamples
    );
}

#[test]
fn curve_set_skips_degenerate_class_and_keeps_the_rest() {
    // Class 1 ground truth is all zeros: skipped, others still computed
    let y = array![[1.0, 0.0, 1.0], [0.0, 0.0, 0.0], [1.0, 0.0, 1.0], [0.0, 0.0, 0.0]];
    let pred = array![
        [0.9, 0.3, 0.8],
        [0.2, 0.6, 0.1],
        [0.7, 0.4, 0.9],
        [0.1, 0.5, 0.2]
    ];
    let labels = ["Cardiomegaly", "Edema", "Effusion"];

    let set = curve_set(y.view(), pred.view(), &labels, CurveKind::Roc).unwrap();

    assert_eq!(set.outcomes().len(), 3);
    assert_eq!(set.aucs().len(), 2);
    let skipped = set.skipped();
    assert_eq!(skipped, vec![("Edema", &CurveError::NoPositiveSamples)]);
}

#[test]
fn curve_set_rejects_shape_mismatch() {
    let y = array![[1.0, 0.0], [0.0, 1.0]];
    let pred = array![[0.9], [0.2]];
    let err = curve_set(y.view(), pred.view(), &["a", "b"], CurveKind::Roc).unwrap_err();
    assert!(matches!(err, CurveError::ShapeMismatch { .. }));
}

#[test]
fn curve_set_rejects_label_count_mismatch() {
    let y = array![[1.0, 0.0], [0.0, 1.0]];
    let pred = array![[0.9, 0.1], [0.2, 0.8]];
    let err = curve_set(y.view(), pred.view(), &["a"], CurveKind::Roc).unwrap_err();
    assert_eq!(err, CurveError::ClassCountMismatch { labels: 1, columns: 2 });
}

#[test]
fn chart_renders_title_legend_and_markers() {
    let y = array![[1.0, 0.0], [0.0, 1.0], [1.0, 0.0], [0.0, 1.0]];
    let pred = array![[0.9, 0.1], [0.2, 0.8], [0.6, 0.4], [0.3, 0.7]];
    let labels = ["Cardiomegaly", "Edema"];

    let set = curve_set(y.view(), pred.view(), &labels, CurveKind::Roc).unwrap();
    let chart = CurveChart::from_set(&set);
    assert_eq!(chart.n_series(), 2);

    let figure = chart.render();
    assert!(figure.contains("ROC curve"));
    assert!(figure.contains("Cardiomegaly (1.000)"));
    assert!(figure.contains("Edema (1.000)"));
    assert!(figure.contains("x: False positive rate, y: True positive rate"));
    assert!(figure.contains('*'));
    assert!(figure.contains('o'));
}

#[test]
fn pr_chart_uses_pr_axis_labels() {
    let chart = CurveChart::new(CurveKind::PrecisionRecall);
    let figure = chart.render();
    assert!(figure.contains("Precision-Recall curve"));
    assert!(figure.contains("x: Recall, y: Precision"));
}
