//! Top-k label helper for ImageNet-style predictions

use std::fs;
use std::path::Path;

use thiserror::Error;

/// Label list location used by the workshop notebook
pub const DEFAULT_LABELS_PATH: &str =
    "ressources-atelier-ia-medical/data/imagenet_classes.txt";

/// Number of predictions reported by [`format_predictions`] by default
pub const TOP_K: usize = 5;

/// Label helper errors
#[derive(Debug, Error)]
pub enum ImagenetError {
    #[error("Failed to read label file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Class index {index} outside label list of {len} entries")]
    UnknownClass { index: usize, len: usize },
}

/// Result type for label helper operations
pub type Result<T> = std::result::Result<T, ImagenetError>;

/// Load a newline-delimited label list
///
/// Lines are trimmed; empty lines are dropped. A missing file propagates
/// as an error.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn load_labels(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}

/// Indices and scores of the `k` highest-scoring classes, descending
#[must_use]
pub fn top_k(scores: &[f64], k: usize) -> Vec<(usize, f64)> {
    let mut ranked: Vec<(usize, f64)> = scores.iter().copied().enumerate().collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    ranked.truncate(k);
    ranked
}

/// Format the top-k predictions as "label: p %" lines
///
/// # Errors
///
/// Returns an error when a top-k class index falls outside the label list.
pub fn format_predictions(labels: &[String], scores: &[f64], k: usize) -> Result<Vec<String>> {
    top_k(scores, k)
        .into_iter()
        .map(|(index, score)| {
            let label = labels
                .get(index)
                .ok_or(ImagenetError::UnknownClass { index, len: labels.len() })?;
            Ok(format!("{label}: {:.4} %", score * 100.0))
        })
        .collect()
}

/// Print the top-k predictions, one per line
///
/// # Errors
///
/// Same failure modes as [`format_predictions`].
pub fn print_predictions(labels: &[String], scores: &[f64], k: usize) -> Result<()> {
    for line in format_predictions(labels, scores, k)? {
        println!("{line}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn load_labels_trims_and_drops_empty_lines() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "tench\n goldfish \n\nwhite shark").unwrap();

        let labels = load_labels(file.path()).unwrap();
        assert_eq!(labels, vec!["tench", "goldfish", "white shark"]);
    }

    #[test]
    fn load_labels_missing_file_is_an_error() {
        assert!(matches!(
            load_labels("/nonexistent/imagenet_classes.txt"),
            Err(ImagenetError::Io(_))
        ));
    }

    #[test]
    fn top_k_ranks_descending() {
        let scores = [0.1, 0.7, 0.05, 0.15];
        let top = top_k(&scores, 2);
        assert_eq!(top, vec![(1, 0.7), (3, 0.15)]);
    }

    #[test]
    fn top_k_saturates_at_score_count() {
        assert_eq!(top_k(&[0.3, 0.7], 5).len(), 2);
    }

    #[test]
    fn format_predictions_reports_percentages() {
        let labels = vec!["tench".to_string(), "goldfish".to_string()];
        let lines = format_predictions(&labels, &[0.25, 0.75], TOP_K).unwrap();
        assert_eq!(lines, vec!["goldfish: 75.0000 %", "tench: 25.0000 %"]);
    }

    #[test]
    fn format_predictions_rejects_unknown_index() {
        let labels = vec!["tench".to_string()];
        let err = format_predictions(&labels, &[0.2, 0.8], 2).unwrap_err();
        assert!(matches!(err, ImagenetError::UnknownClass { index: 1, len: 1 }));
    }
}
