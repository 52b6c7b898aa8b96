//! Shared terminal chart for curve figures

use super::outcome::{CurveKind, CurveSet};

/// Legend markers, assigned to series in insertion order
const MARKERS: [char; 6] = ['*', 'o', '+', 'x', '#', '@'];

const DEFAULT_WIDTH: usize = 60;
const DEFAULT_HEIGHT: usize = 20;

/// Terminal figure collecting per-class curves
///
/// Owned figure state: callers create a chart, add series (or build one
/// from a [`CurveSet`]) and render it to a string. Nothing is drawn onto
/// process-global state.
#[derive(Debug, Clone)]
pub struct CurveChart {
    kind: CurveKind,
    width: usize,
    height: usize,
    series: Vec<Series>,
}

#[derive(Debug, Clone)]
struct Series {
    label: String,
    points: Vec<(f64, f64)>,
    score: f64,
}

impl CurveChart {
    /// Create an empty figure for the given curve family
    #[must_use]
    pub fn new(kind: CurveKind) -> Self {
        Self { kind, width: DEFAULT_WIDTH, height: DEFAULT_HEIGHT, series: Vec::new() }
    }

    /// Set the plot area size in character cells
    #[must_use]
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width.max(2);
        self.height = height.max(2);
        self
    }

    /// Build a figure holding every computed curve of a set
    #[must_use]
    pub fn from_set(set: &CurveSet) -> Self {
        let mut chart = Self::new(set.kind());
        for curve in set.computed() {
            chart.add_series(curve.label.clone(), curve.points.clone(), curve.score);
        }
        chart
    }

    /// Add one class curve to the figure
    pub fn add_series(&mut self, label: impl Into<String>, points: Vec<(f64, f64)>, score: f64) {
        self.series.push(Series { label: label.into(), points, score });
    }

    /// Number of series on the figure
    #[must_use]
    pub fn n_series(&self) -> usize {
        self.series.len()
    }

    /// Render the figure to a string
    #[must_use]
    pub fn render(&self) -> String {
        let mut grid = vec![vec![' '; self.width]; self.height];

        // Diagonal chance line for ROC figures
        if self.kind == CurveKind::Roc {
            for col in 0..self.width {
                let row = self.height - 1 - col * (self.height - 1) / (self.width - 1);
                grid[row][col] = '.';
            }
        }

        for (i, series) in self.series.iter().enumerate() {
            let marker = MARKERS[i % MARKERS.len()];
            self.draw_series(&mut grid, series, marker);
        }

        let (x_label, y_label) = self.kind.axis_labels();
        let title = self.kind.title();

        let mut output = String::new();
        let bar = "─".repeat(self.width.saturating_sub(title.len() + 3));
        output.push_str(&format!("┌─ {title} {bar}┐\n"));
        for row in &grid {
            output.push('│');
            output.extend(row.iter());
            output.push_str("│\n");
        }
        output.push_str(&format!("└{}┘\n", "─".repeat(self.width)));
        output.push_str(&format!("x: {x_label}, y: {y_label}\n"));

        for (i, series) in self.series.iter().enumerate() {
            let marker = MARKERS[i % MARKERS.len()];
            output.push_str(&format!("  {marker} {} ({:.3})\n", series.label, series.score));
        }

        output
    }

    fn draw_series(&self, grid: &mut [Vec<char>], series: &Series, marker: char) {
        let cells: Vec<(usize, usize)> =
            series.points.iter().map(|&(x, y)| self.cell(x, y)).collect();

        for pair in cells.windows(2) {
            let (c0, r0) = pair[0];
            let (c1, r1) = pair[1];
            let steps = c0.abs_diff(c1).max(r0.abs_diff(r1)).max(1);
            for s in 0..=steps {
                let t = s as f64 / steps as f64;
                let col = (c0 as f64 + (c1 as f64 - c0 as f64) * t).round() as usize;
                let row = (r0 as f64 + (r1 as f64 - r0 as f64) * t).round() as usize;
                grid[row][col] = marker;
            }
        }
        if let Some(&(col, row)) = cells.first() {
            grid[row][col] = marker;
        }
    }

    fn cell(&self, x: f64, y: f64) -> (usize, usize) {
        let x = x.clamp(0.0, 1.0);
        let y = y.clamp(0.0, 1.0);
        let col = (x * (self.width - 1) as f64).round() as usize;
        let row = self.height - 1 - (y * (self.height - 1) as f64).round() as usize;
        (col, row)
    }
}
