//! X-ray dataset adapter

use std::path::PathBuf;

use ndarray::{Array1, Array3};

use super::error::{DatasetError, Result};
use super::table::SampleTable;
use super::transform::Transform;

/// Default column holding the image file id
const DEFAULT_IMAGE_COLUMN: &str = "Image";

/// Per-index access from a sample table to (image tensor, label vector)
///
/// Each access decodes the image file fresh; there is no caching and no
/// retry. Errors propagate to the caller.
pub struct XRayDataset {
    table: SampleTable,
    label_columns: Vec<String>,
    image_dir: PathBuf,
    image_column: String,
    transform: Transform,
}

impl XRayDataset {
    /// Create a dataset over `table`, reading images from `image_dir`
    ///
    /// `label_columns` fixes both the length and the order of the label
    /// vector returned by [`XRayDataset::get`].
    #[must_use]
    pub fn new(
        table: SampleTable,
        label_columns: Vec<String>,
        image_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            table,
            label_columns,
            image_dir: image_dir.into(),
            image_column: DEFAULT_IMAGE_COLUMN.to_string(),
            transform: Transform::default(),
        }
    }

    /// Use a different column for the image file id
    #[must_use]
    pub fn with_image_column(mut self, column: impl Into<String>) -> Self {
        self.image_column = column.into();
        self
    }

    /// Replace the transform pipeline
    #[must_use]
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Number of samples
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.n_rows()
    }

    /// Check if the dataset has no samples
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Load sample `index`: decode + transform the image, slice the labels
    ///
    /// # Errors
    ///
    /// Returns an error if the index is out of range, the image id or a
    /// label column is missing, a label cell is not numeric, or the image
    /// file cannot be read or decoded.
    pub fn get(&self, index: usize) -> Result<(Array3<f32>, Array1<f32>)> {
        let labels = self.labels_for(index)?;

        let id_cell = self
            .table
            .cell(index, &self.image_column)
            .ok_or_else(|| DatasetError::MissingColumn(self.image_column.clone()))?;
        let image_id = id_cell.as_str().ok_or_else(|| DatasetError::InvalidImageId {
            row: index,
            column: self.image_column.clone(),
        })?;

        let path = self.image_dir.join(image_id);
        let image = image::open(path)?;
        let tensor = self.transform.apply(&image);

        Ok((tensor, labels))
    }

    /// Label vector for sample `index`, in configured column order
    ///
    /// # Errors
    ///
    /// Returns an error if the index is out of range, a label column is
    /// missing, or a label cell is not numeric.
    pub fn labels_for(&self, index: usize) -> Result<Array1<f32>> {
        if index >= self.table.n_rows() {
            return Err(DatasetError::IndexOutOfRange { index, len: self.table.n_rows() });
        }

        let mut values = Vec::with_capacity(self.label_columns.len());
        for column in &self.label_columns {
            let cell = self
                .table
                .cell(index, column)
                .ok_or_else(|| DatasetError::MissingColumn(column.clone()))?;
            let value = cell.as_f64().ok_or_else(|| DatasetError::NonNumericCell {
                row: index,
                column: column.clone(),
            })?;
            values.push(value as f32);
        }

        Ok(Array1::from_vec(values))
    }
}
