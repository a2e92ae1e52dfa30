//! The bundled Iris dataset and its invariants.
//!
//! `IrisDataset` pairs the feature matrix with its label vector and the
//! names the dataset ships with. Construction validates that every row has
//! a label and every label names a known class, so downstream code can index
//! without re-checking.
use ndarray::{Array1, Array2};

use crate::error::DatasetError;

pub const TARGET_NAMES: [&str; 3] = ["setosa", "versicolor", "virginica"];

#[derive(Debug, Clone)]
pub struct IrisDataset {
    x: Array2<f64>,
    y: Array1<usize>,
    feature_names: Vec<String>,
    target_names: Vec<String>,
}

impl IrisDataset {
    pub fn new(
        x: Array2<f64>,
        y: Array1<usize>,
        feature_names: Vec<String>,
        target_names: Vec<String>,
    ) -> Result<Self, DatasetError> {
        if x.nrows() != y.len() {
            return Err(DatasetError::LengthMismatch {
                records: x.nrows(),
                targets: y.len(),
            });
        }
        if x.nrows() == 0 {
            return Err(DatasetError::Empty);
        }
        if feature_names.len() != x.ncols() {
            return Err(DatasetError::FeatureNameMismatch {
                names: feature_names.len(),
                columns: x.ncols(),
            });
        }
        let n_classes = target_names.len();
        if let Some((row, &label)) = y.iter().enumerate().find(|(_, label)| **label >= n_classes) {
            return Err(DatasetError::UnknownClass {
                row,
                label,
                n_classes,
            });
        }

        Ok(IrisDataset {
            x,
            y,
            feature_names,
            target_names,
        })
    }

    pub fn records(&self) -> &Array2<f64> {
        &self.x
    }

    pub fn targets(&self) -> &Array1<usize> {
        &self.y
    }

    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    pub fn target_names(&self) -> &[String] {
        &self.target_names
    }

    pub fn n_samples(&self) -> usize {
        self.x.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.x.ncols()
    }

    pub fn n_classes(&self) -> usize {
        self.target_names.len()
    }

    /// Number of rows carrying each class id, indexed by class id.
    pub fn class_counts(&self) -> Vec<usize> {
        let mut counts = vec![0usize; self.n_classes()];
        for &label in self.y.iter() {
            counts[label] += 1;
        }
        counts
    }

    pub fn log_summary(&self) {
        log::info!("----- Input Data Summary -----");
        log::info!(
            "{} samples, {} features, {} classes",
            self.n_samples(),
            self.n_features(),
            self.n_classes()
        );
        for (name, count) in self.target_names.iter().zip(self.class_counts()) {
            log::info!("  {}: {} samples", name, count);
        }
        log::debug!("Features: {}", self.feature_names.join(", "));
        log::info!("-------------------------------");
    }
}

/// Load the Iris dataset compiled into the binary by `linfa-datasets`.
///
/// Feature names come from the bundled data; class names are not shipped
/// with it and use `TARGET_NAMES`.
pub fn load_iris() -> Result<IrisDataset, DatasetError> {
    let bundled = linfa_datasets::iris();
    let x = bundled.records().clone();
    let y = bundled.targets().clone();
    let feature_names = bundled.feature_names();
    log::trace!("Loaded bundled iris data with shape {:?}", x.dim());

    IrisDataset::new(
        x,
        y,
        feature_names,
        TARGET_NAMES.iter().map(|s| s.to_string()).collect(),
    )
}
