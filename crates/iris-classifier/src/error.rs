use std::error::Error;
use std::fmt;

/// Errors raised when a dataset does not satisfy its shape or label invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetError {
    Empty,
    LengthMismatch { records: usize, targets: usize },
    UnknownClass { row: usize, label: usize, n_classes: usize },
    FeatureNameMismatch { names: usize, columns: usize },
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DatasetError::Empty => write!(f, "Dataset contains no samples"),
            DatasetError::LengthMismatch { records, targets } => write!(
                f,
                "Feature matrix has {} rows but label vector has {} entries",
                records, targets
            ),
            DatasetError::UnknownClass {
                row,
                label,
                n_classes,
            } => write!(
                f,
                "Label {} at row {} is outside the {} known classes",
                label, row, n_classes
            ),
            DatasetError::FeatureNameMismatch { names, columns } => write!(
                f,
                "Got {} feature names for {} feature columns",
                names, columns
            ),
        }
    }
}

impl Error for DatasetError {}

/// Errors raised by a classifier that is misconfigured, used out of order or given the wrong input shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    NotFitted,
    FeatureCountMismatch { expected: usize, found: usize },
    ZeroIterations,
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ModelError::NotFitted => write!(f, "Model has not been fitted"),
            ModelError::FeatureCountMismatch { expected, found } => write!(
                f,
                "Model was fitted on {} features but input has {}",
                expected, found
            ),
            ModelError::ZeroIterations => write!(f, "max_iterations must be at least 1"),
        }
    }
}

impl Error for ModelError {}
