use anyhow::Result;
use ndarray::{Array1, Array2};

/// A small trait abstraction for classifier models. Rows of `x` are samples,
/// columns are features, and labels are dense class ids starting at 0.
pub trait ClassifierModel {
    /// Fit the model on the whole of `x`/`y`, replacing any previous fit.
    fn fit(&mut self, x: &Array2<f64>, y: &Array1<usize>) -> Result<()>;

    /// Predict the most probable class id for every row.
    fn predict(&self, x: &Array2<f64>) -> Result<Array1<usize>>;

    /// Per-class probabilities, one row per sample and one column per class.
    fn predict_proba(&self, x: &Array2<f64>) -> Result<Array2<f64>>;

    fn is_fitted(&self) -> bool;

    /// Optional human readable name for the model
    fn name(&self) -> &str {
        "classifier"
    }
}
