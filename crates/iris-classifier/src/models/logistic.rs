use anyhow::{ensure, Context, Result};
use linfa::traits::{Fit, Predict};
use linfa::Dataset;
use linfa_logistic::{MultiFittedLogisticRegression, MultiLogisticRegression};
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

use crate::config::ModelConfig;
use crate::error::{DatasetError, ModelError};
use crate::models::classifier_trait::ClassifierModel;

/// Multinomial logistic regression fit with L-BFGS.
///
/// The optimizer stops at convergence or after `max_iterations`, whichever
/// comes first. Hitting the cap is not reported; the last iterate is kept as
/// the fitted model.
#[derive(Serialize, Deserialize)]
pub struct LogisticClassifier {
    params: ModelConfig,
    fitted: Option<FittedState>,
}

#[derive(Serialize, Deserialize)]
struct FittedState {
    model: MultiFittedLogisticRegression<f64, usize>,
    classes: Vec<usize>,
    n_features: usize,
}

impl LogisticClassifier {
    pub fn new(params: ModelConfig) -> Self {
        LogisticClassifier {
            params,
            fitted: None,
        }
    }

    pub fn config(&self) -> &ModelConfig {
        &self.params
    }

    /// Learned weights, shaped `(n_features, n_classes)`.
    pub fn coefficients(&self) -> Option<&Array2<f64>> {
        self.fitted.as_ref().map(|state| state.model.params())
    }

    /// One intercept per class.
    pub fn intercept(&self) -> Option<&Array1<f64>> {
        self.fitted.as_ref().map(|state| state.model.intercept())
    }

    /// Sorted class ids seen during fitting.
    pub fn classes(&self) -> Option<&[usize]> {
        self.fitted.as_ref().map(|state| state.classes.as_slice())
    }

    fn fitted_for(&self, x: &Array2<f64>) -> Result<&FittedState, ModelError> {
        let state = self.fitted.as_ref().ok_or(ModelError::NotFitted)?;
        if x.ncols() != state.n_features {
            return Err(ModelError::FeatureCountMismatch {
                expected: state.n_features,
                found: x.ncols(),
            });
        }
        Ok(state)
    }
}

impl Default for LogisticClassifier {
    fn default() -> Self {
        LogisticClassifier::new(ModelConfig::default())
    }
}

impl ClassifierModel for LogisticClassifier {
    fn fit(&mut self, x: &Array2<f64>, y: &Array1<usize>) -> Result<()> {
        ensure!(
            x.nrows() == y.len(),
            DatasetError::LengthMismatch {
                records: x.nrows(),
                targets: y.len(),
            }
        );
        ensure!(x.nrows() > 0, DatasetError::Empty);
        self.params.validate()?;

        let mut classes: Vec<usize> = y.iter().copied().collect();
        classes.sort_unstable();
        classes.dedup();

        log::info!(
            "Fitting {} on {} samples x {} features ({} classes, max_iterations = {})",
            self.name(),
            x.nrows(),
            x.ncols(),
            classes.len(),
            self.params.max_iterations
        );

        let dataset = Dataset::new(x.to_owned(), y.to_owned());
        let model = MultiLogisticRegression::<f64>::default()
            .max_iterations(self.params.max_iterations)
            .fit(&dataset)
            .context("Failed to fit multinomial logistic regression")?;

        log::debug!("Intercept: {}", model.intercept());
        log::trace!("Coefficients:\n{}", model.params());

        self.fitted = Some(FittedState {
            model,
            classes,
            n_features: x.ncols(),
        });
        Ok(())
    }

    fn predict(&self, x: &Array2<f64>) -> Result<Array1<usize>> {
        let state = self.fitted_for(x)?;
        Ok(state.model.predict(x))
    }

    fn predict_proba(&self, x: &Array2<f64>) -> Result<Array2<f64>> {
        let state = self.fitted_for(x)?;
        Ok(state.model.predict_probabilities(x))
    }

    fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }

    fn name(&self) -> &str {
        "logistic_regression"
    }
}
