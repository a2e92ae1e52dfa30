use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Iteration cap handed to the optimizer when none is configured.
pub const DEFAULT_MAX_ITERATIONS: u64 = 200;

/// Central configuration for the logistic regression model.
///
/// Only the iteration cap is exposed; regularization strength, solver and
/// gradient tolerance stay at the `linfa-logistic` defaults.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ModelConfig {
    pub max_iterations: u64,
}

impl ModelConfig {
    pub fn new(max_iterations: u64) -> Self {
        Self { max_iterations }
    }

    /// A zero cap would leave the optimizer at its all-zero starting point.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.max_iterations == 0 {
            return Err(ModelError::ZeroIterations);
        }
        Ok(())
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}
