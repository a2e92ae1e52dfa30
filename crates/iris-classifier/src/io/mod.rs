//! IO utilities for persisting fitted models.

pub mod model_file;

pub use model_file::{load_model, save_model, DEFAULT_MODEL_FILE};
