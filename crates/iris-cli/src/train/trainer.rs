use std::path::PathBuf;

use anyhow::{Context, Result};
use iris_classifier::dataset::load_iris;
use iris_classifier::io::save_model;
use iris_classifier::models::{ClassifierModel, LogisticClassifier};

use super::input::TrainConfig;

/// What a training run produced.
#[derive(Debug, Clone)]
pub struct TrainingSummary {
    pub output_file: PathBuf,
    pub bytes_written: u64,
    pub n_samples: usize,
    pub n_features: usize,
    pub n_classes: usize,
}

/// Load the bundled dataset, fit on all of it, and write the model file.
pub fn run_training(config: &TrainConfig) -> Result<TrainingSummary> {
    let dataset = load_iris().context("Failed to load the bundled iris dataset")?;
    dataset.log_summary();

    let mut model = LogisticClassifier::new(config.model.clone());

    let start_time = std::time::Instant::now();
    log::trace!("Training started");
    model
        .fit(dataset.records(), dataset.targets())
        .context("Failed to fit model")?;
    log::info!("Training completed in {:?}", start_time.elapsed());

    let output_file = PathBuf::from(&config.output_file);
    let bytes_written = save_model(&model, &output_file)?;
    log::info!("Model saved to: {}", output_file.display());

    Ok(TrainingSummary {
        output_file,
        bytes_written,
        n_samples: dataset.n_samples(),
        n_features: dataset.n_features(),
        n_classes: dataset.n_classes(),
    })
}
