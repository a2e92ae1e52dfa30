use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use iris_classifier::config::ModelConfig;
use iris_classifier::io::DEFAULT_MODEL_FILE;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct TrainConfig {
    pub output_file: String,
    pub model: ModelConfig,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            output_file: String::from(DEFAULT_MODEL_FILE),
            model: ModelConfig::default(),
        }
    }
}

impl TrainConfig {
    /// Start from the config file when one is given (defaults otherwise),
    /// then apply command line overrides on top.
    pub fn from_arguments(config_path: Option<&Path>, matches: &ArgMatches) -> Result<Self> {
        let mut config = match config_path {
            Some(path) => load_train_config(path)?,
            None => TrainConfig::default(),
        };

        if let Some(output_file) = matches.get_one::<String>("output_file") {
            config.output_file = output_file.clone();
        }

        if let Some(max_iterations) = matches.get_one::<u64>("max_iterations") {
            config.model.max_iterations = *max_iterations;
        }

        config
            .model
            .validate()
            .context("Invalid model configuration")?;
        Ok(config)
    }
}

pub fn load_train_config<P: AsRef<Path>>(path: P) -> Result<TrainConfig> {
    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: TrainConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}
