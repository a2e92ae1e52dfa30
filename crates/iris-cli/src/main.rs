use std::path::PathBuf;

use anyhow::{Context, Result};
use log::LevelFilter;

use iris_cli::cli::build_cli;
use iris_cli::train::input::TrainConfig;
use iris_cli::train::trainer;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("IRIS_LOG", "error,iris=info"))
        .init();

    let matches = build_cli().get_matches();

    let config_path = matches.get_one::<PathBuf>("config");
    if let Some(path) = config_path {
        log::info!("[Iris::Train] Using config: {:?}", path);
    }
    let config = TrainConfig::from_arguments(config_path.map(PathBuf::as_path), &matches)?;

    let summary = trainer::run_training(&config).context("Training failed")?;
    log::debug!(
        "{} samples, {} features, {} classes -> {} bytes",
        summary.n_samples,
        summary.n_features,
        summary.n_classes,
        summary.bytes_written
    );
    Ok(())
}
