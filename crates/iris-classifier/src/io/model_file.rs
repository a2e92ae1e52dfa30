//! Binary model files.
//!
//! A model file is the bincode encoding of a fitted `LogisticClassifier`
//! (its config and learned parameters). There is no header or version tag;
//! a file is only guaranteed to load with the same build that wrote it.
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{ensure, Context, Result};

use crate::error::ModelError;
use crate::models::{ClassifierModel, LogisticClassifier};

/// File name written to the working directory when no output path is given.
pub const DEFAULT_MODEL_FILE: &str = "iris_model.pkl";

/// Write a fitted model to `path`, creating or truncating the file.
///
/// Returns the number of bytes written. The write is not atomic: a crash
/// part way through leaves a truncated file behind.
pub fn save_model<P: AsRef<Path>>(model: &LogisticClassifier, path: P) -> Result<u64> {
    let path = path.as_ref();
    ensure!(model.is_fitted(), ModelError::NotFitted);

    let file = File::create(path)
        .with_context(|| format!("Failed to create model file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    let written = bincode::serde::encode_into_std_write(
        model,
        &mut writer,
        bincode::config::standard(),
    )
    .with_context(|| format!("Failed to serialize model to: {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to flush model file: {}", path.display()))?;

    log::info!("Wrote {} bytes to {}", written, path.display());
    Ok(written as u64)
}

/// Read a model previously written by [`save_model`].
pub fn load_model<P: AsRef<Path>>(path: P) -> Result<LogisticClassifier> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open model file: {}", path.display()))?;
    let mut reader = BufReader::new(file);

    let model: LogisticClassifier =
        bincode::serde::decode_from_std_read(&mut reader, bincode::config::standard())
            .with_context(|| format!("Failed to decode model file: {}", path.display()))?;
    ensure!(
        model.is_fitted(),
        "Model file {} does not contain a fitted model",
        path.display()
    );

    log::debug!("Loaded {} from {}", model.name(), path.display());
    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn refuses_to_save_unfitted_model() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("unfitted.pkl");

        let err = save_model(&LogisticClassifier::default(), &path).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ModelError>(),
            Some(&ModelError::NotFitted)
        );
        assert!(!path.exists());
    }

    #[test]
    fn missing_directory_is_reported_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("model.pkl");

        let mut model = LogisticClassifier::default();
        let x = array![[0.0, 4.0], [4.0, 0.0], [-4.0, -4.0]];
        let y = array![0usize, 1, 2];
        model.fit(&x, &y).unwrap();

        let err = save_model(&model, &path).unwrap_err();
        assert!(format!("{}", err).contains("model.pkl"));
    }

    #[test]
    fn garbage_file_does_not_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.pkl");
        std::fs::write(&path, b"definitely not a model").unwrap();

        assert!(load_model(&path).is_err());
    }

    #[test]
    fn missing_file_does_not_load() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_model(dir.path().join("absent.pkl")).is_err());
    }
}
