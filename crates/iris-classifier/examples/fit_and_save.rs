use anyhow::Result;
use iris_classifier::config::ModelConfig;
use iris_classifier::dataset::load_iris;
use iris_classifier::io::{load_model, save_model, DEFAULT_MODEL_FILE};
use iris_classifier::models::{ClassifierModel, LogisticClassifier};
use ndarray::s;

fn main() -> Result<()> {
    env_logger::init();

    let ds = load_iris()?;
    println!("Iris X shape: {:?}", ds.records().dim());
    println!("Iris y shape: {:?}", ds.targets().dim());

    let mut clf = LogisticClassifier::new(ModelConfig::default());
    clf.fit(ds.records(), ds.targets())?;
    save_model(&clf, DEFAULT_MODEL_FILE)?;

    let restored = load_model(DEFAULT_MODEL_FILE)?;
    let first = ds.records().slice(s![0..1, ..]).to_owned();
    let before = clf.predict(&first)?[0];
    let after = restored.predict(&first)?[0];
    println!(
        "First row: in-memory -> {}, reloaded -> {}",
        ds.target_names()[before],
        ds.target_names()[after]
    );
    Ok(())
}
