//! CLI binary smoke tests using assert_cmd.
//!
//! These tests exercise the compiled `iris-train` binary end to end: argument
//! parsing, the default output location and error exits.

use assert_cmd::Command;
use iris_classifier::io::load_model;
use iris_classifier::models::ClassifierModel;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("iris-train").unwrap()
}

#[test]
fn help_flag() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("output_file"))
        .stdout(predicate::str::contains("max_iterations"));
}

#[test]
fn version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("iris-train"));
}

#[test]
fn no_args_writes_default_model_file() {
    let dir = tempfile::tempdir().unwrap();
    cmd().current_dir(dir.path()).assert().success();

    let path = dir.path().join("iris_model.pkl");
    assert!(std::fs::metadata(&path).unwrap().len() > 0);
    assert!(load_model(&path).unwrap().is_fitted());
}

#[test]
fn rerun_overwrites_with_loadable_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.pkl");

    for _ in 0..2 {
        cmd()
            .arg("-o")
            .arg(&path)
            .assert()
            .success();
    }
    assert!(load_model(&path).is_ok());
}

#[test]
fn max_iterations_override_is_stored_in_model() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.pkl");

    cmd()
        .arg("--output_file")
        .arg(&path)
        .args(["--max_iterations", "50"])
        .assert()
        .success();

    let model = load_model(&path).unwrap();
    assert_eq!(model.config().max_iterations, 50);
}

#[test]
fn zero_iterations_rejected() {
    cmd()
        .args(["--max_iterations", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("max_iterations"));
}

#[test]
fn unwritable_output_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("model.pkl");

    cmd()
        .arg("-o")
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Training failed"))
        .stderr(predicate::str::contains("Failed to create model file"));
    assert!(!path.exists());
}

#[test]
fn missing_config_file_fails() {
    cmd()
        .args(["--config", "/nonexistent/path/train.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config"));
}

#[test]
fn zero_iteration_config_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("train.json");
    let output = dir.path().join("model.pkl");
    std::fs::write(&config, r#"{"model": {"max_iterations": 0}}"#).unwrap();

    cmd()
        .arg("--config")
        .arg(&config)
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("max_iterations must be at least 1"));
    assert!(!output.exists());
}
