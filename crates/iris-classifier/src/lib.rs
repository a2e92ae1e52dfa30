//! iris-classifier: multinomial logistic regression on the bundled Iris dataset.
//!
//! The crate covers the three steps of a training run: loading the dataset
//! (`dataset`), fitting a classifier (`models`) and writing the fitted model
//! to a binary file (`io`). Numerics come from `ndarray` and `linfa`; model
//! files are bincode-encoded through serde.
pub mod config;
pub mod dataset;
pub mod error;
pub mod io;
pub mod models;
