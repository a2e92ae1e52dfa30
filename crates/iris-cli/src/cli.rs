use std::path::PathBuf;

use clap::{Arg, Command, ValueHint};

/// Argument definitions for `iris-train`. Every argument is optional; with
/// none given the trainer writes `iris_model.pkl` to the working directory.
pub fn build_cli() -> Command {
    Command::new("iris-train")
        .version(clap::crate_version!())
        .about("Fit a multinomial logistic regression on the Iris dataset and save it to disk")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Path to a JSON training configuration file")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("output_file")
                .short('o')
                .long("output_file")
                .value_parser(clap::builder::NonEmptyStringValueParser::new())
                .help(
                    "File path that the fitted model will be written to. \
                     Overrides the output file specified in the configuration file.",
                )
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("max_iterations")
                .short('m')
                .long("max_iterations")
                .value_parser(clap::value_parser!(u64).range(1..))
                .help(
                    "Iteration cap for the optimizer. \
                     Overrides the value specified in the configuration file.",
                ),
        )
}
