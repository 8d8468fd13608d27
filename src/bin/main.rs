//! KSVM Command Line Interface
//!
//! Loads CSV data (last column is the label), runs the kernel classifier and
//! prints the result.

use clap::{Args, Parser, Subcommand, ValueEnum};
use env_logger::Env;
use log::{error, info};
use ksvm::api::{holdout_evaluation, train_and_predict, EvaluationOptions};
use ksvm::core::{ClassifierConfig, Result};
use ksvm::{CsvDataset, KernelKind};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "ksvm")]
#[command(about = "A minimal kernel-based binary classifier")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Scale, split, train and report holdout accuracy
    Evaluate(EvaluateArgs),
    /// Train on one file and predict the rows of another
    Predict(PredictArgs),
}

#[derive(Args)]
struct ClassifierArgs {
    /// Kernel family
    #[arg(short, long, default_value = "polynomial")]
    kernel: CliKernel,

    /// Polynomial degree
    #[arg(long, default_value = "3")]
    degree: u32,

    /// Scale constant C (polynomial offset and update target)
    #[arg(short = 'C', long, default_value = "1.0")]
    c: f64,

    /// Gamma for the RBF and sigmoid kernels
    #[arg(short, long, default_value = "0.01")]
    gamma: f64,

    /// Offset for the sigmoid kernel
    #[arg(long, default_value = "0.0", allow_hyphen_values = true)]
    coef0: f64,

    /// Number of training epochs
    #[arg(long, default_value = "100")]
    epochs: usize,
}

impl From<&ClassifierArgs> for ClassifierConfig {
    fn from(args: &ClassifierArgs) -> Self {
        ClassifierConfig::default()
            .with_kernel(args.kernel.clone().into())
            .with_degree(args.degree)
            .with_c(args.c)
            .with_gamma(args.gamma)
            .with_coef0(args.coef0)
            .with_epochs(args.epochs)
    }
}

#[derive(ValueEnum, Clone, Debug)]
enum CliKernel {
    /// (C + x·y)^degree
    #[value(name = "polynomial")]
    Polynomial,
    /// exp(-gamma * |x - y|²)
    #[value(name = "rbf")]
    Rbf,
    /// tanh(gamma * x·y + coef0)
    #[value(name = "sigmoid")]
    Sigmoid,
}

impl From<CliKernel> for KernelKind {
    fn from(cli_kernel: CliKernel) -> Self {
        match cli_kernel {
            CliKernel::Polynomial => KernelKind::Polynomial,
            CliKernel::Rbf => KernelKind::Rbf,
            CliKernel::Sigmoid => KernelKind::Sigmoid,
        }
    }
}

#[derive(Args)]
struct EvaluateArgs {
    /// CSV data file
    #[arg(long)]
    data: PathBuf,

    /// Fraction of rows held out for testing
    #[arg(short, long, default_value = "0.2")]
    ratio: f64,

    /// Seed for the row permutation
    #[arg(short, long, default_value = "43")]
    seed: u64,

    /// Skip feature standardization
    #[arg(long)]
    no_scale: bool,

    /// Print the full report as JSON
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    classifier: ClassifierArgs,
}

#[derive(Args)]
struct PredictArgs {
    /// CSV training file (last column is the label)
    #[arg(long)]
    train: PathBuf,

    /// CSV file of feature rows to classify (no label column)
    #[arg(long)]
    data: PathBuf,

    /// Skip feature standardization
    #[arg(long)]
    no_scale: bool,

    #[command(flatten)]
    classifier: ClassifierArgs,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else {
        "warn"
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let result = match cli.command {
        Commands::Evaluate(args) => evaluate_command(args),
        Commands::Predict(args) => predict_command(args),
    };

    if let Err(e) = result {
        error!("Error: {e}");
        process::exit(1);
    }
}

fn evaluate_command(args: EvaluateArgs) -> Result<()> {
    info!("Loading dataset from: {:?}", args.data);
    let dataset = CsvDataset::from_file(&args.data)?;
    info!(
        "Loaded {} samples with {} features",
        dataset.len(),
        dataset.dim()
    );

    let options = EvaluationOptions::default()
        .with_scaling(!args.no_scale)
        .with_test_ratio(args.ratio)
        .with_seed(args.seed)
        .with_classifier((&args.classifier).into());

    let report = holdout_evaluation(&dataset, &options)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Accuracy is: {}", report.accuracy);
    }
    Ok(())
}

fn predict_command(args: PredictArgs) -> Result<()> {
    info!("Loading training data from: {:?}", args.train);
    let train = CsvDataset::from_file(&args.train)?;

    info!("Loading prediction data from: {:?}", args.data);
    let rows = CsvDataset::features_from_file(&args.data)?;

    let config: ClassifierConfig = (&args.classifier).into();
    let predictions = train_and_predict(&train, &rows, &config, !args.no_scale)?;

    println!("# Predictions for {} samples", predictions.len());
    for (i, label) in predictions.iter().enumerate() {
        println!("{i} {label:.0}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_defaults() {
        let cli = Cli::parse_from(["ksvm", "evaluate", "--data", "diabetes.csv"]);
        match cli.command {
            Commands::Evaluate(args) => {
                assert_eq!(args.ratio, 0.2);
                assert_eq!(args.seed, 43);
                assert!(!args.no_scale);
                let config: ClassifierConfig = (&args.classifier).into();
                assert_eq!(config, ClassifierConfig::default());
            }
            Commands::Predict(_) => panic!("expected evaluate"),
        }
    }

    #[test]
    fn test_cli_kernel_selection() {
        let cli = Cli::parse_from([
            "ksvm", "predict", "--train", "a.csv", "--data", "b.csv", "--kernel", "sigmoid",
            "--coef0", "-0.5",
        ]);
        match cli.command {
            Commands::Predict(args) => {
                let config: ClassifierConfig = (&args.classifier).into();
                assert_eq!(config.kernel, KernelKind::Sigmoid);
                assert_eq!(config.coef0, -0.5);
            }
            Commands::Evaluate(_) => panic!("expected predict"),
        }
    }
}
