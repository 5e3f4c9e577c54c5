//! logreg CLI: train, apply and inspect logistic regression weight files.

use clap::{Parser, Subcommand};
use logreg_gd::dataset::{read_csv_matrix, split_label_column, InMemoryDataset};
use logreg_gd::metrics::accuracy;
use logreg_gd::serialization::{read_weights, WeightsEnvelope};
use logreg_gd::{BinaryClassifier, LogRegError, LogisticRegression, LogisticRegressionConfig};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "logreg")]
#[command(about = "Binary logistic regression trained by gradient descent")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fit a model on a CSV file whose last column is the 0/1 label
    Train {
        /// Training data (CSV)
        data: PathBuf,

        /// Output weight file
        #[arg(short, long, default_value = "weights.txt")]
        output: PathBuf,

        /// JSON file with a training configuration; flags below override it
        #[arg(long)]
        config: Option<PathBuf>,

        /// Maximum number of gradient-descent iterations
        #[arg(long)]
        max_iter: Option<usize>,

        /// Learning rate
        #[arg(long)]
        alpha: Option<f64>,

        /// L2 shrinkage strength
        #[arg(long)]
        lambda: Option<f64>,

        /// Stop once the training loss is at or below this value
        #[arg(long)]
        tolerance: Option<f64>,

        /// Random seed for weight initialization
        #[arg(long)]
        seed: Option<u64>,

        /// Treat the first CSV row as data rather than a header
        #[arg(long)]
        no_header: bool,

        /// Suppress the per-iteration progress line
        #[arg(short, long)]
        quiet: bool,

        /// Write a JSON envelope (feature count, weights, config) instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Apply saved weights to a CSV file
    Predict {
        /// Input data (CSV); a trailing label column enables accuracy reporting
        data: PathBuf,

        /// Weight file produced by `train`
        #[arg(short, long)]
        weights: PathBuf,

        /// Print probabilities instead of labels
        #[arg(long)]
        proba: bool,

        /// Treat the first CSV row as data rather than a header
        #[arg(long)]
        no_header: bool,

        /// The weight file is a JSON envelope
        #[arg(long)]
        json: bool,
    },

    /// Display the contents of a weight file
    Inspect {
        /// Weight file
        weights: PathBuf,

        /// The weight file is a JSON envelope
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Train {
            data,
            output,
            config,
            max_iter,
            alpha,
            lambda,
            tolerance,
            seed,
            no_header,
            quiet,
            json,
        } => {
            let overrides = Overrides {
                max_iter,
                alpha,
                lambda,
                tolerance,
                seed,
                quiet,
            };
            cmd_train(&data, &output, config.as_deref(), overrides, !no_header, json)
        }
        Commands::Predict {
            data,
            weights,
            proba,
            no_header,
            json,
        } => cmd_predict(&data, &weights, proba, !no_header, json),
        Commands::Inspect { weights, json } => cmd_inspect(&weights, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Hyperparameters given on the command line.
struct Overrides {
    max_iter: Option<usize>,
    alpha: Option<f64>,
    lambda: Option<f64>,
    tolerance: Option<f64>,
    seed: Option<u64>,
    quiet: bool,
}

fn resolve_config(
    config_path: Option<&Path>,
    overrides: Overrides,
) -> Result<LogisticRegressionConfig, LogRegError> {
    let base = match config_path {
        Some(path) => {
            let text = std::fs::read_to_string(path).map_err(|e| LogRegError::io(path, e))?;
            serde_json::from_str(&text)?
        }
        None => LogisticRegressionConfig::default(),
    };

    let mut builder = base.to_builder();
    if let Some(max_iter) = overrides.max_iter {
        builder = builder.max_iter(max_iter);
    }
    if let Some(alpha) = overrides.alpha {
        builder = builder.alpha(alpha);
    }
    if let Some(lambda) = overrides.lambda {
        builder = builder.lambda(lambda);
    }
    if let Some(tolerance) = overrides.tolerance {
        builder = builder.tolerance(tolerance);
    }
    if let Some(seed) = overrides.seed {
        builder = builder.seed(seed);
    }
    if overrides.quiet {
        builder = builder.verbose(false);
    }
    builder.build()
}

fn cmd_train(
    data: &Path,
    output: &Path,
    config_path: Option<&Path>,
    overrides: Overrides,
    has_headers: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = resolve_config(config_path, overrides)?;
    let dataset = InMemoryDataset::from_csv(data, has_headers)?;
    tracing::info!(
        samples = dataset.n_samples(),
        features = dataset.n_features(),
        "loaded training data"
    );

    let mut model = LogisticRegression::with_config(config);
    model.fit_dataset(&dataset)?;

    let preds = model.predict(dataset.features())?;
    let acc = accuracy(dataset.labels(), preds.view())?;
    if let Some(history) = model.history() {
        println!(
            "Trained for {} iterations (initial loss {:.5}, final loss {:.5})",
            history.iterations(),
            history.initial_loss,
            history.final_loss()
        );
    }
    println!("Training accuracy: {:.4}", acc);

    if json {
        model.save_json(output)?;
    } else {
        model.try_save_weights(output)?;
    }
    println!("Weights saved to {}", output.display());
    Ok(())
}

fn load_model(weights: &Path, json: bool) -> Result<LogisticRegression, LogRegError> {
    let mut model = LogisticRegression::default();
    if json {
        model.load_json(weights)?;
    } else {
        model.try_load_weights(weights)?;
    }
    Ok(model)
}

fn cmd_predict(
    data: &Path,
    weights: &Path,
    proba: bool,
    has_headers: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let model = load_model(weights, json)?;
    let n_features = model.n_features().ok_or(LogRegError::NotFitted)?;
    let table = read_csv_matrix(data, has_headers)?;

    let (x, labels) = if table.ncols() == n_features + 1 {
        let (x, y) = split_label_column(table.view())?;
        (x, Some(y))
    } else {
        (table, None)
    };

    if proba {
        for p in model.predict_prob(x.view())?.iter() {
            println!("{p}");
        }
    } else {
        let preds = model.predict(x.view())?;
        for label in &preds {
            println!("{label}");
        }
        if let Some(labels) = labels {
            let acc = accuracy(labels.view(), preds.view())?;
            eprintln!("Accuracy: {:.4}", acc);
        }
    }
    Ok(())
}

fn cmd_inspect(weights: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (values, config) = if json {
        let envelope = WeightsEnvelope::load_json(weights)?;
        (envelope.weights, envelope.config)
    } else {
        (read_weights(weights)?.to_vec(), None)
    };

    let n_features = values.len() - 1;
    println!("Weight file: {}", weights.display());
    println!("Features: {}", n_features);
    for (i, w) in values[..n_features].iter().enumerate() {
        println!("  w[{i}] = {w}");
    }
    println!("  bias = {}", values[n_features]);
    if let Some(config) = config {
        println!(
            "Trained with: max_iter={}, alpha={}, lambda={}, tolerance={}",
            config.max_iter(),
            config.alpha(),
            config.lambda(),
            config.tolerance()
        );
    }
    Ok(())
}
