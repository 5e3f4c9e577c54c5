//! Binary logistic regression trained by full-batch gradient descent.
//!
//! The model keeps a single weight vector `W` of length `n_features + 1`; the
//! last element is the bias. Predictions are `σ([x | 1] · W)`.
//!
//! Training ([`LogisticRegression::fit`]) starts from uniform random weights in
//! `[-1, 1)` and repeats, for at most `max_iter` iterations:
//!
//! ```text
//! W ← (1 - λ/N)·W - α · X'ᵗ · (σ(X'·W) - y)
//! ```
//!
//! stopping early once the mean cross-entropy of the updated `W` is `<= tolerance`.
//!
//! An estimator is plain owned data. `fit` and `load_weights` take `&mut self`,
//! so sharing one instance across threads requires external synchronization.

use crate::activation::sigmoid_vec;
use crate::dataset::{augment_with_bias, check_labels, check_training_shapes, InMemoryDataset};
use crate::error::{LogRegError, Result};
use crate::loss::CrossEntropyLoss;
use crate::model::{BinaryClassifier, LogisticRegressionConfig};
use crate::optimizer::SGD;
use crate::regularizers::L2Shrinkage;
use crate::serialization::{read_weights, write_weights, WeightsEnvelope};
use crate::trainer::{Trainer, TrainingHistory};
use ndarray::{Array1, ArrayView1, ArrayView2};
use rand::distributions::Uniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::Path;

/// Logistic regression estimator.
///
/// # Example
/// ```rust
/// use logreg_gd::model::{BinaryClassifier, LogisticRegression, LogisticRegressionConfig};
/// use ndarray::array;
///
/// let config = LogisticRegressionConfig::builder()
///     .max_iter(500)
///     .alpha(0.1)
///     .seed(1)
///     .verbose(false)
///     .build()
///     .unwrap();
/// let mut model = LogisticRegression::with_config(config);
///
/// let x = array![[0.0], [0.5], [4.5], [5.0]];
/// let y = array![0, 0, 1, 1];
/// model.fit(x.view(), y.view()).unwrap();
///
/// assert_eq!(model.weights().unwrap().len(), 2);
/// assert_eq!(model.predict(x.view()).unwrap(), y);
/// ```
#[derive(Debug, Clone)]
pub struct LogisticRegression {
    config: LogisticRegressionConfig,
    weights: Option<Array1<f64>>,
    history: Option<TrainingHistory>,
}

impl Default for LogisticRegression {
    /// `max_iter = 100`, `alpha = 0.01`, `lambda = 0.01`, `tolerance = 0.001`.
    fn default() -> Self {
        Self::with_config(LogisticRegressionConfig::default())
    }
}

impl LogisticRegression {
    /// Creates an estimator without validating the hyperparameters.
    pub fn new(max_iter: usize, alpha: f64, lambda: f64, tolerance: f64) -> Self {
        Self::with_config(LogisticRegressionConfig::new(
            max_iter, alpha, lambda, tolerance,
        ))
    }

    /// Like [`new`](Self::new), but rejects out-of-range hyperparameters.
    pub fn try_new(max_iter: usize, alpha: f64, lambda: f64, tolerance: f64) -> Result<Self> {
        let config = LogisticRegressionConfig::new(max_iter, alpha, lambda, tolerance);
        config.validate()?;
        Ok(Self::with_config(config))
    }

    pub fn with_config(config: LogisticRegressionConfig) -> Self {
        Self {
            config,
            weights: None,
            history: None,
        }
    }

    pub fn config(&self) -> &LogisticRegressionConfig {
        &self.config
    }

    /// Current weight vector (coefficients, then bias), or `None` before the
    /// first `fit` or successful load.
    pub fn weights(&self) -> Option<ArrayView1<'_, f64>> {
        self.weights.as_ref().map(|w| w.view())
    }

    /// Number of features the current weights expect.
    pub fn n_features(&self) -> Option<usize> {
        self.weights.as_ref().map(|w| w.len() - 1)
    }

    pub fn is_fitted(&self) -> bool {
        self.weights.is_some()
    }

    /// Loss trace of the most recent `fit`. Cleared by `load_weights`/`set_weights`.
    pub fn history(&self) -> Option<&TrainingHistory> {
        self.history.as_ref()
    }

    /// Replaces the weights wholesale. The vector must hold at least the bias.
    pub fn set_weights(&mut self, weights: Array1<f64>) -> Result<()> {
        if weights.is_empty() {
            return Err(LogRegError::EmptyWeights);
        }
        self.weights = Some(weights);
        self.history = None;
        Ok(())
    }

    /// Trains on `x` (`n_samples × n_features`) and labels `y` in `{0, 1}`.
    ///
    /// Any previous weights are discarded. On error the estimator is unchanged.
    pub fn fit(&mut self, x: ArrayView2<'_, f64>, y: ArrayView1<'_, u8>) -> Result<()> {
        check_training_shapes(x, y)?;
        check_labels(y)?;

        let initial = init_weights(x.ncols() + 1, self.config.seed());
        let x_aug = augment_with_bias(x);
        let targets = y.mapv(f64::from);

        let trainer = Trainer::builder(
            CrossEntropyLoss,
            SGD::new(self.config.alpha()),
            L2Shrinkage::new(self.config.lambda()),
        )
        .max_iter(self.config.max_iter())
        .tolerance(self.config.tolerance())
        .verbose(self.config.verbose())
        .build();

        let (weights, history) = trainer.fit(x_aug.view(), targets.view(), initial);
        self.weights = Some(weights);
        self.history = Some(history);
        Ok(())
    }

    /// Trains on a validated dataset.
    pub fn fit_dataset(&mut self, dataset: &InMemoryDataset) -> Result<()> {
        self.fit(dataset.features(), dataset.labels())
    }

    fn fitted_weights(&self) -> Result<&Array1<f64>> {
        self.weights.as_ref().ok_or(LogRegError::NotFitted)
    }

    /// Writes the weights to `path` as one line of space-separated numbers.
    pub fn try_save_weights<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let weights = self.fitted_weights()?;
        write_weights(path, weights.view())
    }

    /// Writes the weights to `path`; failures are logged and otherwise ignored.
    pub fn save_weights<P: AsRef<Path>>(&self, path: P) {
        let path = path.as_ref();
        if let Err(err) = self.try_save_weights(path) {
            tracing::error!(path = %path.display(), error = %err, "failed to save weights");
        }
    }

    /// Replaces the weights with the values stored at `path`.
    ///
    /// The dimensionality becomes the number of tokens in the file. On any
    /// error (unreadable file, malformed token, empty file) the current weights
    /// are kept.
    pub fn try_load_weights<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let weights = read_weights(path)?;
        self.set_weights(weights)
    }

    /// Loads weights from `path`; failures are logged and leave the model unchanged.
    pub fn load_weights<P: AsRef<Path>>(&mut self, path: P) {
        let path = path.as_ref();
        if let Err(err) = self.try_load_weights(path) {
            tracing::error!(path = %path.display(), error = %err, "failed to load weights");
        }
    }

    /// Writes a [`WeightsEnvelope`] (weights, feature count and config) as JSON.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let weights = self.fitted_weights()?;
        WeightsEnvelope::new(weights.view(), Some(self.config)).save_json(path)
    }

    /// Loads weights from a JSON envelope, checking the stored feature count.
    ///
    /// The stored config, if any, is ignored; the estimator keeps its own.
    pub fn load_json<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let envelope = WeightsEnvelope::load_json(path)?;
        self.set_weights(Array1::from_vec(envelope.weights))
    }
}

impl BinaryClassifier for LogisticRegression {
    fn predict_prob(&self, x: ArrayView2<'_, f64>) -> Result<Array1<f64>> {
        let weights = self.fitted_weights()?;
        if x.ncols() + 1 != weights.len() {
            return Err(LogRegError::DimensionMismatch {
                context: "predict (columns of X vs trained features)",
                expected: weights.len() - 1,
                got: x.ncols(),
            });
        }
        let x_aug = augment_with_bias(x);
        Ok(sigmoid_vec(x_aug.dot(weights).view()))
    }
}

/// Uniform random weights in `[-1, 1)`.
fn init_weights(len: usize, seed: Option<u64>) -> Array1<f64> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let dist = Uniform::new(-1.0, 1.0);
    Array1::from_iter((0..len).map(|_| rng.sample(&dist)))
}
