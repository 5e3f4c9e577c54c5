// trainer/mod.rs
use crate::{activation::sigmoid_vec, loss::Loss, optimizer::Optimizer, regularizers::Regularizer};
use ndarray::{Array1, ArrayView1, ArrayView2};
use serde::{Deserialize, Serialize};

/// Per-run record of the training loss.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingHistory {
    /// Loss of the initial weights, before any update.
    pub initial_loss: f64,
    /// Loss after each iteration, in order.
    pub losses: Vec<f64>,
    /// `true` when the tolerance check ended training before `max_iter`.
    pub stopped_early: bool,
}

impl TrainingHistory {
    /// Number of iterations actually run.
    pub fn iterations(&self) -> usize {
        self.losses.len()
    }

    /// Loss after the last iteration, or the initial loss if none ran.
    pub fn final_loss(&self) -> f64 {
        self.losses.last().copied().unwrap_or(self.initial_loss)
    }
}

/// Orchestrates full-batch gradient descent on bias-augmented inputs.
///
/// Each iteration:
/// 1. `p = σ(X'·w)`, `e = ∂L/∂z` (for cross-entropy, `p - y`)
/// 2. `w ← optimizer.step(regularizer.shrink(w), X'ᵗ·e)`
/// 3. loss of the updated `w` is recorded; training stops once it is `<= tolerance`.
///
/// Once built via [`TrainerBuilder`], it is immutable and can be reused.
pub struct Trainer<L, O, R>
where
    L: Loss,
    O: Optimizer,
    R: Regularizer,
{
    pub(crate) max_iter: usize,
    pub(crate) tolerance: f64,
    pub(crate) verbose: bool,
    pub(crate) loss_fn: L,
    pub(crate) optimizer: O,
    pub(crate) regularizer: R,
}

/// Fluent builder for constructing a [`Trainer`].
///
/// Defaults:
/// - `max_iter`: 100
/// - `tolerance`: 0.001
/// - `verbose`: true
pub struct TrainerBuilder<L, O, R>
where
    L: Loss,
    O: Optimizer,
    R: Regularizer,
{
    max_iter: usize,
    tolerance: f64,
    verbose: bool,
    loss_fn: L,
    optimizer: O,
    regularizer: R,
}

impl<L, O, R> TrainerBuilder<L, O, R>
where
    L: Loss,
    O: Optimizer,
    R: Regularizer,
{
    /// Creates a new `TrainerBuilder` with the given components.
    ///
    /// # Arguments
    /// * `loss_fn`: differentiable loss (e.g., `CrossEntropyLoss`)
    /// * `optimizer`: parameter updater (e.g., `SGD`)
    /// * `regularizer`: weight decay (e.g., `L2Shrinkage` or `NoRegularizer`)
    pub fn new(loss_fn: L, optimizer: O, regularizer: R) -> Self {
        Self {
            max_iter: 100,
            tolerance: 1e-3,
            verbose: true,
            loss_fn,
            optimizer,
            regularizer,
        }
    }

    pub fn max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets verbosity for training output.
    ///
    /// When `false`, suppresses the per-iteration progress line on stdout.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn build(self) -> Trainer<L, O, R> {
        Trainer {
            max_iter: self.max_iter,
            tolerance: self.tolerance,
            verbose: self.verbose,
            loss_fn: self.loss_fn,
            optimizer: self.optimizer,
            regularizer: self.regularizer,
        }
    }
}

impl<L, O, R> Trainer<L, O, R>
where
    L: Loss,
    O: Optimizer,
    R: Regularizer,
{
    /// Convenience constructor that starts the builder pattern.
    pub fn builder(loss_fn: L, optimizer: O, regularizer: R) -> TrainerBuilder<L, O, R> {
        TrainerBuilder::new(loss_fn, optimizer, regularizer)
    }

    /// Runs gradient descent from `weights` and returns the trained weights.
    ///
    /// `x_aug` must already carry the trailing ones column, so
    /// `x_aug.ncols() == weights.len()` and `x_aug.nrows() == targets.len()`.
    /// Callers validate shapes; the trainer does not.
    pub fn fit(
        &self,
        x_aug: ArrayView2<'_, f64>,
        targets: ArrayView1<'_, f64>,
        mut weights: Array1<f64>,
    ) -> (Array1<f64>, TrainingHistory) {
        let n_samples = x_aug.nrows();
        let mut history = TrainingHistory {
            initial_loss: self.loss_at(x_aug, targets, &weights),
            losses: Vec::with_capacity(self.max_iter),
            stopped_early: false,
        };
        tracing::info!(
            n_samples,
            n_weights = weights.len(),
            max_iter = self.max_iter,
            initial_loss = history.initial_loss,
            "starting gradient descent"
        );

        for iter in 0..self.max_iter {
            let probs = sigmoid_vec(x_aug.dot(&weights).view());
            let residual = self.loss_fn.grad_wrt_logits(probs.view(), targets);
            let grad = x_aug.t().dot(&residual);

            let shrunk = self.regularizer.shrink(&weights, n_samples);
            weights = self.optimizer.step(&shrunk, &grad);

            let loss = self.loss_at(x_aug, targets, &weights);
            history.losses.push(loss);
            tracing::debug!(iteration = iter, loss, "gradient descent step");
            if self.verbose {
                println!("Iteration: {}, logloss:{:.5}", iter, loss);
            }

            if loss <= self.tolerance {
                history.stopped_early = iter + 1 < self.max_iter;
                break;
            }
        }

        tracing::info!(
            iterations = history.iterations(),
            final_loss = history.final_loss(),
            stopped_early = history.stopped_early,
            "gradient descent finished"
        );
        (weights, history)
    }

    fn loss_at(
        &self,
        x_aug: ArrayView2<'_, f64>,
        targets: ArrayView1<'_, f64>,
        weights: &Array1<f64>,
    ) -> f64 {
        let probs = sigmoid_vec(x_aug.dot(weights).view());
        self.loss_fn.loss(probs.view(), targets)
    }
}
