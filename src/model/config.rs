//! Hyperparameters of [`LogisticRegression`](crate::model::LogisticRegression).

use crate::error::{LogRegError, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_ITER: usize = 100;
pub const DEFAULT_ALPHA: f64 = 0.01;
pub const DEFAULT_LAMBDA: f64 = 0.01;
pub const DEFAULT_TOLERANCE: f64 = 0.001;

/// Training configuration. Immutable once built.
///
/// - `max_iter`: upper bound on gradient-descent iterations.
/// - `alpha`: learning rate.
/// - `lambda`: L2 shrinkage strength; weights decay by `1 - lambda/n` each iteration.
/// - `tolerance`: training stops as soon as the loss is `<= tolerance`.
/// - `seed`: seeds weight initialization; `None` draws from OS entropy.
/// - `verbose`: prints one progress line per iteration to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogisticRegressionConfig {
    max_iter: usize,
    alpha: f64,
    lambda: f64,
    tolerance: f64,
    seed: Option<u64>,
    verbose: bool,
}

impl Default for LogisticRegressionConfig {
    fn default() -> Self {
        Self {
            max_iter: DEFAULT_MAX_ITER,
            alpha: DEFAULT_ALPHA,
            lambda: DEFAULT_LAMBDA,
            tolerance: DEFAULT_TOLERANCE,
            seed: None,
            verbose: true,
        }
    }
}

impl LogisticRegressionConfig {
    /// Unvalidated constructor for the four core hyperparameters.
    pub fn new(max_iter: usize, alpha: f64, lambda: f64, tolerance: f64) -> Self {
        Self {
            max_iter,
            alpha,
            lambda,
            tolerance,
            ..Self::default()
        }
    }

    pub fn builder() -> LogisticRegressionConfigBuilder {
        LogisticRegressionConfigBuilder::default()
    }

    /// Starts a builder pre-filled with this configuration, for layering overrides.
    pub fn to_builder(&self) -> LogisticRegressionConfigBuilder {
        LogisticRegressionConfigBuilder { config: *self }
    }

    pub fn max_iter(&self) -> usize {
        self.max_iter
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Checks `max_iter > 0`, `alpha > 0`, `lambda >= 0`, `tolerance >= 0`, all finite.
    pub fn validate(&self) -> Result<()> {
        if self.max_iter == 0 {
            return Err(invalid("max_iter", self.max_iter));
        }
        if !(self.alpha.is_finite() && self.alpha > 0.0) {
            return Err(invalid("alpha", self.alpha));
        }
        if !(self.lambda.is_finite() && self.lambda >= 0.0) {
            return Err(invalid("lambda", self.lambda));
        }
        if !(self.tolerance.is_finite() && self.tolerance >= 0.0) {
            return Err(invalid("tolerance", self.tolerance));
        }
        Ok(())
    }
}

fn invalid(name: &'static str, value: impl ToString) -> LogRegError {
    LogRegError::InvalidHyperparameter {
        name,
        value: value.to_string(),
    }
}

/// Fluent builder for [`LogisticRegressionConfig`].
///
/// Defaults:
/// - `max_iter`: 100
/// - `alpha`: 0.01
/// - `lambda`: 0.01
/// - `tolerance`: 0.001
/// - `seed`: `None`
/// - `verbose`: true
///
/// ```
/// use logreg_gd::model::LogisticRegressionConfig;
///
/// let config = LogisticRegressionConfig::builder()
///     .max_iter(500)
///     .alpha(0.05)
///     .seed(7)
///     .verbose(false)
///     .build()
///     .unwrap();
/// assert_eq!(config.max_iter(), 500);
/// assert_eq!(config.lambda(), 0.01);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LogisticRegressionConfigBuilder {
    config: LogisticRegressionConfig,
}

impl LogisticRegressionConfigBuilder {
    pub fn max_iter(mut self, max_iter: usize) -> Self {
        self.config.max_iter = max_iter;
        self
    }

    pub fn alpha(mut self, alpha: f64) -> Self {
        self.config.alpha = alpha;
        self
    }

    pub fn lambda(mut self, lambda: f64) -> Self {
        self.config.lambda = lambda;
        self
    }

    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.config.tolerance = tolerance;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// When `false`, suppresses the per-iteration progress line.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    /// Validates and returns the configuration.
    pub fn build(self) -> Result<LogisticRegressionConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
