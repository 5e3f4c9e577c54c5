//! # logreg-gd
//!
//! Binary logistic regression trained by regularized full-batch gradient descent.
//!
//! ## Core Design Principles
//!
//! - **Training/Inference Separation**: the estimator owns only its configuration
//!   and weight vector; the loop lives in [`trainer`], and the loss, regularizer and
//!   optimizer it combines are separate components.
//! - **Explicit Errors**: shape mismatches, bad labels and use-before-fit surface as
//!   [`LogRegError`] instead of panics.
//! - **Plain Weight Files**: a fitted model is one line of numbers (coefficients,
//!   then bias) that round-trips exactly.
//!
//! ## Quick Start
//!
//! ```rust
//! use logreg_gd::model::{BinaryClassifier, LogisticRegression, LogisticRegressionConfig};
//! use ndarray::array;
//!
//! let config = LogisticRegressionConfig::builder()
//!     .max_iter(1000)
//!     .alpha(0.05)
//!     .seed(42)
//!     .verbose(false)
//!     .build()
//!     .unwrap();
//! let mut model = LogisticRegression::with_config(config);
//!
//! let x = array![[0.0, 0.5], [0.5, 0.0], [5.0, 4.5], [4.5, 5.0]];
//! let y = array![0, 0, 1, 1];
//! model.fit(x.view(), y.view()).unwrap();
//!
//! let probs = model.predict_prob(x.view()).unwrap();
//! assert!(probs[0] < 0.5 && probs[3] > 0.5);
//! ```
//!
//! ## Module Structure
//!
//! - `activation`: the logistic function
//! - `loss`: binary cross-entropy and its gradient
//! - `regularizers`: multiplicative L2 weight decay
//! - `optimizer`: gradient-descent parameter updates
//! - `trainer`: the training loop with early stopping
//! - `model`: the [`LogisticRegression`] estimator and its configuration
//! - `dataset`: in-memory datasets and CSV loading
//! - `serialization`: weight file formats
//! - `metrics`: classification accuracy

/// Logistic activation.
pub mod activation;

/// Data loading utilities and input validation.
pub mod dataset;

/// Error type shared by every module.
pub mod error;

/// Differentiable loss functions for model training.
pub mod loss;

/// Evaluation metrics.
pub mod metrics;

/// The logistic regression estimator and its configuration.
pub mod model;

/// Optimization algorithms for parameter updates.
pub mod optimizer;

/// Weight regularization strategies.
pub mod regularizers;

/// Weight persistence formats.
pub mod serialization;

/// High-level training loop orchestration.
pub mod trainer;

pub use error::{LogRegError, Result};
pub use model::{BinaryClassifier, LogisticRegression, LogisticRegressionConfig};
