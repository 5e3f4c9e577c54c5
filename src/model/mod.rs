pub mod config;
pub mod logistic;

pub use config::{LogisticRegressionConfig, LogisticRegressionConfigBuilder};
pub use logistic::LogisticRegression;

use crate::error::Result;
use ndarray::{Array1, ArrayView2};

/// Probability above which a sample is assigned label `1`.
///
/// A probability of exactly `0.5` maps to `0`.
pub const DECISION_THRESHOLD: f64 = 0.5;

/// Inference interface of a fitted binary classifier.
pub trait BinaryClassifier {
    /// Probability of the positive class for every row of `x`.
    fn predict_prob(&self, x: ArrayView2<'_, f64>) -> Result<Array1<f64>>;

    /// Labels obtained by thresholding [`predict_prob`](Self::predict_prob) at
    /// [`DECISION_THRESHOLD`] (strictly greater means `1`).
    fn predict(&self, x: ArrayView2<'_, f64>) -> Result<Array1<u8>> {
        let probs = self.predict_prob(x)?;
        Ok(probs.mapv(|p| u8::from(p > DECISION_THRESHOLD)))
    }
}
