use ndarray::{Array1, ArrayView1};

/// Probabilities are clamped into `[EPS, 1 - EPS]` before taking logs.
pub const EPS: f64 = 1e-15;

/// A differentiable loss over predicted probabilities.
///
/// Implementors must define:
/// - How to compute the scalar loss value (for logging and early stopping).
/// - How to compute the gradient of the loss w.r.t. the model's logits.
///
/// The gradient is what the trainer multiplies by `X'ᵗ` to get the weight gradient.
pub trait Loss {
    /// Computes the scalar loss value.
    fn loss(&self, prediction: ArrayView1<'_, f64>, target: ArrayView1<'_, f64>) -> f64;

    /// Computes `∂L/∂z` for every sample, where `z` is the logit behind `prediction`.
    ///
    /// The result is not divided by the number of samples.
    fn grad_wrt_logits(
        &self,
        prediction: ArrayView1<'_, f64>,
        target: ArrayView1<'_, f64>,
    ) -> Array1<f64>;
}

/// Binary cross-entropy averaged over samples:
/// `L = -(1/n) * Σ (t_i * ln(p_i) + (1 - t_i) * ln(1 - p_i))`
///
/// Gradient w.r.t. the logit of a sigmoid output: `∂L/∂z_i = p_i - t_i`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CrossEntropyLoss;

impl Loss for CrossEntropyLoss {
    fn loss(&self, prediction: ArrayView1<'_, f64>, target: ArrayView1<'_, f64>) -> f64 {
        debug_assert_eq!(prediction.len(), target.len());
        let n = prediction.len();
        if n == 0 {
            return 0.0;
        }
        let total: f64 = prediction
            .iter()
            .zip(target.iter())
            .map(|(&p, &t)| {
                let p = p.clamp(EPS, 1.0 - EPS);
                -(t * p.ln() + (1.0 - t) * (1.0 - p).ln())
            })
            .sum();
        total / n as f64
    }

    fn grad_wrt_logits(
        &self,
        prediction: ArrayView1<'_, f64>,
        target: ArrayView1<'_, f64>,
    ) -> Array1<f64> {
        debug_assert_eq!(prediction.len(), target.len());
        &prediction - &target
    }
}

/// Mean binary cross-entropy of integer labels against predicted probabilities.
///
/// # Example
/// ```
/// use logreg_gd::loss::cross_entropy_loss;
/// use ndarray::array;
/// let loss = cross_entropy_loss(array![1u8, 0].view(), array![0.5, 0.5].view());
/// assert!((loss - 2.0f64.ln()).abs() < 1e-12);
/// ```
pub fn cross_entropy_loss(y: ArrayView1<'_, u8>, y_pred: ArrayView1<'_, f64>) -> f64 {
    let target = y.mapv(f64::from);
    CrossEntropyLoss.loss(y_pred, target.view())
}
