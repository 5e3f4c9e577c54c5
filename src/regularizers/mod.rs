use ndarray::Array1;

/// Weight regularization applied once per training iteration, before the gradient step.
///
/// Regularizers here act as multiplicative weight decay: every weight (bias included)
/// is scaled by [`Regularizer::decay_factor`].
pub trait Regularizer {
    /// Factor each weight is multiplied by for a batch of `n_samples`.
    fn decay_factor(&self, n_samples: usize) -> f64;

    /// Returns `decay_factor(n_samples) * weights`.
    fn shrink(&self, weights: &Array1<f64>, n_samples: usize) -> Array1<f64> {
        weights * self.decay_factor(n_samples)
    }
}

/// L2 shrinkage: `w ← (1 - λ/n) · w`.
///
/// Equivalent to a gradient step on `λ/(2·n) · ‖w‖²` folded into the update.
#[derive(Debug, Clone, Copy)]
pub struct L2Shrinkage {
    lambda: f64,
}

impl L2Shrinkage {
    pub fn new(lambda: f64) -> Self {
        Self { lambda }
    }

    pub fn lambda(&self) -> f64 {
        self.lambda
    }
}

impl Regularizer for L2Shrinkage {
    fn decay_factor(&self, n_samples: usize) -> f64 {
        if n_samples == 0 {
            return 1.0;
        }
        1.0 - self.lambda / n_samples as f64
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoRegularizer;

impl Regularizer for NoRegularizer {
    fn decay_factor(&self, _n_samples: usize) -> f64 {
        1.0
    }
}
