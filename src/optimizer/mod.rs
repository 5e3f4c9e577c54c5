use ndarray::Array1;

/// Trait for gradient-based optimizers.
///
/// Optimizers only decide how a gradient turns into a parameter update. The
/// training loop lives in [`Trainer`](crate::trainer::Trainer), so any optimizer
/// can be paired with any loss and regularizer.
pub trait Optimizer {
    /// Performs one update and returns the new parameters.
    ///
    /// Inputs are not mutated.
    fn step(&self, params: &Array1<f64>, gradients: &Array1<f64>) -> Array1<f64>;
}

/// Plain gradient descent: `θ ← θ - η · ∇L(θ)`.
///
/// Stateless (no momentum, no adaptive rates). The trainer always feeds it the
/// full-batch gradient.
///
/// # Example
/// ```rust
/// use logreg_gd::optimizer::{Optimizer, SGD};
/// use ndarray::array;
///
/// let sgd = SGD::new(0.1);
/// let updated = sgd.step(&array![1.0, 2.0], &array![10.0, -10.0]);
/// assert_eq!(updated, array![0.0, 3.0]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SGD {
    lr: f64,
}

impl SGD {
    /// Creates a new optimizer with learning rate `lr`.
    pub fn new(lr: f64) -> Self {
        Self { lr }
    }

    /// Returns the learning rate.
    pub fn learning_rate(&self) -> f64 {
        self.lr
    }
}

impl Optimizer for SGD {
    fn step(&self, params: &Array1<f64>, gradients: &Array1<f64>) -> Array1<f64> {
        debug_assert_eq!(params.len(), gradients.len());
        let mut updated = params.clone();
        updated.scaled_add(-self.lr, gradients);
        updated
    }
}
