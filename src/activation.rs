//! Logistic activation.

use ndarray::{Array1, ArrayView1};

/// Logistic function `σ(z) = 1 / (1 + e^{-z})`.
///
/// Branches on the sign of `z` so that `exp` never overflows for large `|z|`.
///
/// # Example
/// ```
/// use logreg_gd::activation::sigmoid;
/// assert_eq!(sigmoid(0.0), 0.5);
/// assert!(sigmoid(-100.0) < 1e-40);
/// ```
pub fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let ez = z.exp();
        ez / (1.0 + ez)
    }
}

/// Element-wise [`sigmoid`] over a vector of logits.
pub fn sigmoid_vec(z: ArrayView1<'_, f64>) -> Array1<f64> {
    z.mapv(sigmoid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn test_sigmoid_midpoint() {
        assert_eq!(sigmoid(0.0), 0.5);
    }

    #[test]
    fn test_sigmoid_is_symmetric() {
        for z in [0.1, 1.0, 2.5, 7.0] {
            assert_abs_diff_eq!(sigmoid(z) + sigmoid(-z), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_sigmoid_extremes_are_finite() {
        let lo = sigmoid(-1000.0);
        let hi = sigmoid(1000.0);
        assert!(lo.is_finite() && lo >= 0.0);
        assert!(hi.is_finite() && hi <= 1.0);
    }

    #[test]
    fn test_sigmoid_vec_matches_scalar() {
        let z = array![-2.0, 0.0, 2.0];
        let s = sigmoid_vec(z.view());
        assert_abs_diff_eq!(s[0], 1.0 / (1.0 + 2.0f64.exp()), epsilon = 1e-12);
        assert_eq!(s[1], 0.5);
        assert_abs_diff_eq!(s[2], 1.0 / (1.0 + (-2.0f64).exp()), epsilon = 1e-12);
    }
}
