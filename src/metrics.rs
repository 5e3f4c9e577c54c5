//! Evaluation metrics for binary classifiers.

use crate::error::{LogRegError, Result};
use ndarray::ArrayView1;

/// Fraction of positions where `y_pred` equals `y_true`.
///
/// # Errors
/// - [`LogRegError::DimensionMismatch`] if the lengths differ.
/// - [`LogRegError::EmptyTrainingData`] if both are empty.
///
/// # Example
/// ```
/// use logreg_gd::metrics::accuracy;
/// use ndarray::array;
/// let acc = accuracy(array![0u8, 1, 1, 0].view(), array![0u8, 1, 0, 0].view()).unwrap();
/// assert_eq!(acc, 0.75);
/// ```
pub fn accuracy(y_true: ArrayView1<'_, u8>, y_pred: ArrayView1<'_, u8>) -> Result<f64> {
    if y_true.len() != y_pred.len() {
        return Err(LogRegError::DimensionMismatch {
            context: "accuracy",
            expected: y_true.len(),
            got: y_pred.len(),
        });
    }
    if y_true.is_empty() {
        return Err(LogRegError::EmptyTrainingData);
    }
    let correct = y_true
        .iter()
        .zip(y_pred.iter())
        .filter(|(t, p)| t == p)
        .count();
    Ok(correct as f64 / y_true.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array1};

    #[test]
    fn test_accuracy_perfect() {
        let y = array![1u8, 0, 1];
        assert_eq!(accuracy(y.view(), y.view()).unwrap(), 1.0);
    }

    #[test]
    fn test_accuracy_all_wrong() {
        assert_eq!(
            accuracy(array![1u8, 0].view(), array![0u8, 1].view()).unwrap(),
            0.0
        );
    }

    #[test]
    fn test_accuracy_length_mismatch() {
        let err = accuracy(array![1u8, 0].view(), array![1u8].view()).unwrap_err();
        assert!(matches!(err, LogRegError::DimensionMismatch { .. }));
    }

    #[test]
    fn test_accuracy_empty() {
        let empty = Array1::<u8>::zeros(0);
        assert!(matches!(
            accuracy(empty.view(), empty.view()),
            Err(LogRegError::EmptyTrainingData)
        ));
    }
}
