//! Training data containers and the helpers the estimator uses to shape inputs.
//!
//! - `X` is a feature matrix of shape `(n_samples, n_features)`.
//! - `y` is a label vector of shape `(n_samples,)` with values in `{0, 1}`.
//!
//! # Example
//!
//! ```rust
//! use logreg_gd::dataset::{augment_with_bias, InMemoryDataset};
//! use ndarray::array;
//!
//! let dataset = InMemoryDataset::new(array![[1.0, 2.0], [3.0, 4.0]], array![0, 1]).unwrap();
//! assert_eq!(dataset.n_samples(), 2);
//!
//! let augmented = augment_with_bias(dataset.features());
//! assert_eq!(augmented.row(1).to_vec(), vec![3.0, 4.0, 1.0]);
//! ```

use crate::error::{LogRegError, Result};
use ndarray::{s, Array2, ArrayView1, ArrayView2};

pub mod memory;
pub use self::memory::{read_csv_matrix, split_label_column, InMemoryDataset};

/// Returns `[X | 1]`: `x` with a trailing column of ones aligned with the bias weight.
pub fn augment_with_bias(x: ArrayView2<'_, f64>) -> Array2<f64> {
    let mut augmented = Array2::<f64>::ones((x.nrows(), x.ncols() + 1));
    augmented.slice_mut(s![.., ..x.ncols()]).assign(&x);
    augmented
}

/// Checks that every label is `0` or `1`.
pub fn check_labels(y: ArrayView1<'_, u8>) -> Result<()> {
    match y.iter().position(|&label| label > 1) {
        Some(index) => Err(LogRegError::InvalidLabel {
            index,
            value: y[index],
        }),
        None => Ok(()),
    }
}

/// Checks the shape contract of a training pair: non-empty, one label per row.
pub fn check_training_shapes(x: ArrayView2<'_, f64>, y: ArrayView1<'_, u8>) -> Result<()> {
    if x.nrows() == 0 || x.ncols() == 0 {
        return Err(LogRegError::EmptyTrainingData);
    }
    if x.nrows() != y.len() {
        return Err(LogRegError::DimensionMismatch {
            context: "fit (rows of X vs length of y)",
            expected: x.nrows(),
            got: y.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_augment_with_bias_appends_ones() {
        let x = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
        let augmented = augment_with_bias(x.view());
        assert_eq!(augmented.dim(), (3, 3));
        assert_eq!(augmented.column(2).to_vec(), vec![1.0, 1.0, 1.0]);
        assert_eq!(augmented.column(0).to_vec(), vec![1.0, 3.0, 5.0]);
    }

    #[test]
    fn test_augment_with_bias_leaves_input_untouched() {
        let x = array![[7.0]];
        let _ = augment_with_bias(x.view());
        assert_eq!(x, array![[7.0]]);
    }

    #[test]
    fn test_check_labels_rejects_two() {
        let err = check_labels(array![0u8, 1, 2].view()).unwrap_err();
        assert!(matches!(
            err,
            LogRegError::InvalidLabel { index: 2, value: 2 }
        ));
    }

    #[test]
    fn test_check_labels_accepts_binary() {
        assert!(check_labels(array![0u8, 1, 1, 0].view()).is_ok());
    }

    #[test]
    fn test_check_training_shapes_row_mismatch() {
        let x = array![[1.0], [2.0]];
        let y = array![0u8];
        let err = check_training_shapes(x.view(), y.view()).unwrap_err();
        assert!(matches!(
            err,
            LogRegError::DimensionMismatch {
                expected: 2,
                got: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_check_training_shapes_empty() {
        let x = Array2::<f64>::zeros((0, 2));
        let y = ndarray::Array1::<u8>::zeros(0);
        assert!(matches!(
            check_training_shapes(x.view(), y.view()),
            Err(LogRegError::EmptyTrainingData)
        ));
    }
}
