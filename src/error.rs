//! Error types for training, inference and weight persistence.

use std::io;
use std::path::PathBuf;

/// Errors produced by the estimator and its collaborators.
#[derive(Debug, thiserror::Error)]
pub enum LogRegError {
    /// A hyperparameter is outside its valid range.
    #[error("invalid hyperparameter {name}: {value}")]
    InvalidHyperparameter { name: &'static str, value: String },

    /// Shape mismatch between inputs, or between inputs and the weight vector.
    #[error("dimension mismatch in {context}: expected {expected}, got {got}")]
    DimensionMismatch {
        context: &'static str,
        expected: usize,
        got: usize,
    },

    /// Training data has zero samples or zero features.
    #[error("training data is empty")]
    EmptyTrainingData,

    /// A label outside `{0, 1}`.
    #[error("label at index {index} is {value}, expected 0 or 1")]
    InvalidLabel { index: usize, value: u8 },

    /// Model used before calling `fit` or loading weights.
    #[error("model is not fitted: call fit or load weights first")]
    NotFitted,

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A token in a weight file is not a decimal number.
    #[error("cannot parse weight token {token:?} at position {position}")]
    Parse { token: String, position: usize },

    /// A weight file with no numeric tokens.
    #[error("weight file contains no values")]
    EmptyWeights,

    /// A CSV field that is not a number, or a label that is not 0 or 1.
    #[error("bad CSV value {value:?} at row {row}, column {column}")]
    CsvValue {
        row: usize,
        column: usize,
        value: String,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl LogRegError {
    /// Wraps an I/O failure together with the path it concerns.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        LogRegError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, LogRegError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_message() {
        let err = LogRegError::DimensionMismatch {
            context: "fit",
            expected: 3,
            got: 2,
        };
        assert_eq!(
            err.to_string(),
            "dimension mismatch in fit: expected 3, got 2"
        );
    }

    #[test]
    fn test_io_error_keeps_path_and_source() {
        let err = LogRegError::io(
            "/nope/weights.txt",
            io::Error::new(io::ErrorKind::NotFound, "missing"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/nope/weights.txt"));
        assert!(msg.contains("missing"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_parse_error_message() {
        let err = LogRegError::Parse {
            token: "abc".into(),
            position: 2,
        };
        assert_eq!(
            err.to_string(),
            "cannot parse weight token \"abc\" at position 2"
        );
    }
}
