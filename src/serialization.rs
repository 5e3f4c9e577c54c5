//! Persistence of fitted weight vectors.
//!
//! Two formats are supported:
//!
//! - **Plain text** (the default): one line of whitespace-separated decimal
//!   numbers, feature weights first and the bias last. No header, no trailing
//!   separator. Dimensionality is inferred from the token count.
//! - **JSON envelope**: [`WeightsEnvelope`] stores the feature count next to the
//!   weights (and optionally the training configuration), and is validated on load.
//!
//! Values are written with Rust's shortest round-trip `f64` formatting, so a
//! save/load cycle reproduces the weights bit for bit.

use crate::error::{LogRegError, Result};
use crate::model::LogisticRegressionConfig;
use ndarray::{Array1, ArrayView1};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Renders weights as a single space-separated line.
///
/// ```
/// use logreg_gd::serialization::format_weights;
/// use ndarray::array;
/// assert_eq!(format_weights(array![0.5, -2.0, 1.25].view()), "0.5 -2 1.25");
/// ```
pub fn format_weights(weights: ArrayView1<'_, f64>) -> String {
    weights
        .iter()
        .map(|w| w.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parses every whitespace-separated token of `line` as an `f64`.
///
/// The result has exactly as many elements as there are tokens. A malformed
/// token rejects the whole line; a line with no tokens is [`LogRegError::EmptyWeights`].
pub fn parse_weights(line: &str) -> Result<Array1<f64>> {
    let weights = line
        .split_whitespace()
        .enumerate()
        .map(|(position, token)| {
            token.parse::<f64>().map_err(|_| LogRegError::Parse {
                token: token.to_string(),
                position,
            })
        })
        .collect::<Result<Vec<f64>>>()?;
    if weights.is_empty() {
        return Err(LogRegError::EmptyWeights);
    }
    Ok(Array1::from_vec(weights))
}

/// Writes weights to `path` in the plain text format, truncating any existing file.
pub fn write_weights<P: AsRef<Path>>(path: P, weights: ArrayView1<'_, f64>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| LogRegError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(format_weights(weights).as_bytes())
        .and_then(|_| writer.flush())
        .map_err(|e| LogRegError::io(path, e))
}

/// Reads the first line of `path` and parses it with [`parse_weights`].
pub fn read_weights<P: AsRef<Path>>(path: P) -> Result<Array1<f64>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| LogRegError::io(path, e))?;
    let mut line = String::new();
    BufReader::new(file)
        .read_line(&mut line)
        .map_err(|e| LogRegError::io(path, e))?;
    parse_weights(&line)
}

/// Self-describing weight file: records `n_features` so loads can be checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightsEnvelope {
    pub n_features: usize,
    /// `n_features` coefficients followed by the bias.
    pub weights: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<LogisticRegressionConfig>,
}

impl WeightsEnvelope {
    pub fn new(weights: ArrayView1<'_, f64>, config: Option<LogisticRegressionConfig>) -> Self {
        Self {
            n_features: weights.len().saturating_sub(1),
            weights: weights.to_vec(),
            config,
        }
    }

    /// Checks `weights.len() == n_features + 1`.
    pub fn validate(&self) -> Result<()> {
        if self.weights.is_empty() {
            return Err(LogRegError::EmptyWeights);
        }
        if self.weights.len() != self.n_features + 1 {
            return Err(LogRegError::DimensionMismatch {
                context: "weights envelope",
                expected: self.n_features + 1,
                got: self.weights.len(),
            });
        }
        Ok(())
    }

    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| LogRegError::io(path, e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush().map_err(|e| LogRegError::io(path, e))
    }

    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| LogRegError::io(path, e))?;
        let envelope: Self = serde_json::from_reader(BufReader::new(file))?;
        envelope.validate()?;
        Ok(envelope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_format_has_no_trailing_separator() {
        let line = format_weights(array![1.0, 2.5].view());
        assert_eq!(line, "1 2.5");
        assert!(!line.ends_with(' '));
        assert!(!line.ends_with('\n'));
    }

    #[test]
    fn test_parse_counts_tokens_exactly() {
        // Trailing whitespace must not produce an extra value.
        let w = parse_weights("0.1 0.2 0.3   \n").unwrap();
        assert_eq!(w, array![0.1, 0.2, 0.3]);
    }

    #[test]
    fn test_parse_accepts_mixed_whitespace_and_exponents() {
        let w = parse_weights("\t1e-3  -4\t2.5E2").unwrap();
        assert_eq!(w, array![0.001, -4.0, 250.0]);
    }

    #[test]
    fn test_parse_rejects_bad_token() {
        let err = parse_weights("1.0 two 3.0").unwrap_err();
        assert!(matches!(
            err,
            LogRegError::Parse { ref token, position: 1 } if token == "two"
        ));
    }

    #[test]
    fn test_parse_rejects_empty_line() {
        assert!(matches!(parse_weights("   "), Err(LogRegError::EmptyWeights)));
    }

    #[test]
    fn test_write_read_is_exact() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("w.txt");
        let w = array![0.1, -1.0 / 3.0, 123456.789, 1e-12];

        write_weights(&path, w.view())?;
        let contents = std::fs::read_to_string(&path)?;
        assert_eq!(contents.lines().count(), 1);

        let back = read_weights(&path)?;
        assert_eq!(back, w);
        Ok(())
    }

    #[test]
    fn test_read_only_uses_first_line() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("w.txt");
        std::fs::write(&path, "1 2 3\n4 5 6\n")?;
        assert_eq!(read_weights(&path)?, array![1.0, 2.0, 3.0]);
        Ok(())
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_weights("/no/such/dir/w.txt").unwrap_err();
        assert!(matches!(err, LogRegError::Io { .. }));
    }

    #[test]
    fn test_write_into_missing_dir() {
        let err = write_weights("/no/such/dir/w.txt", array![1.0].view()).unwrap_err();
        assert!(matches!(err, LogRegError::Io { .. }));
    }

    #[test]
    fn test_envelope_roundtrip() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("model.json");
        let config = LogisticRegressionConfig::new(10, 0.1, 0.0, 0.0);
        let envelope = WeightsEnvelope::new(array![0.5, 1.5, -2.0].view(), Some(config));
        assert_eq!(envelope.n_features, 2);

        envelope.save_json(&path)?;
        let loaded = WeightsEnvelope::load_json(&path)?;
        assert_eq!(loaded, envelope);
        Ok(())
    }

    #[test]
    fn test_envelope_rejects_inconsistent_dimension(
    ) -> std::result::Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("model.json");
        std::fs::write(&path, r#"{"n_features": 3, "weights": [1.0, 2.0]}"#)?;

        let err = WeightsEnvelope::load_json(&path).unwrap_err();
        assert!(matches!(
            err,
            LogRegError::DimensionMismatch {
                expected: 4,
                got: 2,
                ..
            }
        ));
        Ok(())
    }

    #[test]
    fn test_envelope_rejects_malformed_json() -> std::result::Result<(), Box<dyn std::error::Error>>
    {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("model.json");
        std::fs::write(&path, "not json")?;
        assert!(matches!(
            WeightsEnvelope::load_json(&path),
            Err(LogRegError::Json(_))
        ));
        Ok(())
    }
}
