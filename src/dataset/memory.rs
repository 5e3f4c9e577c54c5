use crate::dataset::{check_labels, check_training_shapes};
use crate::error::{LogRegError, Result};
use csv::ReaderBuilder;
use ndarray::{s, Array1, Array2, ArrayView1, ArrayView2};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// A validated `(X, y)` pair held in memory.
#[derive(Debug, Clone)]
pub struct InMemoryDataset {
    x: Array2<f64>,
    y: Array1<u8>,
}

impl InMemoryDataset {
    /// Creates a dataset, rejecting empty data, row/label count mismatches and
    /// labels outside `{0, 1}`.
    pub fn new(x: Array2<f64>, y: Array1<u8>) -> Result<Self> {
        check_training_shapes(x.view(), y.view())?;
        check_labels(y.view())?;
        Ok(Self { x, y })
    }

    /// Builds a dataset from row vectors.
    pub fn from_rows(rows: Vec<Vec<f64>>, y: Vec<u8>) -> Result<Self> {
        let n_samples = rows.len();
        let n_features = rows.first().map(|r| r.len()).unwrap_or(0);
        if let Some(row) = rows.iter().position(|r| r.len() != n_features) {
            return Err(LogRegError::DimensionMismatch {
                context: "row length",
                expected: n_features,
                got: rows[row].len(),
            });
        }
        let flat: Vec<f64> = rows.into_iter().flatten().collect();
        let got = flat.len();
        let x = Array2::from_shape_vec((n_samples, n_features), flat).map_err(|_| {
            LogRegError::DimensionMismatch {
                context: "row data",
                expected: n_samples * n_features,
                got,
            }
        })?;
        Self::new(x, Array1::from_vec(y))
    }

    /// Loads a dataset from a CSV file.
    ///
    /// The last column is the label (`0` or `1`, `0.0`/`1.0` accepted); every other
    /// column is a feature.
    ///
    /// ```no_run
    /// use logreg_gd::dataset::InMemoryDataset;
    /// let dataset = InMemoryDataset::from_csv("train.csv", true).unwrap();
    /// ```
    pub fn from_csv<P: AsRef<Path>>(path: P, has_headers: bool) -> Result<Self> {
        let table = read_csv_matrix(path, has_headers)?;
        if table.nrows() == 0 {
            return Err(LogRegError::EmptyTrainingData);
        }
        if table.ncols() < 2 {
            return Err(LogRegError::DimensionMismatch {
                context: "CSV columns (features + label)",
                expected: 2,
                got: table.ncols(),
            });
        }
        let (x, y) = split_label_column(table.view())?;
        Self::new(x, y)
    }

    pub fn features(&self) -> ArrayView2<'_, f64> {
        self.x.view()
    }

    pub fn labels(&self) -> ArrayView1<'_, u8> {
        self.y.view()
    }

    pub fn n_samples(&self) -> usize {
        self.x.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.x.ncols()
    }
}

/// Reads a purely numeric CSV file into a matrix, one row per record.
///
/// Every record must have the same number of fields.
pub fn read_csv_matrix<P: AsRef<Path>>(path: P, has_headers: bool) -> Result<Array2<f64>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| LogRegError::io(path, e))?;
    let mut rdr = ReaderBuilder::new()
        .has_headers(has_headers)
        .trim(csv::Trim::All)
        .from_reader(BufReader::new(file));

    let mut values = Vec::new();
    let mut n_rows = 0;
    let mut n_cols = None;
    for (row, record) in rdr.records().enumerate() {
        let record = record?;
        let expected = *n_cols.get_or_insert(record.len());
        if record.len() != expected {
            return Err(LogRegError::DimensionMismatch {
                context: "CSV row length",
                expected,
                got: record.len(),
            });
        }
        for (column, field) in record.iter().enumerate() {
            let value: f64 = field.parse().map_err(|_| LogRegError::CsvValue {
                row,
                column,
                value: field.to_string(),
            })?;
            values.push(value);
        }
        n_rows += 1;
    }
    tracing::debug!(path = %path.display(), n_rows, "read CSV matrix");

    let n_cols = n_cols.unwrap_or(0);
    let got = values.len();
    Array2::from_shape_vec((n_rows, n_cols), values).map_err(|_| LogRegError::DimensionMismatch {
        context: "CSV data",
        expected: n_rows * n_cols,
        got,
    })
}

/// Splits off the last column of `table` as `{0, 1}` labels.
pub fn split_label_column(table: ArrayView2<'_, f64>) -> Result<(Array2<f64>, Array1<u8>)> {
    let Some(label_column) = table.ncols().checked_sub(1) else {
        return Err(LogRegError::EmptyTrainingData);
    };
    let x = table.slice(s![.., ..label_column]).to_owned();
    let y = table
        .column(label_column)
        .iter()
        .enumerate()
        .map(|(row, &value)| {
            parse_label(value).ok_or_else(|| LogRegError::CsvValue {
                row,
                column: label_column,
                value: value.to_string(),
            })
        })
        .collect::<Result<Array1<u8>>>()?;
    Ok((x, y))
}

fn parse_label(value: f64) -> Option<u8> {
    if value == 0.0 {
        Some(0)
    } else if value == 1.0 {
        Some(1)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use std::io::Write;

    #[test]
    fn test_new_valid() {
        let ds = InMemoryDataset::new(array![[1.0], [2.0]], array![0, 1]).unwrap();
        assert_eq!(ds.n_samples(), 2);
        assert_eq!(ds.n_features(), 1);
    }

    #[test]
    fn test_new_mismatched_lengths() {
        let err = InMemoryDataset::new(array![[1.0], [2.0]], array![0]).unwrap_err();
        assert!(matches!(err, LogRegError::DimensionMismatch { .. }));
    }

    #[test]
    fn test_new_bad_label() {
        let err = InMemoryDataset::new(array![[1.0], [2.0]], array![0, 3]).unwrap_err();
        assert!(matches!(err, LogRegError::InvalidLabel { index: 1, value: 3 }));
    }

    #[test]
    fn test_from_rows_ragged() {
        let err = InMemoryDataset::from_rows(vec![vec![1.0, 2.0], vec![3.0]], vec![0, 1])
            .unwrap_err();
        assert!(matches!(err, LogRegError::DimensionMismatch { .. }));
    }

    #[test]
    fn test_from_rows_empty() {
        let err = InMemoryDataset::from_rows(vec![], vec![]).unwrap_err();
        assert!(matches!(err, LogRegError::EmptyTrainingData));
    }

    #[test]
    fn test_from_csv_with_header() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("data.csv");
        let mut f = File::create(&path)?;
        writeln!(f, "x1,x2,label")?;
        writeln!(f, "0.5, 1.5, 0")?;
        writeln!(f, "4.0,5.0,1.0")?;
        drop(f);

        let ds = InMemoryDataset::from_csv(&path, true)?;
        assert_eq!(ds.n_samples(), 2);
        assert_eq!(ds.n_features(), 2);
        assert_eq!(ds.features().row(0).to_vec(), vec![0.5, 1.5]);
        assert_eq!(ds.labels().to_vec(), vec![0, 1]);
        Ok(())
    }

    #[test]
    fn test_from_csv_bad_field() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("bad.csv");
        std::fs::write(&path, "1.0,abc,0\n")?;

        let err = InMemoryDataset::from_csv(&path, false).unwrap_err();
        assert!(matches!(
            err,
            LogRegError::CsvValue { row: 0, column: 1, .. }
        ));
        Ok(())
    }

    #[test]
    fn test_from_csv_non_binary_label() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("labels.csv");
        std::fs::write(&path, "1.0,0.5\n")?;

        let err = InMemoryDataset::from_csv(&path, false).unwrap_err();
        assert!(matches!(err, LogRegError::CsvValue { column: 1, .. }));
        Ok(())
    }

    #[test]
    fn test_from_csv_missing_file() {
        let err = InMemoryDataset::from_csv("/definitely/not/here.csv", true).unwrap_err();
        assert!(matches!(err, LogRegError::Io { .. }));
    }

    #[test]
    fn test_read_csv_matrix_without_labels() -> std::result::Result<(), Box<dyn std::error::Error>>
    {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("x.csv");
        std::fs::write(&path, "1,2\n3,4\n5,6\n")?;

        let table = read_csv_matrix(&path, false)?;
        assert_eq!(table, array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]);
        Ok(())
    }

    #[test]
    fn test_split_label_column() {
        let table = array![[0.5, 2.0, 1.0], [1.5, -1.0, 0.0]];
        let (x, y) = split_label_column(table.view()).unwrap();
        assert_eq!(x, array![[0.5, 2.0], [1.5, -1.0]]);
        assert_eq!(y, array![1, 0]);
    }

    #[test]
    fn test_split_label_column_rejects_fractional_label() {
        let err = split_label_column(array![[1.0, 0.25]].view()).unwrap_err();
        assert!(matches!(err, LogRegError::CsvValue { row: 0, column: 1, .. }));
    }

    #[test]
    fn test_from_csv_empty_file() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("empty.csv");
        std::fs::write(&path, "a,b,label\n")?;
        assert!(matches!(
            InMemoryDataset::from_csv(&path, true),
            Err(LogRegError::EmptyTrainingData)
        ));
        Ok(())
    }
}
