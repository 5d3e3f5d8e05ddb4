//! Core data model types for ingestion.
//!
//! This crate ingests a CSV file into an in-memory [`DataSet`] and persists it (and
//! its train/test partitions) back to CSV. Cells are kept as raw strings so that the
//! persisted raw copy reproduces the input exactly; this stage never interprets
//! values.

/// In-memory tabular dataset.
///
/// Rows are stored as `Vec<Vec<String>>` in the same column order as `headers`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSet {
    /// Column names, in file order.
    pub headers: Vec<String>,
    /// Row-major cell storage.
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    /// Create a dataset from headers and rows.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Number of rows in the dataset (excluding the header).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// `(rows, columns)` shape of the dataset.
    pub fn shape(&self) -> (usize, usize) {
        (self.row_count(), self.column_count())
    }

    /// Returns `true` if the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the index of a column by name, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }
}

#[cfg(test)]
mod tests {
    use super::DataSet;

    fn sample_dataset() -> DataSet {
        DataSet::new(
            vec!["id".to_string(), "score".to_string()],
            vec![
                vec!["1".to_string(), "72".to_string()],
                vec!["2".to_string(), "88".to_string()],
                vec!["3".to_string(), "64".to_string()],
            ],
        )
    }

    #[test]
    fn shape_reports_rows_and_columns() {
        let ds = sample_dataset();
        assert_eq!(ds.shape(), (3, 2));
        assert!(!ds.is_empty());
    }

    #[test]
    fn index_of_finds_columns() {
        let ds = sample_dataset();
        assert_eq!(ds.index_of("id"), Some(0));
        assert_eq!(ds.index_of("score"), Some(1));
        assert_eq!(ds.index_of("missing"), None);
    }
}
