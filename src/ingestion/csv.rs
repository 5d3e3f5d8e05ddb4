//! CSV read/write implementation.

use std::path::Path;

use crate::error::PipelineResult;
use crate::types::DataSet;

/// Read a CSV file into an in-memory [`DataSet`].
///
/// Rules:
///
/// - CSV must have a header row; it becomes [`DataSet::headers`].
/// - Every cell is kept as a raw string (no type coercion).
/// - Ragged rows (wrong field count) are CSV errors.
pub fn read_csv_from_path(path: impl AsRef<Path>) -> PipelineResult<DataSet> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;
    read_csv_from_reader(&mut rdr)
}

/// Read CSV data from an existing CSV reader.
pub fn read_csv_from_reader<R: std::io::Read>(rdr: &mut csv::Reader<R>) -> PipelineResult<DataSet> {
    let headers = rdr.headers()?.iter().map(str::to_owned).collect();

    let mut rows: Vec<Vec<String>> = Vec::new();
    for result in rdr.records() {
        let record = result?;
        rows.push(record.iter().map(str::to_owned).collect());
    }

    Ok(DataSet::new(headers, rows))
}

/// Write a [`DataSet`] to a CSV file at `path`.
///
/// The header row is always written first; no synthetic index column is added.
pub fn write_csv_to_path(dataset: &DataSet, path: impl AsRef<Path>) -> PipelineResult<()> {
    let mut wtr = csv::WriterBuilder::new().from_path(path)?;
    write_csv_to_writer(dataset, &mut wtr)
}

/// Write a [`DataSet`] to an existing CSV writer.
pub fn write_csv_to_writer<W: std::io::Write>(
    dataset: &DataSet,
    wtr: &mut csv::Writer<W>,
) -> PipelineResult<()> {
    wtr.write_record(&dataset.headers)?;
    for row in &dataset.rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}
