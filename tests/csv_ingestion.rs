use dataset_ingestion::ingestion::csv::{
    read_csv_from_path, read_csv_from_reader, write_csv_to_writer,
};
use dataset_ingestion::types::DataSet;

#[test]
fn read_csv_from_path_happy_path() {
    let ds = read_csv_from_path("tests/fixtures/students.csv").unwrap();

    assert_eq!(ds.headers, vec!["id", "name", "score"]);
    assert_eq!(ds.row_count(), 5);
    assert_eq!(ds.rows[0], vec!["1", "Ada", "98.5"]);
    assert_eq!(ds.rows[4], vec!["5", "Donald", "88.0"]);
}

#[test]
fn read_csv_keeps_cells_as_raw_strings() {
    let input = "id,score\n007,3.50\n";
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input.as_bytes());

    let ds = read_csv_from_reader(&mut rdr).unwrap();
    assert_eq!(ds.rows[0], vec!["007", "3.50"]);
}

#[test]
fn read_csv_errors_on_ragged_row() {
    let input = "id,name\n1,Ada\n2\n";
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input.as_bytes());

    let err = read_csv_from_reader(&mut rdr).unwrap_err();
    assert!(err.to_string().contains("csv error"));
}

#[test]
fn write_csv_emits_header_then_rows_without_index_column() {
    let ds = DataSet::new(
        vec!["id".to_string(), "score".to_string()],
        vec![
            vec!["1".to_string(), "72".to_string()],
            vec!["2".to_string(), "88".to_string()],
        ],
    );

    let mut wtr = csv::WriterBuilder::new().from_writer(Vec::new());
    write_csv_to_writer(&ds, &mut wtr).unwrap();
    let bytes = wtr.into_inner().unwrap();

    assert_eq!(String::from_utf8(bytes).unwrap(), "id,score\n1,72\n2,88\n");
}

#[test]
fn read_then_write_reproduces_the_input() {
    let ds = read_csv_from_path("tests/fixtures/students.csv").unwrap();

    let mut wtr = csv::WriterBuilder::new().from_writer(Vec::new());
    write_csv_to_writer(&ds, &mut wtr).unwrap();
    let written = String::from_utf8(wtr.into_inner().unwrap()).unwrap();

    let original = std::fs::read_to_string("tests/fixtures/students.csv").unwrap();
    assert_eq!(written, original);
}
