use sheetcopy_csv::{CsvSink, CsvWriteOptions, LineTerminator, RecordSink};

#[test]
fn writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");

    let options = CsvWriteOptions {
        line_terminator: LineTerminator::LF,
        ..Default::default()
    };
    let mut sink = CsvSink::create(&path, &options).unwrap();
    sink.write_record(&["A1".to_string(), "B1".to_string()])
        .unwrap();
    sink.write_record(&["A2".to_string(), String::new()]).unwrap();
    sink.flush();
    assert!(sink.error().is_none());
    drop(sink);

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "A1,B1\nA2,\n");
}

#[test]
fn create_in_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.csv");
    assert!(CsvSink::create(path, &CsvWriteOptions::default()).is_err());
}
