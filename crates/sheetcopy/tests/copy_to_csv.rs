//! End-to-end copy from a JSON value document into CSV

use pretty_assertions::assert_eq;
use sheetcopy::prelude::*;
use sheetcopy::LineTerminator;
use std::fs;

const DOC: &str = r#"{
    "majorDimension": "ROWS",
    "values": [
        ["item", "qty", "note"],
        ["apple", "3", "red, crisp"],
        ["pear", "5"],
        ["plum", "7", "ripe"]
    ]
}"#;

fn source_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("abc123.json"), DOC).unwrap();
    dir
}

fn lf() -> CsvWriteOptions {
    CsvWriteOptions {
        line_terminator: LineTerminator::LF,
        ..Default::default()
    }
}

#[test]
fn copy_whole_sheet() {
    let dir = source_dir();
    let src = JsonValueSource::new(dir.path());
    let mut sink = CsvSink::new(Vec::new(), &lf());

    let stats = copy(&mut sink, &src, "abc123", "").unwrap();
    assert_eq!(stats, CopyStats { rows: 4, cells: 11 });

    let out = String::from_utf8(sink.into_inner().unwrap()).unwrap();
    assert_eq!(
        out,
        "item,qty,note\napple,3,\"red, crisp\"\npear,5\nplum,7,ripe\n"
    );
}

#[test]
fn copy_range_to_file() {
    let dir = source_dir();
    let src = JsonValueSource::new(dir.path());
    let out_path = dir.path().join("out.csv");
    let mut sink = CsvSink::create(&out_path, &lf()).unwrap();

    let stats = copy(&mut sink, &src, "abc123", "b3:a2").unwrap();
    assert_eq!(stats.rows, 2);
    drop(sink);

    assert_eq!(
        fs::read_to_string(&out_path).unwrap(),
        "apple,3\npear,5\n"
    );
}

#[test]
fn copy_link_id() {
    let dir = source_dir();
    let src = JsonValueSource::new(dir.path());
    let id = spreadsheet_id("https://docs.google.com/spreadsheets/d/abc123/edit").unwrap();
    let mut sink = CsvSink::new(Vec::new(), &lf());

    let stats = copy(&mut sink, &src, &id, "C1:C1").unwrap();
    assert_eq!(stats, CopyStats { rows: 1, cells: 1 });
}

#[test]
fn copy_errors() {
    let dir = source_dir();
    let src = JsonValueSource::new(dir.path());
    let mut sink = CsvSink::new(Vec::new(), &lf());

    assert!(matches!(
        copy(&mut sink, &src, "missing", ""),
        Err(Error::SourceNotFound(id)) if id == "missing"
    ));
    assert!(matches!(
        copy(&mut sink, &src, "abc123", "A1-B2"),
        Err(Error::Core(_))
    ));

    fs::write(dir.path().join("broken.json"), "{ not json").unwrap();
    assert!(matches!(
        copy(&mut sink, &src, "broken", ""),
        Err(Error::Json(_))
    ));

    fs::write(dir.path().join("numbers.json"), r#"{"values": [["a", 1.5]]}"#).unwrap();
    let err = copy(&mut sink, &src, "numbers", "").unwrap_err();
    assert_eq!(
        err.to_string(),
        "copy: unable to cast value 1.5 at B1 to a string"
    );
}

#[test]
fn copy_from_document_not_starting_at_a1() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("offset.json"),
        r#"{"range": "C5:D6", "values": [["c5", "d5"], ["c6", 7]]}"#,
    )
    .unwrap();
    let src = JsonValueSource::new(dir.path());

    let mut sink = CsvSink::new(Vec::new(), &lf());
    let stats = copy(&mut sink, &src, "offset", "C5:D5").unwrap();
    assert_eq!(stats, CopyStats { rows: 1, cells: 2 });
    assert_eq!(sink.into_inner().unwrap(), b"c5,d5\n");

    let mut sink = CsvSink::new(Vec::new(), &lf());
    assert!(matches!(
        copy(&mut sink, &src, "offset", "A1:A1"),
        Err(Error::OutsideStoredRange { .. })
    ));

    // Bad cells are reported at their sheet address
    let err = copy(&mut sink, &src, "offset", "C6:D6").unwrap_err();
    assert_eq!(
        err.to_string(),
        "copy: unable to cast value 7 at D6 to a string"
    );
}
