use std::fs;
use std::path::PathBuf;

use csv_table_core::{parse, parse_file, ParseError};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

fn fixture(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join(path)
}

#[test]
fn parses_columns_and_rows_from_fixture() {
    let table =
        parse_file(&fixture("fixtures/checkpoint_objects.csv")).expect("parse should succeed");

    assert_eq!(table.columns, vec!["Name", "IPv4", "Mask", "Port"]);
    assert_eq!(table.len(), 7);

    let first = table.row(0).expect("row 0 should exist");
    assert_eq!(first.get("Name"), Some("WebSrv"));
    assert_eq!(first.get("IPv4"), Some("10.0.0.5"));
    assert_eq!(first.get("Mask"), Some(""));
}

#[test]
fn parses_service_fixture_with_two_columns() {
    let table = parse_file(&fixture("fixtures/tcp_services.csv")).expect("parse should succeed");

    assert_eq!(table.columns, vec!["Name", "Port"]);
    assert_eq!(table.row(0).and_then(|r| r.get("Port")), Some("80"));
}

#[test]
fn ragged_rows_are_accepted() {
    let table = parse(b"Name,IPv4,Mask\nweb,10.0.0.5\n").expect("ragged row should parse");
    let row = table.row(0).expect("row 0 should exist");
    assert_eq!(row.get("Mask"), Some(""));
}

#[test]
fn parse_file_round_trips_written_bytes() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("objects.csv");
    fs::write(&path, "Name,Port\nHTTP,80\n").expect("write csv");

    let table = parse_file(&path).expect("parse should succeed");
    assert_eq!(table.columns, vec!["Name", "Port"]);
    assert_eq!(table.rows, vec![vec!["HTTP".to_string(), "80".to_string()]]);
}

#[test]
fn empty_input_is_malformed() {
    let err = parse(b"").expect_err("empty input should fail");
    match err {
        ParseError::Malformed(_) => {}
        other => panic!("unexpected error variant: {other}"),
    }
}

#[test]
fn missing_file_reports_io_error() {
    let err = parse_file(&fixture("fixtures/no_such_file.csv")).expect_err("should fail");
    match err {
        ParseError::Io(_) => {}
        other => panic!("unexpected error variant: {other}"),
    }
}
