// Tests for the CSV output module

use sha12csv::output::{csv_path, write_csv};
use sha12csv::pool::FileDigest;
use sha12csv::Sha1CsvError;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn test_csv_path_appends_extension() {
    assert_eq!(csv_path("sha1sum"), PathBuf::from("sha1sum.csv"));
    assert_eq!(csv_path("out"), PathBuf::from("out.csv"));
}

#[test]
fn test_write_csv_format() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("out.csv");

    let records = vec![
        FileDigest {
            path: PathBuf::from("a.txt"),
            sha1: "aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d".to_string(),
        },
        FileDigest {
            path: PathBuf::from("sub/b.txt"),
            sha1: "7c211433f02071597741e6ff5a8ea34789abbf43".to_string(),
        },
    ];
    write_csv(&records, &output).unwrap();

    let content = fs::read_to_string(&output).unwrap();
    assert_eq!(
        content,
        "a.txt, aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d\n\
         sub/b.txt, 7c211433f02071597741e6ff5a8ea34789abbf43\n"
    );
}

#[test]
fn test_write_csv_no_records_produces_empty_file() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("empty.csv");

    write_csv(&[], &output).unwrap();

    assert!(output.exists());
    assert_eq!(fs::read_to_string(&output).unwrap(), "");
}

#[test]
fn test_write_csv_overwrites_existing_file() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("out.csv");
    fs::write(&output, "stale contents that should disappear\n").unwrap();

    let records = vec![FileDigest {
        path: PathBuf::from("fresh.txt"),
        sha1: "da39a3ee5e6b4b0d3255bfef95601890afd80709".to_string(),
    }];
    write_csv(&records, &output).unwrap();

    let content = fs::read_to_string(&output).unwrap();
    assert_eq!(content, "fresh.txt, da39a3ee5e6b4b0d3255bfef95601890afd80709\n");
}

#[test]
fn test_write_csv_failure_surfaces_as_output_error() {
    let dir = tempdir().unwrap();
    // Target is a directory, so the write must fail
    let output = dir.path().to_path_buf();

    let err = write_csv(&[], &output).unwrap_err();
    match err {
        Sha1CsvError::OutputWriteError { path, .. } => assert_eq!(path, output),
        other => panic!("expected OutputWriteError, got: {}", other),
    }
}
