//! Tests for the scan::run command
//!
//! These call the command in-process with an in-memory writer.

#![allow(clippy::expect_used)]

use std::fs;
use std::path::Path;

use filetab_cli::commands::scan::{run, run_with_writer};
use serial_test::serial;
use tempfile::TempDir;

fn report_for(root: &Path, sorted: bool) -> String {
    let mut out = Vec::new();
    run_with_writer(root, sorted, &mut out).expect("Scan command failed");
    String::from_utf8(out).expect("Report is not UTF-8")
}

#[test]
fn test_report_lines_match_files() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join("a.txt"), "hello").expect("Failed to write file");
    fs::create_dir(temp_dir.path().join("sub")).expect("Failed to create dir");
    fs::write(temp_dir.path().join("sub/b.bin"), b"").expect("Failed to write file");

    let report = report_for(temp_dir.path(), true);

    let a = temp_dir.path().join("a.txt");
    let b = temp_dir.path().join("sub").join("b.bin");
    assert_eq!(
        report,
        format!(
            "{} 5 5d41402abc4b2a76b9719d911017c592\n{} 0 d41d8cd98f00b204e9800998ecf8427e\n",
            a.display(),
            b.display()
        )
    );
}

#[test]
fn test_every_line_has_three_fields() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    for name in ["x", "y", "z"] {
        fs::write(temp_dir.path().join(name), name).expect("Failed to write file");
    }

    let report = report_for(temp_dir.path(), false);

    assert_eq!(report.lines().count(), 3);
    for line in report.lines() {
        let fields: Vec<&str> = line.rsplitn(3, ' ').collect();
        assert_eq!(fields.len(), 3, "line: {line}");
        assert_eq!(fields[0].len(), 32);
        assert_eq!(fields[1], "1");
    }
}

#[test]
fn test_empty_directory_writes_nothing() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let report = report_for(temp_dir.path(), false);

    assert!(report.is_empty());
}

#[test]
fn test_missing_root_writes_nothing() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let missing = temp_dir.path().join("testing");

    let mut out = Vec::new();
    let result = run_with_writer(&missing, false, &mut out);

    assert!(result.is_err());
    assert!(out.is_empty());
    let message = format!("{:#}", result.expect_err("Expected failure"));
    assert!(message.contains("Root not found"), "message: {message}");
}

#[test]
#[serial]
fn test_run_resolves_default_root_against_working_directory() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::create_dir(temp_dir.path().join("testing")).expect("Failed to create root");
    fs::write(temp_dir.path().join("testing/a.txt"), "hello").expect("Failed to write file");

    let original = std::env::current_dir().expect("Failed to read working directory");
    std::env::set_current_dir(temp_dir.path()).expect("Failed to change directory");
    let result = run(Path::new(filetab_core::DEFAULT_ROOT), false);
    std::env::set_current_dir(original).expect("Failed to restore directory");

    assert!(result.is_ok());
}
