//! End-to-end tests for the msa-classify command line.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn msa_classify() -> Command {
    Command::cargo_bin("msa-classify").expect("binary should build")
}

/// Write a FASTA fixture and return its path
fn write_fasta(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("failed to write fixture");
    path
}

#[test]
fn test_classifies_all_columns() {
    let dir = TempDir::new().unwrap();
    let input = write_fasta(&dir, "aln.fa", ">row1\nAA\n>row2\nAC\n");
    let output = dir.path().join("positions.tsv");

    msa_classify()
        .arg(&input)
        .arg(&output)
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "position\tcolumn_type\tbases\n0\t0\t(0, 0)\n1\t1\t(0, 1)\n"
    );
}

#[test]
fn test_rows_sorted_by_name_before_classification() {
    let dir = TempDir::new().unwrap();
    // Unsorted, the single column would read "CAA" -> (0, 1, 1); sorted by
    // record name it reads "AAC" -> (0, 0, 1).
    let input = write_fasta(&dir, "aln.fa", ">c\nC\n>a\nA\n>b\nA\n");
    let output = dir.path().join("positions.tsv");

    msa_classify()
        .arg(&input)
        .arg(&output)
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "position\tcolumn_type\tbases\n0\t0\t(0, 0, 1)\n"
    );
}

#[test]
fn test_types_filter_keeps_global_indices() {
    let dir = TempDir::new().unwrap();
    // Columns: (A,A) -> (0,0); (A,C) -> (0,1); (C,C) -> (0,0)
    let input = write_fasta(&dir, "aln.fa", ">a\nAAC\n>b\nACC\n");
    let output = dir.path().join("positions.tsv");

    msa_classify()
        .arg(&input)
        .arg(&output)
        .args(["--types", "01"])
        .assert()
        .success();

    // Only the middle column is reported, and it keeps type index 1 from
    // the unfiltered numbering.
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "position\tcolumn_type\tbases\n1\t1\t(0, 1)\n"
    );
}

#[test]
fn test_types_flag_with_no_values_reports_everything() {
    let dir = TempDir::new().unwrap();
    let input = write_fasta(&dir, "aln.fa", ">a\nAA\n>b\nAC\n");
    let output = dir.path().join("positions.tsv");

    msa_classify()
        .arg(&input)
        .arg(&output)
        .arg("--types")
        .assert()
        .success();

    let report = fs::read_to_string(&output).unwrap();
    assert_eq!(report.lines().count(), 3);
}

#[test]
fn test_invalid_types_entry_fails_before_reading_input() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("positions.tsv");

    // The input path does not exist; the filter error must win because the
    // filter is validated before any input is read.
    msa_classify()
        .arg(dir.path().join("missing.fa"))
        .arg(&output)
        .args(["--types", "0a1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a digit"));

    assert!(!output.exists());
}

#[test]
fn test_unequal_row_lengths_fail() {
    let dir = TempDir::new().unwrap();
    let input = write_fasta(&dir, "aln.fa", ">a\nACGT\n>b\nAC\n");
    let output = dir.path().join("positions.tsv");

    msa_classify()
        .arg(&input)
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("equal length"));

    assert!(!output.exists());
}

#[test]
fn test_empty_input_fails() {
    let dir = TempDir::new().unwrap();
    let input = write_fasta(&dir, "empty.fa", "");
    let output = dir.path().join("positions.tsv");

    msa_classify()
        .arg(&input)
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No sequences found"));
}

#[test]
fn test_missing_input_fails() {
    let dir = TempDir::new().unwrap();

    msa_classify()
        .arg(dir.path().join("missing.fa"))
        .arg(dir.path().join("positions.tsv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read alignment"));
}

#[test]
fn test_gzipped_input_matches_plain() {
    use flate2::write::GzEncoder;
    use flate2::Compression;

    let fasta = ">a\nAC-T\n>b\nACCT\n";
    let dir = TempDir::new().unwrap();
    let plain = write_fasta(&dir, "aln.fa", fasta);

    let gz_path = dir.path().join("aln.fa.gz");
    let mut encoder = GzEncoder::new(fs::File::create(&gz_path).unwrap(), Compression::default());
    encoder.write_all(fasta.as_bytes()).unwrap();
    encoder.finish().unwrap();

    let plain_out = dir.path().join("plain.tsv");
    let gz_out = dir.path().join("gz.tsv");

    msa_classify().arg(&plain).arg(&plain_out).assert().success();
    msa_classify().arg(&gz_path).arg(&gz_out).assert().success();

    assert_eq!(
        fs::read_to_string(&plain_out).unwrap(),
        fs::read_to_string(&gz_out).unwrap()
    );
}

#[test]
fn test_stdin_and_stdout() {
    msa_classify()
        .arg("-")
        .arg("-")
        .write_stdin(">row1\nAA\n>row2\nAC\n")
        .assert()
        .success()
        .stdout("position\tcolumn_type\tbases\n0\t0\t(0, 0)\n1\t1\t(0, 1)\n");
}

#[test]
fn test_reruns_are_byte_identical() {
    let dir = TempDir::new().unwrap();
    let input = write_fasta(&dir, "aln.fa", ">a\nGAT-ACA\n>b\nGATTACA\n>c\nGCTTAGA\n");
    let first = dir.path().join("first.tsv");
    let second = dir.path().join("second.tsv");

    msa_classify().arg(&input).arg(&first).assert().success();
    msa_classify().arg(&input).arg(&second).assert().success();

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn test_single_row_alignment() {
    let dir = TempDir::new().unwrap();
    let input = write_fasta(&dir, "aln.fa", ">only\nACG\n");
    let output = dir.path().join("positions.tsv");

    msa_classify().arg(&input).arg(&output).assert().success();

    // Every column of a one-row alignment has the same single-label
    // signature, rendered with the trailing comma.
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "position\tcolumn_type\tbases\n0\t0\t(0,)\n1\t0\t(0,)\n2\t0\t(0,)\n"
    );
}

#[test]
fn test_json_format() {
    let dir = TempDir::new().unwrap();
    let input = write_fasta(&dir, "aln.fa", ">a\nAA\n>b\nAC\n");
    let output = dir.path().join("positions.json");

    msa_classify()
        .arg(&input)
        .arg(&output)
        .args(["--format", "json"])
        .assert()
        .success();

    let parsed: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 2);
    assert_eq!(parsed[1]["position"], 1);
    assert_eq!(parsed[1]["column_type"], 1);
    assert_eq!(parsed[1]["bases"], serde_json::json!([0, 1]));
}
