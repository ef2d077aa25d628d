use std::io::Write;
use std::process::{Command, Output};

use diffcompress::{decode, encode};
use tempfile::NamedTempFile;

fn diffcompress(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_diffcompress"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run diffcompress")
}

fn input_file(contents: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn encodes_each_line_without_terminator() {
    let file = input_file(b"IIIIHHHG\n\n#AAAA\n");
    let out = diffcompress(&[file.path().to_str().unwrap()]);

    assert_eq!(out.status.code(), Some(0));
    let mut expected = encode(b"IIIIHHHG").unwrap();
    expected.extend(encode(b"#AAAA").unwrap());
    assert_eq!(out.stdout, expected);
    assert!(out.stderr.is_empty());
}

#[test]
fn final_line_without_newline_is_encoded() {
    let file = input_file(b"12,13\n14,15");
    let out = diffcompress(&[file.path().to_str().unwrap()]);

    assert_eq!(out.status.code(), Some(0));
    assert_eq!(decode(&out.stdout).unwrap(), b"12,1314,15");
}

#[test]
fn empty_file_produces_no_output() {
    let file = input_file(b"");
    let out = diffcompress(&[file.path().to_str().unwrap()]);

    assert_eq!(out.status.code(), Some(0));
    assert!(out.stdout.is_empty());
}

#[test]
fn missing_argument_is_usage_error() {
    let out = diffcompress(&[]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&out.stderr), "Error: accepts only one argument\n");
    assert!(out.stdout.is_empty());
}

#[test]
fn extra_argument_is_usage_error() {
    let file = input_file(b"abc\n");
    let path = file.path().to_str().unwrap();
    let out = diffcompress(&[path, path]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&out.stderr), "Error: accepts only one argument\n");
}

#[cfg(unix)]
#[test]
fn missing_file_exits_with_errno() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.txt");
    let out = diffcompress(&[path.to_str().unwrap()]);

    // ENOENT
    assert_eq!(out.status.code(), Some(2));
    assert!(out.stdout.is_empty());
    assert!(out.stderr.is_empty());
}

#[test]
fn dash_prefixed_path_is_read_as_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("-q.txt"), b"5\x14\n").unwrap();
    let out = Command::new(env!("CARGO_BIN_EXE_diffcompress"))
        .arg("-q.txt")
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert_eq!(out.status.code(), Some(0));
    assert_eq!(out.stdout, encode(b"5\x14").unwrap());
    assert!(out.stderr.is_empty());
}

#[cfg(unix)]
#[test]
fn help_flag_is_treated_as_path() {
    let dir = tempfile::tempdir().unwrap();
    for arg in ["--help", "--version", "-h"] {
        let out = Command::new(env!("CARGO_BIN_EXE_diffcompress"))
            .arg(arg)
            .current_dir(dir.path())
            .env_remove("RUST_LOG")
            .output()
            .unwrap();

        // ENOENT: no file with that name
        assert_eq!(out.status.code(), Some(2), "arg {arg}");
        assert!(out.stdout.is_empty(), "arg {arg}");
    }
}

#[test]
fn stats_reports_json() {
    let file = input_file(b"AAAA\nBBBB\n");
    let out = Command::new(env!("CARGO_BIN_EXE_dc_stats"))
        .args([file.path().to_str().unwrap(), "--json", "--verify"])
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert_eq!(out.status.code(), Some(0));
    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report["lines"], 2);
    assert_eq!(report["input_bytes"], 8);
    assert_eq!(report["encoded_bytes"], 8);
    assert_eq!(report["stretches"], 2);
    assert_eq!(report["verified_lines"], 2);
    assert_eq!(report["stretch_lengths"]["4"], 2);
}

#[test]
fn stats_strict_fails_on_high_minimum() {
    let file = input_file(b"ok\n\xC8\xC9\n");
    let out = Command::new(env!("CARGO_BIN_EXE_dc_stats"))
        .args([file.path().to_str().unwrap(), "--strict"])
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("line 2"));
}
