use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn compbench(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_compbench"))
        .args(args)
        .current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run compbench")
}

#[test]
fn benchmarks_selected_algorithms() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("hello.txt");
    fs::write(&input, b"hello world").unwrap();

    let output = compbench(dir.path(), &["-i", input.to_str().unwrap(), "-a", "gzip,zstd"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("file: hello.txt (original size: 11 B)"));
    assert!(stdout.contains("Gzip"));
    assert!(stdout.contains("Zstandard"));
    assert!(!stdout.contains("Brotli"));

    // Nothing is written unless asked for
    assert!(!dir.path().join("hello.gz").exists());
}

#[test]
fn missing_input_flag_fails_with_usage() {
    let dir = tempfile::tempdir().unwrap();

    let output = compbench(dir.path(), &["-a", "gzip"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"));
    assert!(stderr.contains("gzip"));
}

#[test]
fn missing_input_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.bin");

    let output = compbench(dir.path(), &["-i", missing.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn unknown_algorithms_are_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("data.bin");
    fs::write(&input, vec![7u8; 4096]).unwrap();

    let output = compbench(dir.path(), &["-i", input.to_str().unwrap(), "-a", "nope,GZIP"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Gzip"));
}

#[test]
fn write_outputs_uses_registry_extensions() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("sample.txt");
    fs::write(&input, b"hello world hello world hello world").unwrap();

    let output = compbench(
        dir.path(),
        &["-i", input.to_str().unwrap(), "-a", "gzip,zstd", "--write-outputs"],
    );
    assert!(output.status.success());

    let gz = fs::read(dir.path().join("sample.gz")).unwrap();
    let zst = fs::read(dir.path().join("sample.zst")).unwrap();
    assert_eq!(&gz[..2], &[0x1f, 0x8b]);
    assert_eq!(&zst[..4], &[0x28, 0xb5, 0x2f, 0xfd]);
}

#[test]
fn json_report_is_parseable() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("hello.txt");
    fs::write(&input, b"hello world").unwrap();

    let output = compbench(
        dir.path(),
        &["-i", input.to_str().unwrap(), "-a", "zstd,gzip", "--json", "-l", "-1"],
    );
    assert!(output.status.success());

    let document: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = document["report"]["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["algorithm"], "gzip");
    assert_eq!(rows[1]["algorithm"], "zstd");
    assert_eq!(document["report"]["original_size"], 11);
    assert_eq!(document["metadata"]["level"], -1);
}

#[test]
fn list_prints_registry() {
    let dir = tempfile::tempdir().unwrap();

    let output = compbench(dir.path(), &["--list"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("snappy"));
    assert!(stdout.contains("lzo1x"));
}

#[test]
fn config_file_selects_algorithms() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("hello.txt");
    fs::write(&input, b"hello world").unwrap();
    fs::write(
        dir.path().join("compbench.yaml"),
        "benchmark:\n  algorithms: snappy\n",
    )
    .unwrap();

    let output = compbench(dir.path(), &["-i", input.to_str().unwrap()]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Snappy"));
    assert!(!stdout.contains("Gzip"));
}

/// Report lines with the trailing time column cut off
fn rows_without_time(stdout: &str) -> Vec<String> {
    let lines: Vec<&str> = stdout.lines().skip(1).collect();
    let time_column = lines[0].find("Time").unwrap();
    lines
        .iter()
        .map(|line| line.get(..time_column).unwrap_or(line).to_string())
        .collect()
}

#[test]
fn verbosity_adds_diagnostics_without_changing_results() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("hello.txt");
    fs::write(&input, b"hello world").unwrap();
    let input = input.to_str().unwrap();

    let run = |level: &str| compbench(dir.path(), &["-i", input, "-a", "gzip,zstd", "-v", level]);
    let quiet = run("0");
    let info = run("1");
    let debug = run("2");

    for output in [&quiet, &info, &debug] {
        assert!(output.status.success());
    }

    assert!(quiet.stderr.is_empty());

    let info_log = String::from_utf8_lossy(&info.stderr);
    assert!(info_log.contains("Testing algorithm"));
    assert!(!info_log.contains("-> compressed"));

    let debug_log = String::from_utf8_lossy(&debug.stderr);
    assert!(debug_log.contains("Testing algorithm"));
    assert!(debug_log.contains("original 11B -> compressed"));

    let baseline = rows_without_time(&String::from_utf8_lossy(&quiet.stdout));
    assert_eq!(baseline.len(), 4);
    assert_eq!(rows_without_time(&String::from_utf8_lossy(&info.stdout)), baseline);
    assert_eq!(rows_without_time(&String::from_utf8_lossy(&debug.stdout)), baseline);
}

#[test]
fn write_outputs_keeps_input_that_shares_an_extension() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("data.gz");
    fs::write(&input, b"original bytes, not gzip").unwrap();

    let output = compbench(
        dir.path(),
        &["-i", input.to_str().unwrap(), "-a", "gzip", "--write-outputs"],
    );
    assert!(output.status.success());
    assert_eq!(fs::read(&input).unwrap(), b"original bytes, not gzip");

    // One warning line, not one per logging layer
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("destination is the input file").count(), 1);
}

#[test]
fn empty_selection_prints_header_without_rows() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("hello.txt");
    fs::write(&input, b"hello world").unwrap();

    let output = compbench(dir.path(), &["-i", input.to_str().unwrap(), "-a", "bogus"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("Algorithm"));
    assert!(lines[2].starts_with("---"));
}
