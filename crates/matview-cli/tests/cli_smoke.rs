//! CLI binary smoke tests using assert_cmd.
//!
//! These run the compiled `matview-demo` binary inside a temporary working
//! directory so the fixed default paths resolve there.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("matview-demo").unwrap();
    cmd.env_remove("MATVIEW_LOG");
    cmd
}

// ---------------------------------------------------------------------------
// Top-level
// ---------------------------------------------------------------------------

#[test]
fn help_flag() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--input"))
        .stdout(predicate::str::contains("--subtract"));
}

#[test]
fn version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("matview-demo"));
}

#[test]
fn unknown_flag_errors() {
    cmd()
        .arg("--bogus")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

// ---------------------------------------------------------------------------
// Default run
// ---------------------------------------------------------------------------

#[test]
fn default_paths_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("matrixload.txt"), "1,2,3\n4,5,6\n").unwrap();

    cmd()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Matrix before modification:\n1,2,3,\n4,5,6,\n",
        ))
        .stdout(predicate::str::contains(
            "Matrix after modification:\n-1, 0, 1,\n 2, 3, 4,\n",
        ));

    let saved = std::fs::read_to_string(dir.path().join("output").join("matrix.txt")).unwrap();
    assert_eq!(saved, "-1, 0, 1,\n 2, 3, 4,\n");
}

#[test]
fn missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();

    cmd()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load matrix"));

    assert!(!dir.path().join("output").exists());
}

#[test]
fn ragged_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("matrixload.txt"), "1,2,3\n4,5\n").unwrap();

    cmd()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected 3 fields, found 2"));
}

// ---------------------------------------------------------------------------
// Overrides
// ---------------------------------------------------------------------------

#[test]
fn flags_override_paths_and_constant() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("grid.csv");
    let output = dir.path().join("out").join("shifted.csv");
    std::fs::write(&input, "10,20\n30,40\n").unwrap();

    cmd()
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .args(["--subtract", "-5"])
        .assert()
        .success();

    let saved = std::fs::read_to_string(&output).unwrap();
    assert_eq!(saved, "15,25,\n35,45,\n");
}

#[test]
fn config_file_sets_format() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.txt");
    let output = dir.path().join("out.txt");
    let config = dir.path().join("demo.json");
    std::fs::write(&input, "1;2;3|4;5;6").unwrap();
    std::fs::write(
        &config,
        serde_json::json!({
            "input": input,
            "output": output,
            "subtract": 1,
            "format": { "column_separator": ";", "row_separator": "|", "align": false }
        })
        .to_string(),
    )
    .unwrap();

    cmd()
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("0;1;2;\n3;4;5;\n"));

    let saved = std::fs::read_to_string(&output).unwrap();
    assert_eq!(saved, "0;1;2;|3;4;5;");
}

#[test]
fn unreadable_config_fails() {
    cmd()
        .args(["--config", "/nonexistent/demo.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config"));
}
