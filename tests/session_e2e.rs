#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Runs the binary against `file` with an isolated config directory.
fn scorebook_cmd(config_dir: &Path, file: &Path) -> Command {
    let mut cmd = Command::cargo_bin("scorebook").unwrap();
    cmd.env("SCOREBOOK_CONFIG_DIR", config_dir)
        .env_remove("SCOREBOOK_LOG")
        .arg(file);
    cmd
}

#[test]
fn test_append_list_exit() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("scores.txt");

    scorebook_cmd(temp.path(), &data)
        .write_stdin("-1\na00000001\n55\n0\n-2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter command: "))
        .stdout(predicate::str::contains("Enter ID: "))
        .stdout(predicate::str::contains("Enter score: "))
        .stdout(predicate::str::ends_with("Exiting...\n"))
        .stderr("1 a00000001 55\n\n");

    let content = fs::read(&data).unwrap();
    assert_eq!(content.len(), 14);
    assert_eq!(content, b"a00000001 55 \n");
}

#[test]
fn test_listing_stays_separable_from_logs() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("scores.txt");

    let output = scorebook_cmd(temp.path(), &data)
        .env("SCOREBOOK_LOG", "info")
        .write_stdin("-1\na00000001\n55\n0\n-2\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(!stderr.contains('\x1b'));
    assert!(stderr.lines().any(|line| line.contains("INFO")));

    let listing: Vec<&str> = stderr
        .lines()
        .filter(|line| line.starts_with(|c: char| c.is_ascii_digit()))
        .collect();
    assert_eq!(listing, vec!["1 a00000001 55"]);
}

#[test]
fn test_modify_in_place() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("scores.txt");

    let input = "-1\na00000001\n10\n-1\na00000002\n20\n-1\na00000003\n30\n2\nA22222222\n100\n0\n-2\n";
    scorebook_cmd(temp.path(), &data)
        .write_stdin(input)
        .assert()
        .success()
        .stderr("2 a00000002 20\n\n1 a00000001 10\n2 A22222222 100\n3 a00000003 30\n\n");

    assert_eq!(
        fs::read_to_string(&data).unwrap(),
        "a00000001 10 \nA22222222 100\na00000003 30 \n"
    );
}

#[test]
fn test_modify_missing_position_is_no_op() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("scores.txt");

    scorebook_cmd(temp.path(), &data)
        .write_stdin("-1\na00000001\n10\n9\n-2\n")
        .assert()
        .success()
        .stderr("");

    assert_eq!(fs::read_to_string(&data).unwrap(), "a00000001 10 \n");
}

#[test]
fn test_end_of_input_exits_cleanly() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("scores.txt");

    scorebook_cmd(temp.path(), &data)
        .write_stdin("-1\na00000001\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exiting..."));

    assert_eq!(fs::read(&data).unwrap().len(), 0);
}

#[test]
fn test_existing_content_truncated_by_default() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("scores.txt");
    fs::write(&data, "a00000001 10 \n").unwrap();

    scorebook_cmd(temp.path(), &data)
        .write_stdin("0\n-2\n")
        .assert()
        .success()
        .stderr("");

    assert_eq!(fs::read(&data).unwrap().len(), 0);
}

#[test]
fn test_keep_flag_preserves_records() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("scores.txt");
    fs::write(&data, "a00000001 10 \n").unwrap();

    scorebook_cmd(temp.path(), &data)
        .arg("--keep")
        .write_stdin("-1\na00000002\n20\n0\n-2\n")
        .assert()
        .success()
        .stderr("1 a00000001 10\n2 a00000002 20\n\n");
}

#[test]
fn test_config_can_disable_truncation() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("scores.txt");
    fs::write(&data, "a00000001 10 \n").unwrap();
    fs::write(
        temp.path().join("config.json"),
        r#"{ "truncate_on_open": false }"#,
    )
    .unwrap();

    scorebook_cmd(temp.path(), &data)
        .write_stdin("0\n-2\n")
        .assert()
        .success()
        .stderr("1 a00000001 10\n\n");
}

#[test]
fn test_invalid_config_fails() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("scores.txt");
    fs::write(temp.path().join("config.json"), r#"{ "input_limit": 0 }"#).unwrap();

    scorebook_cmd(temp.path(), &data)
        .write_stdin("-2\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("input_limit"));
}

#[test]
fn test_missing_file_argument_fails() {
    Command::cargo_bin("scorebook")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("<FILE>"));
}

#[test]
fn test_unopenable_file_fails() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("no-such-dir").join("scores.txt");

    scorebook_cmd(temp.path(), &data)
        .write_stdin("-2\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error opening file"));
}
