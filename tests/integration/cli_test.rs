//! End-to-end tests of the tueg binary
//!
//! Every command runs with HOME pointed at a temp dir so no real user config
//! is read, and without TUEG_PASSWORD so nothing reaches the network.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::*;

fn tueg(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("tueg").expect("tueg binary is built");
    cmd.env("HOME", home)
        .env_remove("TUEG_PASSWORD")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_lists_commands() {
    let home = TempDir::new().unwrap();
    tueg(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("sessions"))
        .stdout(predicate::str::contains("download"));
}

#[test]
fn layout_reports_each_export() {
    let home = TempDir::new().unwrap();
    let data = mixed_dataset();

    tueg(home.path())
        .arg("layout")
        .arg(data.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("full"))
        .stdout(predicate::str::contains("split-by-class"))
        .stdout(predicate::str::contains("class-rooted"))
        .stdout(predicate::str::contains("docs").not());
}

#[test]
fn sessions_lists_every_layout() {
    let home = TempDir::new().unwrap();
    let data = mixed_dataset();

    tueg(home.path())
        .arg("sessions")
        .arg(data.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("00000768"))
        .stdout(predicate::str::contains("00008184"))
        .stdout(predicate::str::contains("2012-02-08"))
        .stdout(predicate::str::contains("Sessions: 5"));
}

#[test]
fn sessions_default_to_configured_directory() {
    let home = TempDir::new().unwrap();
    let data = mixed_dataset();
    let config_dir = home.path().join(".config").join("tueg");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        format!("[dataset]\ndirectory = {:?}\n", data.path().to_str().unwrap()),
    )
    .unwrap();

    tueg(home.path())
        .arg("sessions")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sessions: 5"));
}

#[test]
fn sessions_fail_on_malformed_session() {
    let home = TempDir::new().unwrap();
    let data = TempDir::new().unwrap();
    full_session(data.path(), "v1.1.0", "00000001", "s001_20150928");

    tueg(home.path())
        .arg("sessions")
        .arg(data.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("s001_20150928"));
}

#[test]
fn records_json_lines() {
    let home = TempDir::new().unwrap();
    let data = TempDir::new().unwrap();
    let session = full_session(data.path(), "v1.1.0", "00000258", "s002_2003_07_21");
    add_record(&session, "t000");

    let output = tueg(home.path())
        .args(["records", "--json"])
        .arg(data.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let value: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(value["identity"]["subject_id"], "00000258");
    assert_eq!(value["identity"]["session_number"], "s002");
    assert_eq!(value["date"], "2003-07-21");
}

#[test]
fn collect_counts_by_type() {
    let home = TempDir::new().unwrap();
    let data = TempDir::new().unwrap();
    touch(&data.path().join("a/b/one.edf"));
    touch(&data.path().join("two.edf"));

    tueg(home.path())
        .args(["collect", "-t", "edf"])
        .arg(data.path())
        .assert()
        .success()
        .stdout("edf: 2\n");
}

#[test]
fn collect_rejects_unknown_type() {
    let home = TempDir::new().unwrap();
    let data = TempDir::new().unwrap();

    tueg(home.path())
        .args(["collect", "-t", "csv"])
        .arg(data.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("csv"));
}

#[test]
fn download_requires_a_password() {
    let home = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();

    tueg(home.path())
        .args(["download", "https://127.0.0.1:9/unused/", "--dest"])
        .arg(dest.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("password"));
}

#[test]
fn config_path_lives_under_home() {
    let home = TempDir::new().unwrap();
    let expected = home.path().join(".config").join("tueg").join("config.toml");

    tueg(home.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(format!("{}\n", expected.display()));
}

#[test]
fn config_show_prints_defaults() {
    let home = TempDir::new().unwrap();

    tueg(home.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[download]"))
        .stdout(predicate::str::contains("nedc_tuh_eeg"));
}

#[test]
fn completions_for_bash() {
    let home = TempDir::new().unwrap();

    tueg(home.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tueg"));
}
