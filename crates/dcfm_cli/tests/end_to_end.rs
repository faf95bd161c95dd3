use std::path::Path;
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

fn dcfm(workdir: &Path, args: &[&str]) -> Output {
    let db = workdir.join("dcfm.db");
    Command::new(env!("CARGO_BIN_EXE_dcfm"))
        .args(args)
        .current_dir(workdir)
        .env("DATABASE_URL", format!("sqlite://{}", db.display()))
        .env("DCFM_TABLE_PREFIX", "wp_")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run dcfm")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_full_lifecycle() {
    let dir = TempDir::new().unwrap();

    // 1. Activate twice; the second run must not fail or wipe anything
    for _ in 0..2 {
        let output = dcfm(dir.path(), &["activate"]);
        assert!(output.status.success(), "activate failed: {}", stderr(&output));
        assert!(stdout(&output).contains("wp_devnetix_contact_form"));
    }

    // 2. Submit
    let output = dcfm(
        dir.path(),
        &[
            "submit",
            "--name", "Ann <b>Lee</b>",
            "--email", "ann@example.com",
            "--company", "Acme",
            "--message", "Line one\nLine two",
        ],
    );
    assert!(output.status.success(), "submit failed: {}", stderr(&output));
    assert!(stdout(&output).contains("ID: 1"));

    // 3. List as JSON
    let output = dcfm(dir.path(), &["list", "--json"]);
    assert!(output.status.success(), "list failed: {}", stderr(&output));
    let entries: Value = serde_json::from_str(&stdout(&output)).unwrap();
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["id"], 1);
    assert_eq!(entries[0]["name"], "Ann Lee");
    assert_eq!(entries[0]["phone"], "");
    assert_eq!(entries[0]["company_name"], "Acme");
    assert_eq!(entries[0]["message"], "Line one\nLine two");
}

#[test]
fn test_invalid_submission_is_rejected() {
    let dir = TempDir::new().unwrap();
    assert!(dcfm(dir.path(), &["activate"]).status.success());

    let output = dcfm(
        dir.path(),
        &["submit", "--name", "Ann", "--email", "nope", "--message", "Hi"],
    );
    assert!(!output.status.success());
    assert!(stderr(&output).contains("'nope' is not a valid email address"));

    let output = dcfm(dir.path(), &["list"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("No submissions yet."));
}

#[test]
fn test_submit_before_activate_fails() {
    let dir = TempDir::new().unwrap();

    let output = dcfm(
        dir.path(),
        &["submit", "--name", "Ann", "--email", "ann@example.com", "--message", "Hi"],
    );
    assert!(!output.status.success());
}
