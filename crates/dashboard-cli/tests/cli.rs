use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Config directory using the file session store so no keyring is touched.
fn config_dir() -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    fs::write(
        dir.path().join("config.toml"),
        "session_store = \"file\"\napi_base = \"http://127.0.0.1:9\"\n",
    )
    .expect("Failed to write config");
    dir
}

fn dashboard(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("dashboard-cli").expect("binary not built");
    cmd.env_remove("DASHBOARD_API_BASE")
        .env_remove("RUST_LOG")
        .arg("--config-dir")
        .arg(dir.path());
    cmd
}

#[test]
fn help_lists_entity_commands() {
    Command::cargo_bin("dashboard-cli")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("customer"))
        .stdout(predicate::str::contains("supplier"));
}

#[test]
fn invalid_page_fails_before_any_request() {
    let dir = config_dir();
    dashboard(&dir)
        .args(["customer", "list", "--page", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Page must be at least 1"));
}

#[test]
fn json_mode_prints_failure_envelope() {
    let dir = config_dir();
    dashboard(&dir)
        .args(["--json", "supplier", "list", "--page-size", "500"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"success\": false"))
        .stdout(predicate::str::contains("VALIDATION_ERROR"))
        .stdout(predicate::str::contains("Page size must be between 1 and 100"));
}

#[test]
fn invalid_order_status_is_rejected() {
    let dir = config_dir();
    dashboard(&dir)
        .args(["order", "update", "TRX-2024-1", "--status", "Shipped"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid order status"));
}

#[test]
fn order_item_flag_must_be_well_formed() {
    let dir = config_dir();
    dashboard(&dir)
        .args(["order", "create", "--customer-id", "C-001", "--item", "Teh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("PRODUCT:QTY:PRICE"));
}

#[test]
fn login_requires_username() {
    let dir = config_dir();
    dashboard(&dir)
        .args(["auth", "login", "--password", "secret123"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Username is required"));
}

#[test]
fn status_without_session() {
    let dir = config_dir();
    dashboard(&dir)
        .args(["auth", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not signed in"));
}

#[test]
fn logout_recovers_from_corrupt_session_file() {
    let dir = config_dir();
    let session_file = dir.path().join("session.json");
    fs::write(&session_file, "not json").unwrap();

    dashboard(&dir)
        .args(["auth", "logout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed out"));

    assert!(!session_file.exists());
}

#[test]
fn status_with_corrupt_session_file_is_signed_out() {
    let dir = config_dir();
    fs::write(dir.path().join("session.json"), "not json").unwrap();

    dashboard(&dir)
        .args(["auth", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not signed in"));
}

#[test]
fn verbose_logs_are_plain_when_piped() {
    let dir = config_dir();
    dashboard(&dir)
        .args(["--verbose", "auth", "status"])
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG"))
        .stderr(predicate::str::contains("\u{1b}[").not());
}

#[test]
fn unreachable_server_is_reported() {
    let dir = config_dir();
    dashboard(&dir)
        .args(["customer", "show", "C-001"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unable to connect to server"));
}

#[test]
fn config_set_persists_values() {
    let dir = config_dir();
    dashboard(&dir)
        .args(["config", "set", "--timeout", "30", "--synthesize-fields", "false"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration saved"));

    let saved = fs::read_to_string(dir.path().join("config.toml")).unwrap();
    assert!(saved.contains("timeout_seconds = 30"));
    assert!(saved.contains("synthesize_fields = false"));
    assert!(saved.contains("session_store = \"file\""));

    dashboard(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("30s"));
}

#[test]
fn config_set_without_values_fails() {
    let dir = config_dir();
    dashboard(&dir)
        .args(["config", "set"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No configuration values provided"));
}

#[test]
fn config_set_rejects_bad_timeout() {
    let dir = config_dir();
    dashboard(&dir)
        .args(["config", "set", "--timeout", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("timeout"));
}
