//! CLI integration tests
//!
//! Runs the binary against controlled environments.

mod common;

use assert_cmd::cargo::cargo_bin_cmd;
use common::helpers::{settings_cmd, with_valid_env};
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_version_flag() {
    let mut cmd = cargo_bin_cmd!("site-settings");
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_flag() {
    let mut cmd = cargo_bin_cmd!("site-settings");
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("serve"));
}

#[test]
fn test_check_fails_without_secret_key() {
    let dir = TempDir::new().unwrap();
    let mut cmd = settings_cmd(dir.path());
    cmd.env("DATABASE_URL", "postgres://app:pw@db/community")
        .arg("check");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("SECRET_KEY"));
}

#[test]
fn test_check_succeeds_with_url() {
    let dir = TempDir::new().unwrap();
    let mut cmd = settings_cmd(dir.path());
    with_valid_env(&mut cmd).arg("check");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Settings OK"))
        .stdout(predicate::str::contains("community"));
}

#[test]
fn test_check_names_missing_discrete_variable() {
    let dir = TempDir::new().unwrap();
    let mut cmd = settings_cmd(dir.path());
    cmd.env("SECRET_KEY", "k")
        .env("DB_USER", "app")
        .env("DB_PASSWORD", "pw")
        .arg("check");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("DB_NAME"));
}

#[test]
fn test_malformed_url_does_not_leak_credentials() {
    let dir = TempDir::new().unwrap();
    let mut cmd = settings_cmd(dir.path());
    cmd.env("SECRET_KEY", "k")
        .env("DATABASE_URL", "postgres://app:leakme@db:notaport/community")
        .arg("check");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("DATABASE_URL"))
        .stderr(predicate::str::contains("leakme").not());
}

#[test]
fn test_show_json_is_redacted() {
    let dir = TempDir::new().unwrap();
    let mut cmd = settings_cmd(dir.path());
    with_valid_env(&mut cmd)
        .env("ALLOWED_HOSTS", "")
        .env("DEBUG", "true")
        .args(["show", "--format", "json"]);

    let output = cmd.output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(!stdout.contains("integration-secret"));
    assert!(!stdout.contains("dbpass"));

    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["debug"], false);
    assert_eq!(
        json["allowed_hosts"],
        serde_json::json!(["localhost", "127.0.0.1"])
    );
    assert_eq!(json["database"]["host"], "db.internal");
    assert_eq!(json["database"]["port"], 6543);
    assert_eq!(json["database"]["user"], "app");
    assert_eq!(json["database"]["conn_max_age"], 600);
}

#[test]
fn test_show_reads_dotenv_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".env"),
        "SECRET_KEY=dotenv-secret\nDB_NAME=community\nDB_USER=app\nDB_PASSWORD=\n",
    )
    .unwrap();

    let mut cmd = settings_cmd(dir.path());
    cmd.arg("show");

    let output = cmd.output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["database"]["name"], "community");
    assert_eq!(json["database"]["host"], "localhost");
    assert_eq!(json["database"]["port"], 5432);
}

#[test]
fn test_environment_wins_over_dotenv() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".env"),
        "SECRET_KEY=dotenv-secret\nDATABASE_URL=postgres://a:b@from-dotenv/db\n",
    )
    .unwrap();

    let mut cmd = settings_cmd(dir.path());
    cmd.env("DATABASE_URL", "postgres://a:b@from-env/db")
        .arg("show");

    let output = cmd.output().unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["database"]["host"], "from-env");
}

#[test]
fn test_show_with_config_file() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("settings.toml");
    fs::write(
        &config,
        r#"
secret_key = "file-secret"
allowed_hosts = [".example.org"]

[database]
engine = "django.db.backends.sqlite3"
name = "site.sqlite3"
"#,
    )
    .unwrap();

    let mut cmd = settings_cmd(dir.path());
    cmd.arg("show")
        .arg("--format")
        .arg("toml")
        .arg("--config")
        .arg(&config);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("django.db.backends.sqlite3"))
        .stdout(predicate::str::contains(".example.org"))
        .stdout(predicate::str::contains("file-secret").not());
}

#[test]
fn test_env_db_port_overrides_config_file_database() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("settings.toml");
    fs::write(
        &config,
        r#"
secret_key = "file-secret"

[database]
name = "community"
user = "app"
"#,
    )
    .unwrap();

    let mut cmd = settings_cmd(dir.path());
    cmd.env("DB_PORT", "6000")
        .arg("show")
        .arg("--config")
        .arg(&config);

    let output = cmd.assert().success().get_output().stdout.clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["database"]["port"], 6000);
    assert_eq!(json["database"]["name"], "community");
    assert_eq!(json["database"]["user"], "app");
}

#[test]
fn test_diagnose_hides_passwords() {
    let dir = TempDir::new().unwrap();
    let mut cmd = settings_cmd(dir.path());
    cmd.env("DB_PASSWORD", "hunter2")
        .env("DB_HOST", "db.local")
        .arg("diagnose");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("***hidden***"))
        .stdout(predicate::str::contains("db.local"))
        .stdout(predicate::str::contains("hunter2").not());
}
