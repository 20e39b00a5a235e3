//! Integration tests for the pwvault CLI.
//!
//! These tests exercise the binary end-to-end using `assert_cmd`.
//! The master password comes from `PWVAULT_PASSWORD` so no prompt is
//! ever shown, and each test writes a `.pwvault.toml` that lowers the
//! PBKDF2 iteration count to keep the suite fast.

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

const MASTER: &str = "Pa$$w0rd";

/// Helper: get a Command pointing at the pwvault binary.
fn pwvault() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("pwvault").expect("binary should exist")
}

/// Helper: a temp project dir with a fast-KDF config file.
fn project() -> TempDir {
    let tmp = TempDir::new().unwrap();
    tmp.child(".pwvault.toml")
        .write_str("kdf_iterations = 10000\n")
        .unwrap();
    tmp
}

/// Helper: a pwvault command running inside `dir` with the master password set.
fn pwvault_in(dir: &TempDir) -> Command {
    let mut cmd = pwvault();
    cmd.current_dir(dir.path())
        .env("PWVAULT_PASSWORD", MASTER)
        .env_remove("RUST_LOG");
    cmd
}

fn init(dir: &TempDir) {
    pwvault_in(dir).arg("init").assert().success();
}

// ---------------------------------------------------------------------------
// Help and argument parsing
// ---------------------------------------------------------------------------

#[test]
fn help_flag_shows_usage() {
    pwvault()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Local encrypted password vault"))
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("get"))
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("delete"))
        .stdout(predicate::str::contains("gen-password"));
}

#[test]
fn version_flag_shows_version() {
    pwvault()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pwvault"));
}

#[test]
fn no_args_shows_help() {
    pwvault()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

// ---------------------------------------------------------------------------
// Vault lifecycle
// ---------------------------------------------------------------------------

#[test]
fn init_creates_vault_file() {
    let tmp = project();
    pwvault_in(&tmp)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Vault created"));

    tmp.child("passwords.vault").assert(predicate::path::exists());
}

#[test]
fn init_twice_requires_force() {
    let tmp = project();
    init(&tmp);

    pwvault_in(&tmp)
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Vault already exists"));

    pwvault_in(&tmp).args(["init", "--force"]).assert().success();
}

#[test]
fn init_rejects_short_master_password() {
    let tmp = project();
    pwvault_in(&tmp)
        .env("PWVAULT_PASSWORD", "short")
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 8 characters"));

    tmp.child("passwords.vault")
        .assert(predicate::path::missing());
}

#[test]
fn get_on_missing_vault_fails() {
    let tmp = project();
    pwvault_in(&tmp)
        .args(["get", "youtube"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No vault found"));
}

#[test]
fn add_then_get_roundtrip() {
    let tmp = project();
    init(&tmp);

    pwvault_in(&tmp)
        .args(["add", "youtube", "Pa$$w0rd12345"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Stored 'youtube'"));

    pwvault_in(&tmp)
        .args(["get", "youtube"])
        .assert()
        .success()
        .stdout("Pa$$w0rd12345\n");
}

#[test]
fn add_reads_secret_from_stdin() {
    let tmp = project();
    init(&tmp);

    pwvault_in(&tmp)
        .args(["add", "github"])
        .write_stdin("piped-secret-value\n")
        .assert()
        .success();

    pwvault_in(&tmp)
        .args(["get", "github"])
        .assert()
        .success()
        .stdout("piped-secret-value\n");
}

#[test]
fn add_duplicate_identifier_fails() {
    let tmp = project();
    init(&tmp);
    pwvault_in(&tmp)
        .args(["add", "youtube", "Pa$$w0rd12345"])
        .assert()
        .success();

    pwvault_in(&tmp)
        .args(["add", "youtube", "another-password"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn add_short_password_fails() {
    let tmp = project();
    init(&tmp);
    pwvault_in(&tmp)
        .args(["add", "youtube", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid password"));
}

#[test]
fn list_shows_identifiers() {
    let tmp = project();
    init(&tmp);
    pwvault_in(&tmp)
        .args(["add", "youtube", "Pa$$w0rd12345"])
        .assert()
        .success();
    pwvault_in(&tmp)
        .args(["add", "github", "hunter2hunter2"])
        .assert()
        .success();

    pwvault_in(&tmp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 password(s)"))
        .stdout(predicate::str::contains("youtube"))
        .stdout(predicate::str::contains("github"))
        .stdout(predicate::str::contains("Pa$$w0rd12345").not());
}

#[test]
fn list_empty_vault() {
    let tmp = project();
    init(&tmp);
    pwvault_in(&tmp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("no password entries"));
}

#[test]
fn generate_show_prints_stored_secret() {
    let tmp = project();
    init(&tmp);

    let out = pwvault_in(&tmp)
        .args(["generate", "bank", "--length", "32", "--show"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(out).unwrap();
    let secret = stdout.lines().last().unwrap().to_string();
    assert_eq!(secret.chars().count(), 32);

    pwvault_in(&tmp)
        .args(["get", "bank"])
        .assert()
        .success()
        .stdout(format!("{secret}\n"));
}

#[test]
fn generate_rejects_out_of_range_length() {
    let tmp = project();
    init(&tmp);
    pwvault_in(&tmp)
        .args(["generate", "bank", "--length", "81"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn delete_with_force_removes_entry() {
    let tmp = project();
    init(&tmp);
    pwvault_in(&tmp)
        .args(["add", "youtube", "Pa$$w0rd12345"])
        .assert()
        .success();

    pwvault_in(&tmp)
        .args(["delete", "youtube", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 'youtube'"));

    pwvault_in(&tmp)
        .args(["get", "youtube"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No password stored"));
}

#[test]
fn delete_missing_identifier_fails() {
    let tmp = project();
    init(&tmp);
    pwvault_in(&tmp)
        .args(["delete", "nothing-here", "--force"])
        .assert()
        .failure();
}

#[test]
fn delete_checks_entry_before_asking_for_confirmation() {
    let tmp = project();
    init(&tmp);

    // No --force: reaching the prompt on a non-terminal stdin would fail
    // with a prompt error instead.
    pwvault_in(&tmp)
        .args(["delete", "nothing-here"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No password stored"));

    pwvault_in(&tmp)
        .env("PWVAULT_PASSWORD", "not-the-password")
        .args(["delete", "nothing-here"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Wrong master password"));
}

#[test]
fn wrong_master_password_fails() {
    let tmp = project();
    init(&tmp);

    pwvault_in(&tmp)
        .env("PWVAULT_PASSWORD", "not-the-password")
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Wrong master password"));
}

#[test]
fn explicit_vault_flag_is_honored() {
    let tmp = project();
    let custom = tmp.child("custom.vault");

    pwvault_in(&tmp)
        .args(["init", "--vault", custom.path().to_str().unwrap()])
        .assert()
        .success();

    custom.assert(predicate::path::exists());
    tmp.child("passwords.vault")
        .assert(predicate::path::missing());
}

// ---------------------------------------------------------------------------
// gen-password
// ---------------------------------------------------------------------------

#[test]
fn gen_password_prints_requested_length() {
    let tmp = project();
    let out = pwvault_in(&tmp)
        .args(["gen-password", "--length", "12"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(out).unwrap();
    assert_eq!(stdout.trim_end_matches('\n').chars().count(), 12);
}

#[test]
fn gen_password_default_length_from_config() {
    let tmp = TempDir::new().unwrap();
    tmp.child(".pwvault.toml")
        .write_str("random_password_length = 33\n")
        .unwrap();

    let out = pwvault_in(&tmp)
        .arg("gen-password")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(String::from_utf8(out).unwrap().trim_end_matches('\n').len(), 33);
}

#[test]
fn gen_password_rejects_short_length() {
    let tmp = project();
    pwvault_in(&tmp)
        .args(["gen-password", "--length", "7"])
        .assert()
        .failure();
}

#[test]
fn malformed_config_is_reported() {
    let tmp = TempDir::new().unwrap();
    tmp.child(".pwvault.toml")
        .write_str("kdf_iterations = \"lots\"\n")
        .unwrap();

    pwvault_in(&tmp)
        .arg("gen-password")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file error"));
}
