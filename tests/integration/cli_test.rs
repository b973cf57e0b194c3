//! Integration tests for the command line

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command for the ghostwrite binary, isolated from the user's config and cache.
fn ghostwrite(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ghostwrite").expect("binary should build");
    cmd.env("XDG_CONFIG_HOME", home.path().join("config"))
        .env("XDG_CACHE_HOME", home.path().join("cache"))
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn help_exits_0_and_shows_usage() {
    let home = TempDir::new().unwrap();
    ghostwrite(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("<FILE>"))
        .stdout(predicate::str::contains("--max-delay"))
        .stdout(predicate::str::contains("--seed"));
}

#[test]
fn version_shows_package_version() {
    let home = TempDir::new().unwrap();
    ghostwrite(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "ghostwrite {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn no_arguments_is_a_usage_error() {
    let home = TempDir::new().unwrap();
    ghostwrite(&home)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("required"))
        .stderr(predicate::str::contains("<FILE>"));
}

#[test]
fn missing_file_fails_fast_with_message() {
    let home = TempDir::new().unwrap();
    ghostwrite(&home)
        .arg("does-not-exist.txt")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("File not found"))
        .stderr(predicate::str::contains("does-not-exist.txt"));
}

#[test]
fn show_config_prints_defaults() {
    let home = TempDir::new().unwrap();
    ghostwrite(&home)
        .arg("--show-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("max_char_delay_ms = 20"))
        .stdout(predicate::str::contains("space_delay_ms = 10"))
        .stdout(predicate::str::contains("save_command = \":wq\""));
}

#[test]
fn show_config_applies_flags() {
    let home = TempDir::new().unwrap();
    ghostwrite(&home)
        .args(["--show-config", "--max-delay", "80", "--title", "nvim"])
        .assert()
        .success()
        .stdout(predicate::str::contains("max_char_delay_ms = 80"))
        .stdout(predicate::str::contains("title = \"nvim\""));
}

#[test]
fn show_config_reads_explicit_config_file() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("custom.toml");
    std::fs::write(&config, "[timing]\nhold_ms = 1000\n").unwrap();

    ghostwrite(&home)
        .arg("--show-config")
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("hold_ms = 1000"));
}

#[cfg(target_os = "linux")]
#[test]
fn user_config_file_is_picked_up() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join("config").join("ghostwrite");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "[display]\nsave_command = \":x\"\n").unwrap();

    ghostwrite(&home)
        .arg("--show-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("save_command = \":x\""));
}

#[test]
fn missing_explicit_config_is_an_error() {
    let home = TempDir::new().unwrap();
    ghostwrite(&home)
        .args(["--show-config", "--config", "/nonexistent/ghostwrite.toml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read config file"));
}
