//! Integration tests for CLI infrastructure

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::cargo_bin;
use autostacker_testkit::{temp_dir_in_workspace, with_isolated_env, write_file};
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_cli_version_flag() {
    with_isolated_env(|| {
        let mut cmd = Command::new(cargo_bin!(env!("CARGO_PKG_NAME")));
        cmd.arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("autostacker"));
    });
}

#[test]
fn test_cli_help_flag() {
    with_isolated_env(|| {
        let mut cmd = Command::new(cargo_bin!(env!("CARGO_PKG_NAME")));
        cmd.arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Usage:"))
            .stdout(predicate::str::contains("interpolate"))
            .stdout(predicate::str::contains("preprocess"));
    });
}

#[test]
fn test_cli_requires_subcommand() {
    with_isolated_env(|| {
        Command::new(cargo_bin!("autostacker")).assert().failure();
    });
}

#[test]
fn test_cli_invalid_config_is_reported() {
    with_isolated_env(|| {
        let temp = temp_dir_in_workspace();
        let config = write_file(temp.path(), "bad.toml", "[interpolation\n");

        Command::new(cargo_bin!("autostacker"))
            .arg("--config")
            .arg(&config)
            .arg("interpolate")
            .arg("@X")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to load config"))
            .stderr(predicate::str::contains("CONFIG_PARSE_ERROR"));
    });
}

#[test]
fn test_cli_config_from_env() {
    with_isolated_env(|| {
        let temp = temp_dir_in_workspace();
        write_file(temp.path(), "inc/part.txt", "@FromFile");
        let config = write_file(
            temp.path(),
            "autostacker.toml",
            "[interpolation]\nbase_dir = \"inc\"\n",
        );

        Command::new(cargo_bin!("autostacker"))
            .env("AUTOSTACKER_CONFIG", &config)
            .arg("interpolate")
            .arg("@file://part.txt")
            .assert()
            .success()
            .stdout(predicate::str::contains("\"Ref\": \"FromFile\""));
    });
}

#[test]
fn test_cli_picks_up_local_config() {
    with_isolated_env(|| {
        let temp = temp_dir_in_workspace();
        write_file(temp.path(), "scripts/part.txt", "@Local");
        write_file(
            temp.path(),
            "autostacker.toml",
            "[interpolation]\nbase_dir = \"scripts\"\n",
        );

        Command::new(cargo_bin!("autostacker"))
            .current_dir(temp.path())
            .arg("interpolate")
            .arg("@{file://part.txt}")
            .assert()
            .success()
            .stdout(predicate::str::contains("\"Ref\": \"Local\""));
    });
}
