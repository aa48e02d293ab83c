//! Integration tests for `autostacker interpolate`

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::cargo_bin;
use autostacker_testkit::{temp_dir_in_workspace, with_isolated_env, write_file};
use predicates::prelude::*;
use serde_json::{json, Value};
use std::process::Command;

fn interpolate_json(args: &[&str]) -> Value {
    let output = Command::new(cargo_bin!("autostacker"))
        .arg("interpolate")
        .args(args)
        .output()
        .expect("Failed to run autostacker");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

#[test]
fn test_interpolate_plain_text() {
    with_isolated_env(|| {
        assert_eq!(interpolate_json(&["hullebulle@@bla.com"]), json!("hullebulle@bla.com"));
    });
}

#[test]
fn test_interpolate_join() {
    with_isolated_env(|| {
        assert_eq!(
            interpolate_json(&["bla @Param-blub"]),
            json!({ "Fn::Join": ["", ["bla ", { "Ref": "Param" }, "-blub"]] })
        );
    });
}

#[test]
fn test_interpolate_find_in_map() {
    with_isolated_env(|| {
        assert_eq!(
            interpolate_json(&["@MyMap[Top, Second]"]),
            json!({ "Fn::FindInMap": ["MyMap", "Top", "Second"] })
        );
    });
}

#[test]
fn test_interpolate_ast() {
    with_isolated_env(|| {
        assert_eq!(
            interpolate_json(&["--ast", "@Param.domain.tld"]),
            json!({ "Expr": { "Attribute": { "name": "Param", "path": "domain.tld" } } })
        );
    });
}

#[test]
fn test_interpolate_with_base_dir() {
    with_isolated_env(|| {
        let temp = temp_dir_in_workspace();
        write_file(temp.path(), "script.sh", "echo @Version");
        let base_dir = temp.path().to_string_lossy().to_string();

        assert_eq!(
            interpolate_json(&["--base-dir", &base_dir, "@file://script.sh"]),
            json!({ "Fn::Join": ["", ["echo ", { "Ref": "Version" }]] })
        );
    });
}

#[test]
fn test_interpolate_unterminated_fails() {
    with_isolated_env(|| {
        Command::new(cargo_bin!("autostacker"))
            .arg("interpolate")
            .arg("@{Param")
            .assert()
            .failure()
            .stderr(predicate::str::contains("UNTERMINATED_DELIMITER"));
    });
}

#[test]
fn test_interpolate_missing_include_fails() {
    with_isolated_env(|| {
        let temp = temp_dir_in_workspace();
        Command::new(cargo_bin!("autostacker"))
            .current_dir(temp.path())
            .arg("interpolate")
            .arg("@file://nope.sh")
            .assert()
            .failure()
            .stderr(predicate::str::contains("INCLUDE_READ_FAILED"));
    });
}
