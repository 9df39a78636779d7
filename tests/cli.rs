// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Integration tests for the cmlint binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper to create a cmlint command isolated from the user's config files.
fn cmlint_in(dir: &Path) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("cmlint").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("CMLINT_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

/// Helper to create a temp dir holding a config file.
fn setup(config: &str) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("cmlint.toml"), config).unwrap();
    temp_dir
}

#[test]
fn test_valid_message_from_stdin() {
    let temp = setup("");
    cmlint_in(temp.path())
        .write_stdin("docs(readme): update usage\n")
        .assert()
        .success();
}

#[test]
fn test_invalid_message_reports_every_violation() {
    let temp = setup("");
    cmlint_in(temp.path())
        .arg("lint")
        .write_stdin("oops no structure")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("type-enum"))
        .stderr(predicate::str::contains("scope-empty"))
        .stderr(predicate::str::contains("2 error(s), 0 warning(s)"));
}

#[test]
fn test_draft_is_ignored() {
    let temp = setup("");
    cmlint_in(temp.path())
        .write_stdin("Draft: wip change")
        .assert()
        .success()
        .stderr(predicate::str::contains("ignored"));
}

#[test]
fn test_lint_file_strips_git_comments() {
    let temp = setup("");
    let msg = temp.path().join("COMMIT_EDITMSG");
    fs::write(
        &msg,
        "fix(core): handle empty input\n\n# Please enter the commit message for your changes.\n",
    )
    .unwrap();

    cmlint_in(temp.path())
        .arg("lint")
        .arg(&msg)
        .assert()
        .success();
}

#[test]
fn test_missing_file_is_an_error() {
    let temp = setup("");
    cmlint_in(temp.path())
        .args(["lint", "does-not-exist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn test_json_output() {
    let temp = setup("");
    let output = cmlint_in(temp.path())
        .args(["--format", "json", "lint"])
        .write_stdin("feature: add x")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["valid"], false);
    assert_eq!(json["exempt"], false);
    assert_eq!(json["violations"][0]["rule"], "type-enum");
    assert_eq!(json["violations"][1]["rule"], "scope-empty");
}

#[test]
fn test_warning_level_passes_unless_strict() {
    let temp = setup(
        r#"
[rules]
scope_empty_level = "warning"
"#,
    );

    cmlint_in(temp.path())
        .write_stdin("feat: add x")
        .assert()
        .success()
        .stderr(predicate::str::contains("scope-empty"));

    cmlint_in(temp.path())
        .args(["lint", "--strict"])
        .write_stdin("feat: add x")
        .assert()
        .failure();
}

#[test]
fn test_empty_allowed_types_is_config_error() {
    let temp = setup(
        r#"
[rules]
allowed_types = []
"#,
    );

    cmlint_in(temp.path())
        .write_stdin("feat(x): y")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "At least one allowed commit type is required",
        ));
}

#[test]
fn test_duplicate_header_field_is_config_error() {
    let temp = setup(
        r#"
[parser]
header_fields = ["type", "type", "subject"]
"#,
    );

    cmlint_in(temp.path())
        .write_stdin("feat(x): y")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duplicate header field"));
}

#[test]
fn test_explicit_config_path() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("custom.toml");
    fs::write(
        &config,
        r#"
[rules]
allowed_types = ["feature"]
scope_required = false
"#,
    )
    .unwrap();

    cmlint_in(temp.path())
        .arg("--config")
        .arg(&config)
        .write_stdin("feature: add x")
        .assert()
        .success();
}

#[test]
fn test_config_found_in_parent_directory() {
    let temp = setup("[ignores]\nsubstrings = [\"[skip]\"]\n");
    let nested = temp.path().join("sub").join("dir");
    fs::create_dir_all(&nested).unwrap();

    cmlint_in(&nested)
        .write_stdin("whatever [skip]")
        .assert()
        .success();
}

#[test]
fn test_git_default_ignores() {
    let temp = setup("[ignores]\nuse_defaults = true\n");
    cmlint_in(temp.path())
        .write_stdin("Merge branch 'main' into feature")
        .assert()
        .success();
}

#[test]
fn test_init_writes_example_config() {
    let temp = TempDir::new().unwrap();

    cmlint_in(temp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created cmlint.toml"));

    let written = fs::read_to_string(temp.path().join("cmlint.toml")).unwrap();
    assert!(written.contains("scope_required = true"));

    cmlint_in(temp.path()).arg("init").assert().failure();
    cmlint_in(temp.path()).args(["init", "--force"]).assert().success();
}

#[test]
fn test_init_force_replaces_broken_config() {
    let temp = setup("[rules\n");

    cmlint_in(temp.path())
        .args(["init", "--force"])
        .assert()
        .success();

    let written = fs::read_to_string(temp.path().join("cmlint.toml")).unwrap();
    assert!(written.starts_with("# cmlint configuration file"));

    cmlint_in(temp.path())
        .write_stdin("docs(readme): update usage")
        .assert()
        .success();
}

#[test]
fn test_version_ignores_broken_config() {
    let temp = setup("[rules\n");
    cmlint_in(temp.path()).arg("version").assert().success();
}

#[test]
fn test_lint_reports_broken_config() {
    let temp = setup("[rules\n");
    cmlint_in(temp.path())
        .write_stdin("docs(readme): update usage")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse TOML"));
}

#[test]
fn test_config_command_prints_effective_config() {
    let temp = setup("[rules]\nallowed_types = [\"feat\", \"fix\"]\n");
    cmlint_in(temp.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("allowed_types"))
        .stdout(predicate::str::contains("\"fix\""))
        .stdout(predicate::str::contains("Draft:"));
}

#[test]
fn test_version_command() {
    let temp = setup("");
    cmlint_in(temp.path())
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("cmlint "));
}
