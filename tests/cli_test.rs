//! Integration tests for the command-line binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;

fn catalog() -> Command {
    let mut cmd = Command::new(cargo_bin("scaffold-catalog"));
    cmd.env_remove("SCAFFOLD_TEMPLATE").env("NO_COLOR", "1");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    catalog()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("scaffolding templates"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    catalog()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_no_args_lists_templates() -> Result<(), Box<dyn std::error::Error>> {
    catalog().assert().success().stdout(
        predicate::str::contains("ccr")
            .and(predicate::str::contains("main"))
            .and(predicate::str::contains("web-explorer")),
    );
    Ok(())
}

#[test]
fn cli_ids_are_sorted() -> Result<(), Box<dyn std::error::Error>> {
    catalog()
        .arg("ids")
        .assert()
        .success()
        .stdout("ccr\nmain\nweb-explorer\n");
    Ok(())
}

#[test]
fn cli_list_by_tag() -> Result<(), Box<dyn std::error::Error>> {
    catalog()
        .args(["list", "--tag", "general"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Strategic Claude Basic"))
        .stdout(predicate::str::contains("ccr").not());
    Ok(())
}

#[test]
fn cli_list_json() -> Result<(), Box<dyn std::error::Error>> {
    let output = catalog().args(["list", "--json"]).output()?;
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    let ids: Vec<&str> = parsed
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["ccr", "main", "web-explorer"]);
    Ok(())
}

#[test]
fn cli_list_unmatched_language_still_shows_agnostic() -> Result<(), Box<dyn std::error::Error>> {
    catalog()
        .args(["list", "--language", "haskell"])
        .assert()
        .success()
        .stdout(predicate::str::contains("web-explorer"));
    Ok(())
}

#[test]
fn cli_show_default_template() -> Result<(), Box<dyn std::error::Error>> {
    catalog()
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("0c3747dd81c69bad66c828175e358fa840e88227"));
    Ok(())
}

#[test]
fn cli_show_reads_template_from_env() -> Result<(), Box<dyn std::error::Error>> {
    catalog()
        .env("SCAFFOLD_TEMPLATE", "ccr")
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("ccr-template"));
    Ok(())
}

#[test]
fn cli_show_unknown_template_fails() -> Result<(), Box<dyn std::error::Error>> {
    catalog()
        .args(["show", "does-not-exist"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("template 'does-not-exist' not found"));
    Ok(())
}

#[test]
fn cli_validate_known_template() -> Result<(), Box<dyn std::error::Error>> {
    catalog()
        .args(["validate", "main"])
        .assert()
        .success()
        .stdout(predicate::str::contains("is valid"));
    Ok(())
}

#[test]
fn cli_validate_unknown_template() -> Result<(), Box<dyn std::error::Error>> {
    catalog()
        .args(["validate", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
    Ok(())
}

#[test]
fn cli_validate_whole_catalog() -> Result<(), Box<dyn std::error::Error>> {
    catalog()
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("All 3 templates are valid"));
    Ok(())
}

#[test]
fn cli_quiet_list_drops_header_and_hint() -> Result<(), Box<dyn std::error::Error>> {
    catalog()
        .args(["--quiet", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("web-explorer"))
        .stdout(predicate::str::contains("Templates").not())
        .stderr(predicate::str::contains("show <id>").not());
    Ok(())
}

#[test]
fn cli_quiet_validate_still_reports_status() -> Result<(), Box<dyn std::error::Error>> {
    catalog()
        .args(["--quiet", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All 3 templates are valid"));
    Ok(())
}

#[test]
fn cli_completions() -> Result<(), Box<dyn std::error::Error>> {
    catalog()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("scaffold-catalog"));
    Ok(())
}

#[test]
fn cli_rejects_unknown_subcommand() -> Result<(), Box<dyn std::error::Error>> {
    catalog().arg("clone").assert().failure();
    Ok(())
}
