//! Error specs
//!
//! Verify failures exit non-zero with helpful messages.

use crate::prelude::*;
use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_commands() {
    Command::cargo_bin("jf")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("format").and(predicate::str::contains("analysis")));
}

#[test]
fn missing_catalog_fails() {
    let workspace = Workspace::with_catalog();
    workspace
        .jf()
        .args(&["format", "request.json", "--user", "ipctest"])
        .fails()
        .stderr_has("No catalog given")
        .stderr_has("--catalog");
}

#[test]
fn missing_user_fails() {
    let workspace = Workspace::with_catalog();
    workspace
        .jf()
        .args(&["--catalog", "catalog.toml", "format", "request.json"])
        .fails()
        .stderr_has("No user");
}

#[test]
fn missing_request_file_fails() {
    let workspace = Workspace::with_catalog();
    workspace
        .jf()
        .args(&["--catalog", "catalog.toml", "format", "absent.json", "--user", "u"])
        .fails()
        .stderr_has("failed to read job request");
}

#[test]
fn unknown_analysis_fails() {
    let workspace = Workspace::with_catalog();
    workspace.file("request.json", r#"{"analysis_id": "nope", "workspace_id": 1}"#);
    workspace
        .jf()
        .args(&["--catalog", "catalog.toml", "format", "request.json", "--user", "u"])
        .fails()
        .stderr_has("Analysis 'nope' not found")
        .stderr_has("jf analysis list");
}

#[test]
fn non_numeric_workspace_fails() {
    let workspace = Workspace::with_catalog();
    workspace.file(
        "request.json",
        r#"{"analysis_id": "trim-align", "workspace_id": "home"}"#,
    );
    workspace
        .jf()
        .args(&["--catalog", "catalog.toml", "format", "request.json", "--user", "u"])
        .fails()
        .stderr_has("invalid workspace id: home");
}

#[test]
fn backward_only_mappings_are_enforced() {
    let workspace = Workspace::with_catalog();
    let reversed = CATALOG.replace(
        "source = \"trim\"\ntarget = \"align\"",
        "source = \"align\"\ntarget = \"trim\"",
    );
    let reversed = reversed.replace("\"trim_trimmed\" = \"reads\"", "\"align_bam\" = \"raw\"");
    workspace.file("catalog.toml", &reversed);
    workspace.file(
        "request.json",
        r#"{"analysis_id": "trim-align", "workspace_id": 1}"#,
    );
    workspace
        .jf()
        .args(&["--catalog", "catalog.toml", "format", "request.json", "--user", "u"])
        .fails()
        .stderr_has("Step 'trim' is fed by step 'align'");
}

#[test]
fn invalid_catalog_lists_every_problem() {
    let workspace = Workspace::empty();
    workspace.file(
        "catalog.toml",
        r#"
        [[analysis]]
        id = "a1"

        [[analysis.step]]
        name = "s"
        template = "t"

        [[analysis.step]]
        name = "s"
        template = "t"

        [[template]]
        id = "t"

        [[template.group]]
        name = "g"

        [[template.group.property]]
        id = "p"
        data_object = "missing"
        "#,
    );
    workspace
        .jf()
        .args(&["--catalog", "catalog.toml", "analysis", "list"])
        .fails()
        .stderr_has("Catalog validation failed with 2 error(s)");
}

#[test]
fn unsupported_catalog_extension_fails() {
    let workspace = Workspace::empty();
    workspace.file("catalog.yaml", "");
    workspace
        .jf()
        .args(&["--catalog", "catalog.yaml", "analysis", "list"])
        .fails()
        .stderr_has("unsupported catalog format");
}
