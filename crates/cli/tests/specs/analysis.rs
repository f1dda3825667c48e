//! Analysis specs
//!
//! Verify catalog inspection commands.

use crate::prelude::*;

#[test]
fn analysis_list_shows_analyses() {
    let workspace = Workspace::with_catalog();
    workspace
        .jf()
        .args(&["--catalog", "catalog.toml", "analysis", "list"])
        .passes()
        .stdout_has("ID")
        .stdout_has("trim-align")
        .stdout_has("Trim and align");
}

#[test]
fn analysis_list_as_json() {
    let workspace = Workspace::with_catalog();
    let rows = workspace
        .jf()
        .args(&["--catalog", "catalog.toml", "analysis", "list", "-o", "json"])
        .passes()
        .json();

    assert_eq!(rows[0]["id"], "trim-align");
    assert_eq!(rows[0]["steps"], 2);
}

#[test]
fn analysis_list_empty_catalog() {
    let workspace = Workspace::empty();
    workspace.file("catalog.toml", "");
    workspace
        .jf()
        .args(&["--catalog", "catalog.toml", "analysis", "list"])
        .passes()
        .stdout_has("No analyses");
}

#[test]
fn analysis_show_lists_steps_and_mappings() {
    let workspace = Workspace::with_catalog();
    let output = workspace
        .jf()
        .args(&["--catalog", "catalog.toml", "analysis", "show", "trim-align"])
        .passes();

    output
        .stdout_has("Analysis: trim-align")
        .stdout_has("1. trim (template t-trim, component c-trim)")
        .stdout_has("2. align (template t-align, component c-align)")
        .stdout_has("trim: trim_trimmed -> align: reads");
    assert!(output.stdout.find("1. trim").unwrap() < output.stdout.find("2. align").unwrap());
}

#[test]
fn analysis_show_unknown_fails() {
    let workspace = Workspace::with_catalog();
    workspace
        .jf()
        .args(&["--catalog", "catalog.toml", "analysis", "show", "nope"])
        .fails()
        .stderr_has("Analysis 'nope' not found")
        .stderr_has("jf analysis list");
}

#[test]
fn analysis_reads_json_catalogs() {
    let workspace = Workspace::empty();
    workspace.file(
        "catalog.json",
        r#"{"analysis": [{"id": "a1", "name": "Json analysis", "step": []}]}"#,
    );
    workspace
        .jf()
        .args(&["--catalog", "catalog.json", "analysis", "list"])
        .passes()
        .stdout_has("Json analysis");
}
