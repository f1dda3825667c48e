//! Format specs
//!
//! Verify `jf format` turns a request into a job document.

use crate::prelude::*;

fn format(workspace: &Workspace) -> Value {
    workspace
        .jf()
        .args(&["--catalog", "catalog.toml", "format", "request.json", "--user", "ipctest"])
        .passes()
        .json()
}

#[test]
fn format_prints_job_document() {
    let workspace = Workspace::with_catalog();
    let document = format(&workspace);

    assert_eq!(document["request_type"], "submit");
    assert_eq!(document["type"], "condor");
    assert_eq!(document["analysis_id"], "trim-align");
    assert_eq!(document["analysis_name"], "Trim and align");
    assert_eq!(document["workspace_id"], 42);
    assert_eq!(document["username"], "ipctest");
    assert_eq!(document["name"], "nightly");
    assert!(document.get("config").is_none());
}

#[test]
fn format_emits_steps_in_declared_order() {
    let workspace = Workspace::with_catalog();
    let document = format(&workspace);

    let steps = document["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 2);
    assert_eq!(steps[0]["name"], "trim");
    assert_eq!(steps[1]["name"], "align");
    assert_eq!(steps[0]["component"]["name"], "trimmer");
}

#[test]
fn format_stages_configured_inputs() {
    let workspace = Workspace::with_catalog();
    let document = format(&workspace);

    let input = &document["steps"][0]["config"]["input"];
    assert_eq!(input.as_array().unwrap().len(), 1);
    assert_eq!(input[0]["name"], "raw.fq");
    assert_eq!(input[0]["value"], "file:///data/raw.fq");
    assert_eq!(input[0]["multiplicity"], "single");
}

#[test]
fn format_builds_params() {
    let workspace = Workspace::with_catalog();
    let document = format(&workspace);

    let trim: Vec<(String, String)> = document["steps"][0]["config"]["params"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| (p["name"].as_str().unwrap().to_string(), p["value"].as_str().unwrap().to_string()))
        .collect();
    assert_eq!(
        trim,
        vec![
            ("-i".to_string(), "raw.fq".to_string()),
            ("-q".to_string(), "20".to_string()),
            ("-o".to_string(), "trimmed.fq".to_string()),
        ]
    );

    let align = &document["steps"][1]["config"]["params"];
    assert_eq!(align[0]["name"], "-r");
    assert_eq!(align[0]["value"], "trimmed.fq");
    assert_eq!(align[1]["name"], "-t");
    assert_eq!(align[1]["value"], "4");
}

#[test]
fn format_ends_outputs_with_logs() {
    let workspace = Workspace::with_catalog();
    let document = format(&workspace);

    for step in document["steps"].as_array().unwrap() {
        let outputs = step["config"]["output"].as_array().unwrap();
        let last = outputs.last().unwrap();
        assert_eq!(last["name"], "logs");
        assert_eq!(last["multiplicity"], "collection");
    }
}

#[test]
fn format_reads_request_from_stdin() {
    let workspace = Workspace::with_catalog();
    let document = workspace
        .jf()
        .args(&["--catalog", "catalog.toml", "format", "-", "--user", "ipctest"])
        .stdin(REQUEST)
        .passes()
        .json();
    assert_eq!(document["analysis_id"], "trim-align");
}

#[test]
fn format_uses_url_prefix() {
    let workspace = Workspace::with_catalog();
    let document = workspace
        .jf()
        .args(&[
            "--catalog",
            "catalog.toml",
            "format",
            "request.json",
            "--user",
            "ipctest",
            "--url-prefix",
            "irods://zone/",
        ])
        .passes()
        .json();
    assert_eq!(
        document["steps"][0]["config"]["input"][0]["value"],
        "irods://zone/data/raw.fq"
    );
}

#[test]
fn format_debug_retains_everything() {
    let workspace = Workspace::with_catalog();
    workspace.file(
        "debug.json",
        r#"{"analysis_id": "trim-align", "workspace_id": "42", "debug": true,
            "config": {"trim_raw": "/data/raw.fq"}}"#,
    );
    let document = workspace
        .jf()
        .args(&["--catalog", "catalog.toml", "format", "debug.json", "--user", "ipctest"])
        .passes()
        .json();

    let trim = &document["steps"][0]["config"];
    assert_eq!(trim["input"][0]["retain"], true);
    assert!(trim["output"]
        .as_array()
        .unwrap()
        .iter()
        .all(|output| output["retain"] == true));
}

#[test]
fn format_text_output_summarizes_steps() {
    let workspace = Workspace::with_catalog();
    workspace
        .jf()
        .args(&[
            "--catalog",
            "catalog.toml",
            "format",
            "request.json",
            "--user",
            "ipctest",
            "--email",
            "ipctest@example.org",
            "-o",
            "text",
        ])
        .passes()
        .stdout_has("Job: Trim and align (trim-align)")
        .stdout_has("User: ipctest <ipctest@example.org>")
        .stdout_has("Step trim: 1 input(s), 3 param(s), 2 output(s)")
        .stdout_has("Step align: 0 input(s), 2 param(s), 2 output(s)");
}

#[test]
fn format_is_deterministic() {
    let workspace = Workspace::with_catalog();
    let run = || {
        workspace
            .jf()
            .args(&["--catalog", "catalog.toml", "format", "request.json", "--user", "ipctest"])
            .passes()
            .stdout
    };
    similar_asserts::assert_eq!(run(), run());
}
