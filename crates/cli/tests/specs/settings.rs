//! Settings specs
//!
//! Verify the settings file supplies defaults that flags override.

use crate::prelude::*;

fn settings(workspace: &Workspace) -> String {
    format!(
        "catalog = \"{}\"\n\n[urls]\nprefix = \"irods://zone\"\n\n[user]\nusername = \"from-settings\"\nemail = \"s@example.org\"\n",
        workspace.path("catalog.toml").display()
    )
}

#[test]
fn settings_supply_catalog_user_and_prefix() {
    let workspace = Workspace::with_catalog();
    workspace.file("jf.toml", &settings(&workspace));

    let document = workspace
        .jf()
        .args(&["--config", "jf.toml", "format", "request.json"])
        .passes()
        .json();

    assert_eq!(document["username"], "from-settings");
    assert_eq!(document["email"], "s@example.org");
    assert_eq!(
        document["steps"][0]["config"]["input"][0]["value"],
        "irods://zone/data/raw.fq"
    );
}

#[test]
fn flags_override_settings() {
    let workspace = Workspace::with_catalog();
    workspace.file("jf.toml", &settings(&workspace));

    let document = workspace
        .jf()
        .args(&["--config", "jf.toml", "format", "request.json", "--user", "flagged"])
        .passes()
        .json();
    assert_eq!(document["username"], "flagged");
}

#[test]
fn settings_path_from_environment() {
    let workspace = Workspace::with_catalog();
    workspace.file("env.toml", &settings(&workspace));

    let document = workspace
        .jf()
        .env("JF_CONFIG", workspace.path("env.toml"))
        .args(&["format", "request.json"])
        .passes()
        .json();
    assert_eq!(document["username"], "from-settings");
}

#[test]
fn default_settings_location_is_used() {
    let workspace = Workspace::with_catalog();
    workspace.file(".config/jf/config.toml", &settings(&workspace));

    workspace
        .jf()
        .args(&["analysis", "list"])
        .passes()
        .stdout_has("trim-align");
}

#[test]
fn missing_explicit_settings_fail() {
    let workspace = Workspace::with_catalog();
    workspace
        .jf()
        .args(&["--config", "absent.toml", "analysis", "list"])
        .fails()
        .stderr_has("Settings file")
        .stderr_has("not found");
}
