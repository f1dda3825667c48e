// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn component(id: &str) -> DeployedComponent {
    DeployedComponent {
        id: id.to_string(),
        name: "bwa".to_string(),
        location: "/usr/local/bin".to_string(),
        component_type: "executable".to_string(),
        description: String::new(),
    }
}

#[test]
fn fake_store_finds_registered_records() {
    let store = FakeStore::new()
        .with_analysis(AnalysisDefinition {
            id: "a-1".to_string(),
            ..Default::default()
        })
        .with_template(Template {
            id: "t-1".to_string(),
            component_id: "c-1".to_string(),
            ..Default::default()
        })
        .with_component(component("c-1"));

    assert!(store.find_analysis("a-1").unwrap().is_some());
    assert!(store.find_template("t-1").unwrap().is_some());
    assert_eq!(
        store.find_component("c-1").unwrap().map(|c| c.name),
        Some("bwa".to_string())
    );
}

#[test]
fn fake_store_returns_none_for_unknown_ids() {
    let store = FakeStore::new();
    assert!(store.find_analysis("nope").unwrap().is_none());
    assert!(store.find_template("nope").unwrap().is_none());
    assert!(store.find_component("nope").unwrap().is_none());
}

#[test]
fn fake_store_records_calls_in_order() {
    let store = FakeStore::new();
    let _ = store.find_analysis("a");
    let _ = store.find_template("t");
    let _ = store.find_component("c");

    assert_eq!(
        store.calls(),
        vec![
            StoreCall::FindAnalysis("a".to_string()),
            StoreCall::FindTemplate("t".to_string()),
            StoreCall::FindComponent("c".to_string()),
        ]
    );
}

#[test]
fn fake_store_can_be_made_unavailable() {
    let store = FakeStore::new();
    store.set_unavailable("database offline");

    let err = store.find_template("t").unwrap_err();
    assert!(matches!(err, StoreError::Unavailable(_)));
    assert!(err.to_string().contains("database offline"));
    assert_eq!(store.calls().len(), 1);
}
