// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

// ============================================================================
// RawValue shape decoding
// ============================================================================

#[test]
fn plain_text_is_scalar() {
    assert_eq!(
        RawValue::parse("reads.fq"),
        RawValue::Scalar("reads.fq".to_string())
    );
}

#[test]
fn numbers_stay_scalar_and_verbatim() {
    let value = RawValue::parse("1");
    assert_eq!(value, RawValue::Scalar("1".to_string()));
    assert_eq!(value.as_str(), "1");
}

#[test]
fn json_array_decodes_to_list() {
    let value = RawValue::parse(r#"["/a/one.fq", "/a/two.fq"]"#);
    assert_eq!(
        value.items(),
        Some(&["/a/one.fq".to_string(), "/a/two.fq".to_string()][..])
    );
    assert_eq!(value.as_str(), r#"["/a/one.fq", "/a/two.fq"]"#);
}

#[test]
fn list_elements_that_are_not_strings_keep_json_text() {
    let value = RawValue::parse("[1, true]");
    assert_eq!(
        value.items(),
        Some(&["1".to_string(), "true".to_string()][..])
    );
}

#[test]
fn json_object_decodes_to_keyed() {
    let value = RawValue::parse(r#"{"name": "--c", "value": "3"}"#);
    match value {
        RawValue::Keyed { name, value, .. } => {
            assert_eq!(name, "--c");
            assert_eq!(value, "3");
        }
        other => panic!("expected keyed value, got {:?}", other),
    }
}

#[test]
fn keyed_missing_fields_are_empty() {
    let value = RawValue::parse(r#"{"name": "hg19"}"#);
    match value {
        RawValue::Keyed { name, value, .. } => {
            assert_eq!(name, "hg19");
            assert_eq!(value, "");
        }
        other => panic!("expected keyed value, got {:?}", other),
    }
}

#[parameterized(
    unterminated_array = { "[1, 2" },
    broken_array = { "[not json]" },
    broken_object = { "{name}" },
    empty = { "" },
)]
fn invalid_json_falls_back_to_scalar(raw: &str) {
    assert_eq!(RawValue::parse(raw), RawValue::Scalar(raw.to_string()));
}

#[parameterized(
    empty = { "", true },
    spaces = { "   ", true },
    text = { "x", false },
    empty_list = { "[]", false },
)]
fn blank_detection(raw: &str, blank: bool) {
    assert_eq!(RawValue::parse(raw).is_blank(), blank);
}

// ============================================================================
// RuntimeConfig
// ============================================================================

#[test]
fn config_keys_join_step_and_id() {
    assert_eq!(RuntimeConfig::key("align", "p-1"), "align_p-1");
}

#[test]
fn config_lookup_by_step_and_id() {
    let config = RuntimeConfig::new().with("align", "p-1", "42");
    assert!(config.contains("align", "p-1"));
    assert_eq!(config.get("align", "p-1"), Some("42"));
    assert_eq!(config.get("sort", "p-1"), None);
    assert_eq!(
        config.lookup("align", "p-1"),
        Some(RawValue::Scalar("42".to_string()))
    );
}

#[test]
fn config_deserializes_non_string_values_as_json_text() {
    let config: RuntimeConfig = serde_json::from_str(
        r#"{"s_a": "plain", "s_b": ["x", "y"], "s_c": {"name": "n"}, "s_d": 3, "s_e": null}"#,
    )
    .unwrap();

    assert_eq!(config.get("s", "a"), Some("plain"));
    assert_eq!(config.get("s", "b"), Some(r#"["x","y"]"#));
    assert_eq!(config.get("s", "c"), Some(r#"{"name":"n"}"#));
    assert_eq!(config.get("s", "d"), Some("3"));
    assert_eq!(config.get("s", "e"), Some(""));
    assert_eq!(config.len(), 5);

    let list = config.lookup("s", "b").unwrap();
    assert_eq!(list.items().map(|items| items.len()), Some(2));
}

#[test]
fn config_serializes_as_flat_object() {
    let config = RuntimeConfig::new().with("s", "a", "1");
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(json, r#"{"s_a":"1"}"#);
}
