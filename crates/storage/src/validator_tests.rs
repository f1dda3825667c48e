// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::parser::{parse_raw_catalog, CatalogFormat};

fn validate(toml: &str) -> Result<(), ValidationErrors> {
    let raw = parse_raw_catalog(toml, CatalogFormat::Toml).unwrap();
    validate_catalog(&raw)
}

#[test]
fn valid_catalog_passes() {
    let toml = r#"
[[analysis]]
id = "a1"
[[analysis.step]]
name = "trim"
template = "t1"

[[template]]
id = "t1"
component = "c1"
[[template.input]]
id = "in1"
info_type = "FastQ"
[[template.group]]
[[template.group.property]]
id = "p1"
type = "Input"
data_object = "in1"
"#;
    assert!(validate(toml).is_ok());
}

#[test]
fn duplicate_step_names() {
    let toml = r#"
[[analysis]]
id = "a1"
[[analysis.step]]
name = "trim"
[[analysis.step]]
name = "trim"
[[analysis.step]]
name = "trim"
"#;
    let errors = validate(toml).unwrap_err();
    assert_eq!(
        errors.errors,
        vec![ValidationError::Duplicate {
            kind: "step",
            id: "trim".to_string(),
            scope: "analysis 'a1'".to_string(),
        }]
    );
}

#[test]
fn duplicate_property_and_data_object_ids() {
    let toml = r#"
[[template]]
id = "t1"
[[template.input]]
id = "d1"
[[template.output]]
id = "d1"
[[template.group]]
[[template.group.property]]
id = "p1"
[[template.group]]
[[template.group.property]]
id = "p1"
"#;
    let errors = validate(toml).unwrap_err();
    assert_eq!(errors.errors.len(), 2);
    assert!(errors
        .errors
        .iter()
        .any(|e| matches!(e, ValidationError::Duplicate { kind: "property", .. })));
    assert!(errors
        .errors
        .iter()
        .any(|e| matches!(e, ValidationError::Duplicate { kind: "data object", .. })));
}

#[test]
fn property_may_share_id_with_its_data_object() {
    let toml = r#"
[[template]]
id = "t1"
[[template.input]]
id = "reads"
[[template.group]]
[[template.group.property]]
id = "reads"
data_object = "reads"
"#;
    assert!(validate(toml).is_ok());
}

#[test]
fn dangling_data_object_reference() {
    let toml = r#"
[[template]]
id = "t1"
[[template.group]]
[[template.group.property]]
id = "p1"
type = "Input"
data_object = "missing"
"#;
    let errors = validate(toml).unwrap_err();
    let message = errors.to_string();
    assert!(message.contains("undefined data object 'missing'"), "{}", message);
    assert!(message.contains("property 'p1'"), "{}", message);
}

#[test]
fn empty_ids_are_reported() {
    let toml = r#"
[[component]]
name = "nameless"
"#;
    let errors = validate(toml).unwrap_err();
    assert!(matches!(
        errors.errors[0],
        ValidationError::MissingId { kind: "component", .. }
    ));
}

#[test]
fn unknown_multiplicity() {
    let toml = r#"
[[template]]
id = "t1"
[[template.output]]
id = "o1"
multiplicity = "several"
"#;
    let errors = validate(toml).unwrap_err();
    assert!(errors.to_string().contains("expected single, many or collection"));
}

#[test]
fn errors_are_numbered() {
    let toml = r#"
[[analysis]]
id = "a1"
[[analysis]]
id = "a1"
[[template]]
id = "t1"
[[template]]
id = "t1"
"#;
    let message = validate(toml).unwrap_err().to_string();
    assert!(message.starts_with("Catalog validation failed with 2 error(s):"));
    assert!(message.contains("  1: duplicate analysis 'a1' in catalog"));
    assert!(message.contains("  2: duplicate template 't1' in catalog"));
}
