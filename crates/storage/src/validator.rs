// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Semantic validation for catalogs.
//!
//! Checks the identity rules the formatter relies on:
//! - Record ids are unique per kind
//! - Step names are unique within an analysis
//! - Property and data object ids are unique within a template
//! - Every property's data object is declared by its template
//!
//! Mapping order is not checked here. A mapping whose source follows its
//! target fails when the analysis is formatted.

use crate::types::{RawCatalog, RawTemplate};
use std::collections::HashSet;

/// Collection of validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    pub errors: Vec<ValidationError>,
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Catalog validation failed with {} error(s):",
            self.errors.len()
        )?;
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "  {}: {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// A single validation error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required identifier left empty
    MissingId { kind: &'static str, scope: String },
    /// Identifier declared twice in the same scope
    Duplicate {
        kind: &'static str,
        id: String,
        scope: String,
    },
    /// Reference to an undeclared data object
    UndefinedReference {
        kind: &'static str,
        name: String,
        referenced_in: String,
    },
    /// Value outside the accepted set
    InvalidValue {
        field: String,
        value: String,
        expected: &'static str,
    },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::MissingId { kind, scope } => {
                write!(f, "{} in {} has no id", kind, scope)
            }
            ValidationError::Duplicate { kind, id, scope } => {
                write!(f, "duplicate {} '{}' in {}", kind, id, scope)
            }
            ValidationError::UndefinedReference {
                kind,
                name,
                referenced_in,
            } => write!(
                f,
                "undefined {} '{}' referenced in {}",
                kind, name, referenced_in
            ),
            ValidationError::InvalidValue {
                field,
                value,
                expected,
            } => write!(
                f,
                "invalid value '{}' in {}: expected {}",
                value, field, expected
            ),
        }
    }
}

/// Validate a parsed catalog.
pub fn validate_catalog(raw: &RawCatalog) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();

    check_unique(
        "analysis",
        raw.analysis.iter().map(|a| a.id.as_str()),
        "catalog",
        &mut errors,
    );
    check_unique(
        "template",
        raw.template.iter().map(|t| t.id.as_str()),
        "catalog",
        &mut errors,
    );
    check_unique(
        "component",
        raw.component.iter().map(|c| c.id.as_str()),
        "catalog",
        &mut errors,
    );

    for analysis in &raw.analysis {
        let scope = format!("analysis '{}'", analysis.id);
        check_unique(
            "step",
            analysis.step.iter().map(|s| s.name.as_str()),
            &scope,
            &mut errors,
        );
    }

    for template in &raw.template {
        validate_template(template, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors { errors })
    }
}

fn validate_template(template: &RawTemplate, errors: &mut Vec<ValidationError>) {
    let scope = format!("template '{}'", template.id);
    let properties: Vec<_> = template
        .group
        .iter()
        .flat_map(|group| group.property.iter())
        .collect();

    check_unique(
        "property",
        properties.iter().map(|p| p.id.as_str()),
        &scope,
        errors,
    );
    check_unique(
        "data object",
        template
            .input
            .iter()
            .chain(template.output.iter())
            .map(|d| d.id.as_str()),
        &scope,
        errors,
    );

    for data_object in template.input.iter().chain(template.output.iter()) {
        if let Some(multiplicity) = &data_object.multiplicity {
            if !matches!(multiplicity.as_str(), "single" | "many" | "collection") {
                errors.push(ValidationError::InvalidValue {
                    field: format!("{}.{}.multiplicity", scope, data_object.id),
                    value: multiplicity.clone(),
                    expected: "single, many or collection",
                });
            }
        }
    }

    let declared: HashSet<&str> = template
        .input
        .iter()
        .chain(template.output.iter())
        .map(|d| d.id.as_str())
        .collect();

    for property in properties {
        if let Some(data_object) = &property.data_object {
            if !declared.contains(data_object.as_str()) {
                errors.push(ValidationError::UndefinedReference {
                    kind: "data object",
                    name: data_object.clone(),
                    referenced_in: format!("{} property '{}'", scope, property.id),
                });
            }
        }
    }
}

/// Report empty and repeated identifiers, each duplicate once
fn check_unique<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
    scope: &str,
    errors: &mut Vec<ValidationError>,
) {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    for id in ids {
        if id.trim().is_empty() {
            errors.push(ValidationError::MissingId {
                kind,
                scope: scope.to_string(),
            });
            continue;
        }
        if !seen.insert(id) && reported.insert(id) {
            errors.push(ValidationError::Duplicate {
                kind,
                id: id.to_string(),
                scope: scope.to_string(),
            });
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
