// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Raw catalog types that mirror the document structure exactly.
//!
//! These types are used for parsing only. They are converted to the core
//! model by the catalog after validation. Every list keeps document order,
//! which is the order steps, groups and properties are formatted in.

use indexmap::IndexMap;
use serde::Deserialize;

/// A catalog document.
///
/// All sections are optional; a catalog may hold only templates, for
/// instance, while analyses live elsewhere.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawCatalog {
    pub analysis: Vec<RawAnalysis>,
    pub template: Vec<RawTemplate>,
    pub component: Vec<RawComponent>,
}

/// An analysis: `[[analysis]]`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawAnalysis {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Steps in execution order: `[[analysis.step]]`
    pub step: Vec<RawStep>,
    /// Cross-step mappings: `[[analysis.mapping]]`
    pub mapping: Vec<RawMapping>,
}

/// A step of an analysis.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawStep {
    pub name: String,
    /// Template id
    pub template: String,
    /// Fixed values by property or data object id
    pub transformation: IndexMap<String, String>,
}

/// Declares that `target`'s data objects are fed by `source`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawMapping {
    pub source: String,
    pub target: String,
    /// Source key to target data object id, in declared order
    pub relation: IndexMap<String, String>,
}

/// A template: `[[template]]`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawTemplate {
    pub id: String,
    pub name: String,
    /// Deployed component id
    pub component: String,
    pub input: Vec<RawDataObject>,
    pub output: Vec<RawDataObject>,
    pub group: Vec<RawGroup>,
}

/// An input or output data object.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawDataObject {
    pub id: String,
    pub name: String,
    /// Command-line flag (e.g. `-i`)
    #[serde(alias = "switch_string")]
    pub switch: String,
    pub info_type: String,
    /// `single`, `many` or `collection`
    pub multiplicity: Option<String>,
    pub retain: bool,
    pub order: i32,
    pub implicit: bool,
}

/// A property group: `[[template.group]]`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawGroup {
    pub name: String,
    pub property: Vec<RawProperty>,
}

/// A property: `[[template.group.property]]`
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RawProperty {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub property_type: String,
    pub order: i32,
    pub omit_if_blank: bool,
    pub visible: bool,
    #[serde(alias = "default_value")]
    pub default: Option<String>,
    /// Id of a data object declared by the same template
    pub data_object: Option<String>,
}

impl Default for RawProperty {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            property_type: "Text".to_string(),
            order: 0,
            omit_if_blank: false,
            visible: true,
            default: None,
            data_object: None,
        }
    }
}

/// A deployed component: `[[component]]`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawComponent {
    pub id: String,
    pub name: String,
    pub location: String,
    #[serde(rename = "type")]
    pub component_type: String,
    pub description: String,
}
