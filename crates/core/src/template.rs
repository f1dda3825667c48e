// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Templates: the properties, inputs and outputs a step declares.
//!
//! A template is shared by every step that uses it. Properties are grouped
//! for display; formatting walks the groups in declared order.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Normalize a declared order for emission.
///
/// A negative order becomes `0` when the element has a non-blank
/// command-line label; otherwise the declared order is kept verbatim.
pub fn effective_order(order: i32, label: &str) -> i32 {
    if order < 0 && !label.trim().is_empty() {
        0
    } else {
        order
    }
}

/// Declared type of a property, which selects its formatting rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PropertyType {
    Selection,
    ValueSelection,
    Flag,
    QuotedText,
    BarcodeSelector,
    ClipperSelector,
    Input,
    Output,
    Info,
    /// Any other type name; formatted with the plain rule
    Other(String),
}

impl PropertyType {
    pub fn name(&self) -> &str {
        match self {
            PropertyType::Selection => "Selection",
            PropertyType::ValueSelection => "ValueSelection",
            PropertyType::Flag => "Flag",
            PropertyType::QuotedText => "QuotedText",
            PropertyType::BarcodeSelector => "BarcodeSelector",
            PropertyType::ClipperSelector => "ClipperSelector",
            PropertyType::Input => "Input",
            PropertyType::Output => "Output",
            PropertyType::Info => "Info",
            PropertyType::Other(name) => name,
        }
    }
}

impl Default for PropertyType {
    fn default() -> Self {
        PropertyType::Other("Text".to_string())
    }
}

impl From<String> for PropertyType {
    fn from(name: String) -> Self {
        match name.as_str() {
            "Selection" => PropertyType::Selection,
            "ValueSelection" => PropertyType::ValueSelection,
            "Flag" => PropertyType::Flag,
            "QuotedText" => PropertyType::QuotedText,
            "BarcodeSelector" => PropertyType::BarcodeSelector,
            "ClipperSelector" => PropertyType::ClipperSelector,
            "Input" => PropertyType::Input,
            "Output" => PropertyType::Output,
            "Info" => PropertyType::Info,
            _ => PropertyType::Other(name),
        }
    }
}

impl From<&str> for PropertyType {
    fn from(name: &str) -> Self {
        PropertyType::from(name.to_string())
    }
}

impl From<PropertyType> for String {
    fn from(property_type: PropertyType) -> Self {
        property_type.name().to_string()
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether a data object is one file or a set of files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Multiplicity {
    #[default]
    Single,
    Many,
    Collection,
}

impl Multiplicity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Multiplicity::Single => "single",
            Multiplicity::Many => "many",
            Multiplicity::Collection => "collection",
        }
    }
}

impl fmt::Display for Multiplicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A declared input or output artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataObject {
    pub id: String,
    pub name: String,
    /// Command-line flag text
    #[serde(default)]
    pub switch_string: String,
    /// Semantic kind of the data (e.g. `ReferenceGenome`)
    pub info_type: String,
    #[serde(default)]
    pub multiplicity: Multiplicity,
    /// Whether the produced artifact must be kept
    #[serde(default)]
    pub retain: bool,
    #[serde(default)]
    pub order: i32,
    /// Generated by the template itself and never shown to users
    #[serde(default)]
    pub implicit: bool,
}

impl DataObject {
    pub fn new(id: impl Into<String>, name: impl Into<String>, info_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            switch_string: String::new(),
            info_type: info_type.into(),
            multiplicity: Multiplicity::Single,
            retain: false,
            order: 0,
            implicit: false,
        }
    }

    pub fn with_switch(mut self, switch_string: impl Into<String>) -> Self {
        self.switch_string = switch_string.into();
        self
    }

    pub fn with_multiplicity(mut self, multiplicity: Multiplicity) -> Self {
        self.multiplicity = multiplicity;
        self
    }

    pub fn with_order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    pub fn retained(mut self) -> Self {
        self.retain = true;
        self
    }

    pub fn implicit(mut self) -> Self {
        self.implicit = true;
        self
    }

    /// Info type with surrounding whitespace removed
    pub fn info_type(&self) -> &str {
        self.info_type.trim()
    }

    /// Order to emit, normalized against the switch string
    pub fn effective_order(&self) -> i32 {
        effective_order(self.order, &self.switch_string)
    }
}

fn default_visible() -> bool {
    true
}

/// A configurable parameter of a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub id: String,
    /// Display name; for flags and selections it encodes the candidates
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub property_type: PropertyType,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub omit_if_blank: bool,
    #[serde(default = "default_visible")]
    pub is_visible: bool,
    #[serde(default)]
    pub default_value: Option<String>,
    /// Id of the owning input or output data object
    #[serde(default)]
    pub data_object: Option<String>,
}

impl Property {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        property_type: impl Into<PropertyType>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            property_type: property_type.into(),
            order: 0,
            omit_if_blank: false,
            is_visible: true,
            default_value: None,
            data_object: None,
        }
    }

    pub fn with_order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    pub fn omit_if_blank(mut self) -> Self {
        self.omit_if_blank = true;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.is_visible = false;
        self
    }

    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn with_data_object(mut self, data_object_id: impl Into<String>) -> Self {
        self.data_object = Some(data_object_id.into());
        self
    }

    /// Order to emit, normalized against the display name
    pub fn effective_order(&self) -> i32 {
        effective_order(self.order, &self.name)
    }
}

/// An ordered group of properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyGroup {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub properties: Vec<Property>,
}

/// Declares a step's inputs, outputs and configurable properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Id of the deployed component that runs this template
    pub component_id: String,
    #[serde(default)]
    pub groups: Vec<PropertyGroup>,
    #[serde(default)]
    pub inputs: Vec<DataObject>,
    #[serde(default)]
    pub outputs: Vec<DataObject>,
}

impl Template {
    /// All properties across groups, in declared order
    pub fn properties(&self) -> impl Iterator<Item = &Property> {
        self.groups.iter().flat_map(|group| group.properties.iter())
    }

    /// Look up a declared input or output by id
    pub fn data_object(&self, id: &str) -> Option<&DataObject> {
        self.inputs
            .iter()
            .chain(self.outputs.iter())
            .find(|data_object| data_object.id == id)
    }

    /// The data object a property is bound to, if any
    pub fn property_data_object(&self, property: &Property) -> Option<&DataObject> {
        property
            .data_object
            .as_deref()
            .and_then(|id| self.data_object(id))
    }

    fn referenced_ids(&self) -> HashSet<&str> {
        self.properties()
            .filter_map(|property| property.data_object.as_deref())
            .collect()
    }

    /// Inputs that no property refers to
    pub fn unreferenced_inputs(&self) -> Vec<&DataObject> {
        let referenced = self.referenced_ids();
        self.inputs
            .iter()
            .filter(|input| !referenced.contains(input.id.as_str()))
            .collect()
    }

    /// Outputs that no property refers to
    pub fn unreferenced_outputs(&self) -> Vec<&DataObject> {
        let referenced = self.referenced_ids();
        self.outputs
            .iter()
            .filter(|output| !referenced.contains(output.id.as_str()))
            .collect()
    }

    /// Declared name of the output with the given id
    pub fn output_name(&self, id: &str) -> Option<&str> {
        self.outputs
            .iter()
            .find(|output| output.id == id)
            .map(|output| output.name.as_str())
    }
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
