// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Where a property or data object gets its value from.
//!
//! Sources are checked in precedence order and the first match wins:
//! the step's transformation, the runtime configuration, a cross-step
//! mapping, then a declared default.

use jf_core::{AnalysisDefinition, DataObject, Property, PropertyType, RawValue, RuntimeConfig, Step};

/// Resolved value source for one identifier of a step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueSource {
    /// Fixed by the step's transformation
    Fixed(String),
    /// Supplied by the user under `<step>_<id>`
    Config(RawValue),
    /// Fed by an earlier step through an input/output mapping
    Mapped,
    /// Declared default of an invisible or defaulted property
    Default(RawValue),
    /// No value; the identifier is left out of the document
    Unset,
}

/// Value source lookup over one step's loaded records
pub(crate) struct ValueSources<'a> {
    analysis: &'a AnalysisDefinition,
    step: &'a Step,
    config: &'a RuntimeConfig,
}

impl<'a> ValueSources<'a> {
    pub(crate) fn new(
        analysis: &'a AnalysisDefinition,
        step: &'a Step,
        config: &'a RuntimeConfig,
    ) -> Self {
        Self {
            analysis,
            step,
            config,
        }
    }

    /// Source of a property's value.
    ///
    /// A property is mapped when its data object is a mapping target of
    /// this step.
    pub(crate) fn property(
        &self,
        property: &Property,
        data_object: Option<&DataObject>,
    ) -> ValueSource {
        if let Some(value) = self.step.transformation.value(&property.id) {
            return ValueSource::Fixed(value.to_string());
        }
        if let Some(raw) = self.config.lookup(&self.step.name, &property.id) {
            return ValueSource::Config(raw);
        }
        if let Some(data_object) = data_object {
            if self
                .analysis
                .is_target_in_mapping(&self.step.name, &data_object.id)
            {
                return ValueSource::Mapped;
            }
        }
        if !property.is_visible || property.default_value.is_some() {
            return ValueSource::Default(RawValue::parse(default_value(property, data_object)));
        }
        ValueSource::Unset
    }

    /// Source of a data object's value; data objects declare no defaults
    pub(crate) fn data_object(&self, data_object: &DataObject) -> ValueSource {
        if let Some(value) = self.step.transformation.value(&data_object.id) {
            return ValueSource::Fixed(value.to_string());
        }
        if let Some(raw) = self.config.lookup(&self.step.name, &data_object.id) {
            return ValueSource::Config(raw);
        }
        if self
            .analysis
            .is_target_in_mapping(&self.step.name, &data_object.id)
        {
            return ValueSource::Mapped;
        }
        ValueSource::Unset
    }
}

/// Default text of a property; an output defaults to its file name
fn default_value(property: &Property, data_object: Option<&DataObject>) -> String {
    match (&property.property_type, data_object) {
        (PropertyType::Output, Some(data_object)) => data_object.name.clone(),
        _ => property.default_value.clone().unwrap_or_default(),
    }
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
