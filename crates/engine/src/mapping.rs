// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cross-step mappings: values relayed from earlier steps.
//!
//! A mapping can only be resolved against steps already appended to the
//! running list, so a step never sees itself or anything after it.

use crate::error::{FormatError, RecordKind};
use indexmap::IndexMap;
use jf_adapters::TemplateStore;
use jf_core::{AnalysisDefinition, DataObject, FormattedStep, ParamRecord, Step};

/// Prefix of relation keys that refer to a value the source step was given
const INPUT_REFERENCE: &str = "in#";

/// Steps formatted so far, in declared order, keyed by step name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormattedSteps {
    steps: IndexMap<String, FormattedStep>,
}

impl FormattedSteps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a complete step; it is visible to mappings from now on.
    ///
    /// Fails with the step's name when that name is already taken.
    pub fn push(&mut self, step: FormattedStep) -> Result<(), String> {
        if self.steps.contains_key(&step.name) {
            return Err(step.name);
        }
        self.steps.insert(step.name.clone(), step);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&FormattedStep> {
        self.steps.get(name)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn into_steps(self) -> Vec<FormattedStep> {
        self.steps.into_values().collect()
    }
}

/// Identifier a relation key refers to, without reference or step prefix
pub(crate) fn bare_id(source_key: &str, source_step: &str) -> String {
    source_key
        .replace(INPUT_REFERENCE, "")
        .replace(&format!("{}_", source_step), "")
}

/// Resolves mapping targets of one analysis against the formatted steps
pub(crate) struct MappingResolver<'a, S> {
    analysis: &'a AnalysisDefinition,
    formatted: &'a FormattedSteps,
    templates: &'a S,
}

impl<'a, S: TemplateStore> MappingResolver<'a, S> {
    pub(crate) fn new(
        analysis: &'a AnalysisDefinition,
        formatted: &'a FormattedSteps,
        templates: &'a S,
    ) -> Self {
        Self {
            analysis,
            formatted,
            templates,
        }
    }

    /// Values feeding a target step's data object, one per relation entry
    /// naming it, in mapping then relation order
    pub(crate) fn resolve_mapped(
        &self,
        target_step: &str,
        target_id: &str,
    ) -> Result<Vec<String>, FormatError> {
        let mut values = Vec::new();
        for mapping in self.analysis.mappings_for_target(target_step) {
            let source_keys: Vec<&str> = mapping.source_keys_for(target_id).collect();
            if source_keys.is_empty() {
                continue;
            }

            let source = self.analysis.step(&mapping.source);
            let formatted = self.formatted.get(&mapping.source);
            let (Some(source), Some(formatted)) = (source, formatted) else {
                return Err(FormatError::MappingNotFound {
                    target: target_step.to_string(),
                    source_step: mapping.source.clone(),
                });
            };

            for source_key in source_keys {
                tracing::debug!(source_key, target_id, "resolving mapped value");
                values.push(self.source_value(source, formatted, source_key)?);
            }
        }
        Ok(values)
    }

    /// Parameters for a mapped data object
    pub(crate) fn mapped_params(
        &self,
        target_step: &str,
        data_object: &DataObject,
    ) -> Result<Vec<ParamRecord>, FormatError> {
        Ok(self
            .resolve_mapped(target_step, &data_object.id)?
            .into_iter()
            .map(|value| {
                ParamRecord::new(
                    data_object.id.clone(),
                    data_object.switch_string.clone(),
                    value,
                    data_object.effective_order(),
                )
            })
            .collect())
    }

    /// Value of one source-side key.
    ///
    /// Input references read what the source step recorded; other keys
    /// use the source's fixed value, else the declared output name.
    fn source_value(
        &self,
        source: &Step,
        formatted: &FormattedStep,
        source_key: &str,
    ) -> Result<String, FormatError> {
        let id = bare_id(source_key, &source.name);

        if source_key.contains(INPUT_REFERENCE) {
            return formatted
                .recorded_value(&id)
                .map(str::to_string)
                .ok_or_else(|| FormatError::MappingValueMissing {
                    source_step: source.name.clone(),
                    id,
                });
        }

        if let Some(value) = source.transformation.value(&id) {
            return Ok(value.to_string());
        }

        let template = self
            .templates
            .find_template(&source.template_id)?
            .ok_or_else(|| FormatError::NotFound {
                kind: RecordKind::Template,
                id: source.template_id.clone(),
            })?;
        template
            .output_name(&id)
            .map(str::to_string)
            .ok_or_else(|| FormatError::OutputNameResolution {
                step: source.name.clone(),
                id,
            })
    }
}

#[cfg(test)]
#[path = "mapping_tests.rs"]
mod tests;
