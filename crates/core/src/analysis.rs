// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Analysis definitions: ordered steps and the mappings between them.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Fixed values for one step instance, keyed by property or data object id.
///
/// A fixed value overrides every other value source for that step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transformation {
    values: IndexMap<String, String>,
}

impl Transformation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, id: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(id.into(), value.into());
        self
    }

    pub fn contains(&self, id: &str) -> bool {
        self.values.contains_key(id)
    }

    pub fn value(&self, id: &str) -> Option<&str> {
        self.values.get(id).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }
}

impl FromIterator<(String, String)> for Transformation {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// One stage of an analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Unique within the analysis
    pub name: String,
    pub template_id: String,
    #[serde(default)]
    pub transformation: Transformation,
}

impl Step {
    pub fn new(name: impl Into<String>, template_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            template_id: template_id.into(),
            transformation: Transformation::default(),
        }
    }

    pub fn with_transformation(mut self, transformation: Transformation) -> Self {
        self.transformation = transformation;
        self
    }
}

/// Declares that a target step's data objects are fed by a source step.
///
/// Relation keys reference the source side (`in#<source>_<id>` for a value
/// the source step was given, `<source>_<id>` for one of its outputs);
/// relation values are data object ids of the target step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputOutputMap {
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub relation: IndexMap<String, String>,
}

impl InputOutputMap {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            relation: IndexMap::new(),
        }
    }

    pub fn relate(mut self, source_key: impl Into<String>, target_id: impl Into<String>) -> Self {
        self.relation.insert(source_key.into(), target_id.into());
        self
    }

    /// Source-side keys that feed the given target data object
    pub fn source_keys_for<'a>(&'a self, target_id: &'a str) -> impl Iterator<Item = &'a str> {
        self.relation
            .iter()
            .filter(move |(_, target)| target.as_str() == target_id)
            .map(|(source_key, _)| source_key.as_str())
    }
}

/// An ordered set of steps, each bound to a template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisDefinition {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub steps: Vec<Step>,
    #[serde(default)]
    pub mappings: Vec<InputOutputMap>,
}

impl AnalysisDefinition {
    /// Look up a step by name
    pub fn step(&self, name: &str) -> Option<&Step> {
        self.steps.iter().find(|step| step.name == name)
    }

    /// Mappings whose target is the named step, in declared order
    pub fn mappings_for_target<'a>(
        &'a self,
        step_name: &'a str,
    ) -> impl Iterator<Item = &'a InputOutputMap> {
        self.mappings
            .iter()
            .filter(move |mapping| mapping.target == step_name)
    }

    /// Whether the given id of the named step is fed by another step
    pub fn is_target_in_mapping(&self, step_name: &str, id: &str) -> bool {
        self.mappings_for_target(step_name)
            .any(|mapping| mapping.relation.values().any(|target| target == id))
    }
}

#[cfg(test)]
#[path = "analysis_tests.rs"]
mod tests;
