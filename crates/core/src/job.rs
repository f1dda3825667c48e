// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job requests and the job documents formatted from them.
//!
//! Field names of the document records are consumed by the batch backend;
//! array order is significant, object key order is not.

use crate::value::RuntimeConfig;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Identity of the user submitting a job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserContext {
    pub short_username: String,
    pub email: String,
}

impl UserContext {
    pub fn new(short_username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            short_username: short_username.into(),
            email: email.into(),
        }
    }
}

/// Workspace a job runs in, kept as the request spelled it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WorkspaceId {
    Number(i64),
    Text(String),
}

impl WorkspaceId {
    /// Numeric workspace id, if the request holds one
    pub fn parse(&self) -> Option<i64> {
        match self {
            WorkspaceId::Number(id) => Some(*id),
            WorkspaceId::Text(text) => text.trim().parse().ok(),
        }
    }
}

impl fmt::Display for WorkspaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkspaceId::Number(id) => write!(f, "{}", id),
            WorkspaceId::Text(text) => f.write_str(text),
        }
    }
}

impl From<i64> for WorkspaceId {
    fn from(id: i64) -> Self {
        WorkspaceId::Number(id)
    }
}

impl From<&str> for WorkspaceId {
    fn from(text: &str) -> Self {
        WorkspaceId::Text(text.to_string())
    }
}

impl From<String> for WorkspaceId {
    fn from(text: String) -> Self {
        WorkspaceId::Text(text)
    }
}

/// A user's request to run an analysis.
///
/// Fields other than the ones named here are carried through to the job
/// document unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRequest {
    pub analysis_id: String,
    pub workspace_id: WorkspaceId,
    /// Keep every staged input and produced output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<bool>,
    #[serde(default)]
    pub config: RuntimeConfig,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl JobRequest {
    pub fn new(analysis_id: impl Into<String>, workspace_id: impl Into<WorkspaceId>) -> Self {
        Self {
            analysis_id: analysis_id.into(),
            workspace_id: workspace_id.into(),
            debug: None,
            config: RuntimeConfig::default(),
            extra: Map::new(),
        }
    }

    pub fn with_config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = Some(debug);
        self
    }

    pub fn is_debug(&self) -> bool {
        self.debug.unwrap_or(false)
    }
}

/// A command-line parameter of a formatted step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamRecord {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub order: i32,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub param_type: Option<String>,
}

impl ParamRecord {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
        order: i32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            value: Some(value.into()),
            order,
            param_type: None,
        }
    }

    /// A parameter that is a bare flag with no value field at all
    pub fn bare(id: impl Into<String>, name: impl Into<String>, order: i32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            value: None,
            order,
            param_type: None,
        }
    }

    pub fn with_type(mut self, param_type: impl Into<String>) -> Self {
        self.param_type = Some(param_type.into());
        self
    }
}

/// A file the backend must stage before the step runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRecord {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub info_type: Option<String>,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiplicity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retain: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
}

/// A file the step produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRecord {
    pub name: String,
    pub property: String,
    #[serde(rename = "type")]
    pub info_type: String,
    pub multiplicity: String,
    pub retain: bool,
}

impl OutputRecord {
    /// The log collection every step produces
    pub fn logs() -> Self {
        Self {
            name: "logs".to_string(),
            property: "logs".to_string(),
            info_type: "File".to_string(),
            multiplicity: "collection".to_string(),
            retain: true,
        }
    }
}

/// The `config` section of a formatted step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepConfig {
    pub input: Vec<InputRecord>,
    pub params: Vec<ParamRecord>,
    pub output: Vec<OutputRecord>,
}

/// Executable descriptor for the component a template runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployedComponent {
    pub id: String,
    pub name: String,
    pub location: String,
    #[serde(rename = "type", default)]
    pub component_type: String,
    #[serde(default)]
    pub description: String,
}

/// One fully formatted step of a job document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedStep {
    pub name: String,
    #[serde(rename = "type")]
    pub step_type: String,
    pub config: StepConfig,
    pub component: DeployedComponent,
}

impl FormattedStep {
    /// Value recorded for an id, searching staged inputs before parameters
    pub fn recorded_value(&self, id: &str) -> Option<&str> {
        if let Some(input) = self.config.input.iter().find(|input| input.id == id) {
            return Some(input.value.as_str());
        }
        self.config
            .params
            .iter()
            .find(|param| param.id == id)
            .map(|param| param.value.as_deref().unwrap_or_default())
    }
}

/// A fully resolved job-submission document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDocument {
    pub request_type: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub analysis_id: String,
    pub analysis_name: String,
    pub workspace_id: WorkspaceId,
    pub username: String,
    pub email: String,
    /// Request fields carried through unchanged
    #[serde(flatten)]
    pub experiment: Map<String, Value>,
    pub steps: Vec<FormattedStep>,
}

impl JobDocument {
    /// Fields generated by the formatter; request fields never override them
    pub const GENERATED_FIELDS: &'static [&'static str] = &[
        "request_type",
        "type",
        "analysis_id",
        "analysis_name",
        "workspace_id",
        "username",
        "email",
        "steps",
        "config",
    ];

    pub fn step(&self, name: &str) -> Option<&FormattedStep> {
        self.steps.iter().find(|step| step.name == name)
    }
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
