// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for job formatting

use jf_adapters::{LocationError, StoreError};
use std::fmt;
use thiserror::Error;

/// Kind of record a lookup failed to find
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Analysis,
    Template,
    Component,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RecordKind::Analysis => "analysis",
            RecordKind::Template => "template",
            RecordKind::Component => "component",
        })
    }
}

/// Errors that abort a formatting pass.
///
/// Nothing is retried and no partial document is returned.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("{kind} {id} not found")]
    NotFound { kind: RecordKind, id: String },

    #[error("analysis {analysis} declares step {step} more than once")]
    DuplicateStep { analysis: String, step: String },

    #[error(
        "step {target} maps from step {source_step}, which has not been formatted before it"
    )]
    MappingNotFound { target: String, source_step: String },

    #[error(
        "a value for property {source_step}_{id} needs to be input in order to be used in a mapping"
    )]
    MappingValueMissing { source_step: String, id: String },

    #[error("unable to determine the output name for {id} in step {step}")]
    OutputNameResolution { step: String, id: String },

    #[error("malformed value for {step}_{id}: {reason}")]
    MalformedValue {
        step: String,
        id: String,
        reason: String,
    },

    #[error("invalid workspace id: {0}")]
    InvalidWorkspaceId(String),

    #[error("property {property} of step {step} has no declared data object")]
    DataObjectNotFound { step: String, property: String },

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Location(#[from] LocationError),
}

impl FormatError {
    pub(crate) fn malformed(step: &str, id: &str, reason: impl Into<String>) -> Self {
        FormatError::MalformedValue {
            step: step.to_string(),
            id: id.to_string(),
            reason: reason.into(),
        }
    }
}
