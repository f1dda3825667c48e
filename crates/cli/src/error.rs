// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-friendly error display with context and suggestions.
//!
//! Each error says what went wrong, why it might have happened, and how
//! to fix it.

use jf_engine::{FormatError, RecordKind};
use std::fmt;
use std::path::Path;

/// Error with context and recovery suggestions for user-friendly display.
#[derive(Debug)]
pub struct JfError {
    /// What went wrong
    pub message: String,
    /// Why it might have happened
    pub context: Vec<String>,
    /// How to fix it
    pub suggestions: Vec<String>,
    /// Original error if any
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl JfError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
            source: None,
        }
    }

    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn with_source<E: std::error::Error + Send + Sync + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for JfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for JfError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Builders for the failures users run into.
impl JfError {
    pub fn settings_not_found(path: &Path) -> Self {
        JfError::new(format!("Settings file '{}' not found", path.display()))
            .with_context(format!(
                "The path came from --config or ${}",
                crate::settings::CONFIG_ENV
            ))
            .with_suggestion("Check the path, or unset JF_CONFIG to use the default")
    }

    pub fn no_catalog() -> Self {
        JfError::new("No catalog given")
            .with_context("Analyses, templates and components are read from a catalog file")
            .with_suggestion("Pass one with: jf --catalog <FILE> ...")
            .with_suggestion("Or set `catalog = \"<FILE>\"` in the settings file")
    }

    pub fn no_user() -> Self {
        JfError::new("No user to submit the job as")
            .with_suggestion("Pass one with: jf format --user <NAME> <REQUEST>")
            .with_suggestion("Or set `username` under [user] in the settings file")
    }

    pub fn analysis_not_found(id: &str) -> Self {
        JfError::new(format!("Analysis '{}' not found", id))
            .with_context("The catalog has no analysis with this id")
            .with_suggestion("List known analyses: jf analysis list")
    }

    /// Wrap a formatting failure with hints for the common cases
    pub fn format_failed(error: FormatError) -> Self {
        let err = match &error {
            FormatError::NotFound {
                kind: RecordKind::Analysis,
                id,
            } => JfError::analysis_not_found(id),
            FormatError::NotFound { kind, id } => {
                JfError::new(format!("Catalog is missing {} '{}'", kind, id))
                    .with_context("A step of the analysis refers to it")
                    .with_suggestion("Add the record to the catalog, or fix the reference")
            }
            FormatError::MappingNotFound { target, source_step } => {
                JfError::new(format!("Step '{}' is fed by step '{}'", target, source_step))
                    .with_context("A step can only use values of steps declared before it")
                    .with_suggestion("Reorder the steps, or fix the mapping's source")
            }
            FormatError::MappingValueMissing { source_step, id } => {
                JfError::new(error.to_string()).with_suggestion(format!(
                    "Set `{}_{}` in the request's config",
                    source_step, id
                ))
            }
            FormatError::DuplicateStep { .. } => JfError::new(error.to_string())
                .with_suggestion("Give each step of the analysis its own name"),
            FormatError::InvalidWorkspaceId(_) => JfError::new(error.to_string())
                .with_suggestion("Use the numeric workspace id in the request"),
            _ => JfError::new(error.to_string()),
        };
        err.with_source(error)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
