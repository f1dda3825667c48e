// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Record stores for analyses, templates and deployed components

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeStore, StoreCall};

use jf_core::{AnalysisDefinition, DeployedComponent, Template};
use thiserror::Error;

/// Errors from store lookups
///
/// An unknown id is not an error; lookups return `Ok(None)` for it.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("corrupt record {id}: {message}")]
    Corrupt { id: String, message: String },
}

/// Lookup of analysis definitions by id
pub trait AnalysisStore {
    fn find_analysis(&self, id: &str) -> Result<Option<AnalysisDefinition>, StoreError>;
}

/// Lookup of templates by id
pub trait TemplateStore {
    fn find_template(&self, id: &str) -> Result<Option<Template>, StoreError>;
}

/// Lookup of deployed component descriptors by id
pub trait ComponentStore {
    fn find_component(&self, id: &str) -> Result<Option<DeployedComponent>, StoreError>;
}

/// A store that serves every record kind the formatter reads
pub trait RecordStore: AnalysisStore + TemplateStore + ComponentStore {}

impl<T: AnalysisStore + TemplateStore + ComponentStore> RecordStore for T {}
