// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake record store for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{AnalysisStore, ComponentStore, StoreError, TemplateStore};
use jf_core::{AnalysisDefinition, DeployedComponent, Template};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Recorded store call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    FindAnalysis(String),
    FindTemplate(String),
    FindComponent(String),
}

#[derive(Default)]
struct FakeRecords {
    analyses: HashMap<String, AnalysisDefinition>,
    templates: HashMap<String, Template>,
    components: HashMap<String, DeployedComponent>,
    unavailable: Option<String>,
}

/// In-memory record store that records every lookup
#[derive(Clone, Default)]
pub struct FakeStore {
    records: Arc<Mutex<FakeRecords>>,
    calls: Arc<Mutex<Vec<StoreCall>>>,
}

impl FakeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_analysis(self, analysis: AnalysisDefinition) -> Self {
        self.records
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .analyses
            .insert(analysis.id.clone(), analysis);
        self
    }

    pub fn with_template(self, template: Template) -> Self {
        self.records
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .templates
            .insert(template.id.clone(), template);
        self
    }

    pub fn with_component(self, component: DeployedComponent) -> Self {
        self.records
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .components
            .insert(component.id.clone(), component);
        self
    }

    /// Make every lookup fail with `StoreError::Unavailable`
    pub fn set_unavailable(&self, reason: &str) {
        self.records
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .unavailable = Some(reason.to_string());
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn record(&self, call: StoreCall) -> Result<(), StoreError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(call);

        match &self.records.lock().unwrap_or_else(|e| e.into_inner()).unavailable {
            Some(reason) => Err(StoreError::Unavailable(reason.clone())),
            None => Ok(()),
        }
    }
}

impl AnalysisStore for FakeStore {
    fn find_analysis(&self, id: &str) -> Result<Option<AnalysisDefinition>, StoreError> {
        self.record(StoreCall::FindAnalysis(id.to_string()))?;
        let records = self.records.lock().unwrap_or_else(|e| e.into_inner());
        Ok(records.analyses.get(id).cloned())
    }
}

impl TemplateStore for FakeStore {
    fn find_template(&self, id: &str) -> Result<Option<Template>, StoreError> {
        self.record(StoreCall::FindTemplate(id.to_string()))?;
        let records = self.records.lock().unwrap_or_else(|e| e.into_inner());
        Ok(records.templates.get(id).cloned())
    }
}

impl ComponentStore for FakeStore {
    fn find_component(&self, id: &str) -> Result<Option<DeployedComponent>, StoreError> {
        self.record(StoreCall::FindComponent(id.to_string()))?;
        let records = self.records.lock().unwrap_or_else(|e| e.into_inner());
        Ok(records.components.get(id).cloned())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
