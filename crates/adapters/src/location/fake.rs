// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake location resolver for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{FileRequest, LocationError, LocationResolver, ResolvedFile};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

/// Recorded location call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationCall {
    ResolveSingle { name: String, info_type: String },
    ResolveBatch { requests: Vec<FileRequest> },
}

#[derive(Default)]
struct FakeLocations {
    handled: HashSet<String>,
    single: HashMap<(String, String), String>,
    batch: HashMap<String, ResolvedFile>,
}

/// Location resolver answering from registered fixtures.
///
/// Unknown single lookups resolve to a blank URL; unknown batch names fail
/// with `LocationError::Unresolved`.
#[derive(Clone, Default)]
pub struct FakeLocationResolver {
    locations: Arc<Mutex<FakeLocations>>,
    calls: Arc<Mutex<Vec<LocationCall>>>,
}

impl FakeLocationResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an info type as handled by this resolver
    pub fn handle(self, info_type: &str) -> Self {
        self.locations
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .handled
            .insert(info_type.to_string());
        self
    }

    pub fn with_single(self, name: &str, info_type: &str, url: &str) -> Self {
        self.locations
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .single
            .insert((name.to_string(), info_type.to_string()), url.to_string());
        self
    }

    pub fn with_batch(self, name: &str, file_name: &str, url: &str) -> Self {
        self.locations
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .batch
            .insert(
                name.to_string(),
                ResolvedFile {
                    file_name: file_name.to_string(),
                    url: url.to_string(),
                },
            );
        self
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<LocationCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl LocationResolver for FakeLocationResolver {
    fn can_handle(&self, info_type: &str) -> bool {
        self.locations
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .handled
            .contains(info_type.trim())
    }

    fn resolve_single(&self, name: &str, info_type: &str) -> Result<String, LocationError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(LocationCall::ResolveSingle {
                name: name.to_string(),
                info_type: info_type.to_string(),
            });

        let locations = self.locations.lock().unwrap_or_else(|e| e.into_inner());
        Ok(locations
            .single
            .get(&(name.to_string(), info_type.to_string()))
            .cloned()
            .unwrap_or_default())
    }

    fn resolve_batch(&self, requests: &[FileRequest]) -> Result<Vec<ResolvedFile>, LocationError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(LocationCall::ResolveBatch {
                requests: requests.to_vec(),
            });

        let locations = self.locations.lock().unwrap_or_else(|e| e.into_inner());
        requests
            .iter()
            .map(|request| {
                locations
                    .batch
                    .get(&request.name)
                    .cloned()
                    .ok_or_else(|| LocationError::Unresolved(request.name.clone()))
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
