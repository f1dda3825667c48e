// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! File location lookup: abstract file names to concrete storage URLs

mod http;
mod noop;

pub use http::HttpLocationResolver;
pub use noop::NoOpLocationResolver;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeLocationResolver, LocationCall};

use thiserror::Error;

/// Errors from location lookups
#[derive(Debug, Error)]
pub enum LocationError {
    #[error("location request failed: {0}")]
    Request(String),
    #[error("invalid location response: {0}")]
    InvalidResponse(String),
    #[error("no location found for {0}")]
    Unresolved(String),
}

/// One name to resolve in a batch lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRequest {
    pub name: String,
    pub info_type: String,
}

impl FileRequest {
    pub fn new(name: impl Into<String>, info_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            info_type: info_type.into(),
        }
    }
}

/// A resolved file from a batch lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFile {
    pub file_name: String,
    pub url: String,
}

/// Resolves abstract file names of known info types to storage URLs.
///
/// Lookups are blocking.
pub trait LocationResolver {
    /// Whether files of this info type are resolved through this service
    fn can_handle(&self, info_type: &str) -> bool;

    /// Resolve one name; a blank URL means there is nothing to stage
    fn resolve_single(&self, name: &str, info_type: &str) -> Result<String, LocationError>;

    /// Resolve several names at once, in request order
    fn resolve_batch(&self, requests: &[FileRequest]) -> Result<Vec<ResolvedFile>, LocationError>;
}
