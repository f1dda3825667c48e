// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrappers for consistent observability

use crate::location::{FileRequest, LocationError, LocationResolver, ResolvedFile};

/// Wrapper that adds tracing to any LocationResolver
#[derive(Clone)]
pub struct TracedLocationResolver<L> {
    inner: L,
}

impl<L> TracedLocationResolver<L> {
    pub fn new(inner: L) -> Self {
        Self { inner }
    }
}

impl<L: LocationResolver> LocationResolver for TracedLocationResolver<L> {
    fn can_handle(&self, info_type: &str) -> bool {
        self.inner.can_handle(info_type)
    }

    fn resolve_single(&self, name: &str, info_type: &str) -> Result<String, LocationError> {
        let span = tracing::info_span!("location.resolve_single", name, info_type);
        let _guard = span.enter();

        tracing::debug!("resolving");
        let start = std::time::Instant::now();
        let result = self.inner.resolve_single(name, info_type);
        let elapsed = start.elapsed();

        match &result {
            Ok(url) if url.trim().is_empty() => tracing::info!(
                elapsed_ms = elapsed.as_millis() as u64,
                "no location"
            ),
            Ok(url) => tracing::info!(
                url,
                elapsed_ms = elapsed.as_millis() as u64,
                "resolved"
            ),
            Err(e) => tracing::error!(
                elapsed_ms = elapsed.as_millis() as u64,
                error = %e,
                "resolve failed"
            ),
        }

        result
    }

    fn resolve_batch(&self, requests: &[FileRequest]) -> Result<Vec<ResolvedFile>, LocationError> {
        let span = tracing::info_span!("location.resolve_batch", count = requests.len());
        let _guard = span.enter();

        let start = std::time::Instant::now();
        let result = self.inner.resolve_batch(requests);
        let elapsed = start.elapsed();

        match &result {
            Ok(files) => tracing::info!(
                resolved = files.len(),
                elapsed_ms = elapsed.as_millis() as u64,
                "resolved"
            ),
            Err(e) => tracing::error!(
                elapsed_ms = elapsed.as_millis() as u64,
                error = %e,
                "resolve failed"
            ),
        }

        result
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
