// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op location resolver for when no location service is configured.

use super::{FileRequest, LocationError, LocationResolver, ResolvedFile};

/// Location resolver that handles no info types and resolves nothing.
///
/// Used when no location service is configured; every input is then
/// treated as a plain path.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpLocationResolver;

impl NoOpLocationResolver {
    pub fn new() -> Self {
        Self
    }
}

impl LocationResolver for NoOpLocationResolver {
    fn can_handle(&self, _info_type: &str) -> bool {
        false
    }

    fn resolve_single(&self, _name: &str, _info_type: &str) -> Result<String, LocationError> {
        Ok(String::new())
    }

    fn resolve_batch(&self, _requests: &[FileRequest]) -> Result<Vec<ResolvedFile>, LocationError> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
#[path = "noop_tests.rs"]
mod tests;
