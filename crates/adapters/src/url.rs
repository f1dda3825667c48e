// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Path to storage URL assembly

/// Turns a storage path into the URL the execution backend stages from
pub trait PathUrlAssembler {
    fn assemble(&self, path: &str) -> String;
}

/// Assembles URLs by joining a fixed prefix and the path.
///
/// A prefix ending in `://` is concatenated as-is so absolute paths keep
/// their leading slash (`file://` + `/a/b` = `file:///a/b`). Any other
/// prefix is joined with exactly one `/`. An empty prefix leaves paths
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixUrlAssembler {
    prefix: String,
}

impl PrefixUrlAssembler {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl Default for PrefixUrlAssembler {
    fn default() -> Self {
        Self::new("file://")
    }
}

impl PathUrlAssembler for PrefixUrlAssembler {
    fn assemble(&self, path: &str) -> String {
        if self.prefix.is_empty() {
            return path.to_string();
        }
        if self.prefix.ends_with("://") {
            return format!("{}{}", self.prefix, path);
        }
        format!(
            "{}/{}",
            self.prefix.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl<T: PathUrlAssembler + ?Sized> PathUrlAssembler for &T {
    fn assemble(&self, path: &str) -> String {
        (**self).assemble(path)
    }
}

#[cfg(test)]
#[path = "url_tests.rs"]
mod tests;
