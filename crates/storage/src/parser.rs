// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Catalog parsing (syntactic layer).
//!
//! Reads a TOML or JSON document into `RawCatalog`. No validation is
//! performed at this layer.

use crate::types::RawCatalog;
use crate::validator::ValidationErrors;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading a catalog.
#[derive(Debug, Error)]
pub enum ParseError {
    /// TOML syntax or shape error
    #[error("TOML syntax error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON syntax or shape error
    #[error("JSON syntax error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error reading file
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// File extension is neither `.toml` nor `.json`
    #[error("unsupported catalog format for {path}: expected .toml or .json")]
    UnsupportedFormat { path: String },

    /// Identity or reference rules violated
    #[error("{0}")]
    Invalid(#[from] ValidationErrors),

    /// A value the core model cannot represent
    #[error("invalid value '{value}' in {field}: expected {expected}")]
    InvalidValue {
        field: String,
        value: String,
        expected: String,
    },
}

/// Document syntax of a catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Toml,
    Json,
}

impl CatalogFormat {
    /// Format implied by a file extension (`.toml` or `.json`)
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Some(CatalogFormat::Toml),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Some(CatalogFormat::Json),
            _ => None,
        }
    }
}

/// Parse a catalog document without validating it.
pub fn parse_raw_catalog(content: &str, format: CatalogFormat) -> Result<RawCatalog, ParseError> {
    let raw = match format {
        CatalogFormat::Toml => toml::from_str(content)?,
        CatalogFormat::Json => serde_json::from_str(content)?,
    };
    Ok(raw)
}

/// Read a catalog file, choosing the syntax from its extension.
pub(crate) fn read_catalog_file(path: &Path) -> Result<(String, CatalogFormat), ParseError> {
    let format = CatalogFormat::from_path(path).ok_or_else(|| ParseError::UnsupportedFormat {
        path: path.display().to_string(),
    })?;
    let content = std::fs::read_to_string(path).map_err(|e| ParseError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok((content, format))
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
