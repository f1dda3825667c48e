// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! File-backed record catalog.
//!
//! A catalog document declares analyses, templates and deployed
//! components in TOML or JSON. Loading goes through three layers:
//! `parser` reads the document into raw types, `validator` checks identity
//! and reference rules, and `catalog` converts the result into the core
//! model and serves it through the store traits.
//!
//! ```no_run
//! use jf_adapters::AnalysisStore;
//! use jf_storage::load_catalog;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = load_catalog(Path::new("catalog.toml"))?;
//! let analysis = catalog.find_analysis("align")?;
//! # let _ = analysis;
//! # Ok(())
//! # }
//! ```

mod catalog;
mod parser;
mod types;
mod validator;

pub use catalog::{load_catalog, parse_catalog, Catalog};
pub use parser::{parse_raw_catalog, CatalogFormat, ParseError};
pub use types::{
    RawAnalysis, RawCatalog, RawComponent, RawDataObject, RawGroup, RawMapping, RawProperty,
    RawStep, RawTemplate,
};
pub use validator::{validate_catalog, ValidationError, ValidationErrors};
