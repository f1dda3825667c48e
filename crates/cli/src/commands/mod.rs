// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod analysis;
pub mod format;

use crate::error::JfError;
use anyhow::Result;
use jf_storage::Catalog;
use std::path::Path;

/// Load the catalog named on the command line or in the settings
pub fn open_catalog(path: Option<&Path>) -> Result<Catalog> {
    let path = path.ok_or_else(JfError::no_catalog)?;
    let catalog = jf_storage::load_catalog(path)?;
    Ok(catalog)
}
