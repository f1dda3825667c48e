// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Formatter factory for CLI commands

use crate::settings::LocationSettings;
use jf_adapters::{
    FileRequest, HttpLocationResolver, LocationError, LocationResolver, NoOpLocationResolver,
    PrefixUrlAssembler, ResolvedFile, TracedLocationResolver,
};
use jf_core::UserContext;
use jf_engine::{FormatterDeps, JobFormatter};
use jf_storage::Catalog;

/// Formatter wired to a catalog and the configured location service
pub type CliFormatter =
    JobFormatter<Catalog, TracedLocationResolver<Locations>, PrefixUrlAssembler>;

/// Location service selected by the settings
pub enum Locations {
    Http(HttpLocationResolver),
    None(NoOpLocationResolver),
}

impl Locations {
    pub fn from_settings(settings: Option<&LocationSettings>) -> Self {
        match settings {
            Some(location) => Locations::Http(HttpLocationResolver::new(
                location.base_url.clone(),
                location.handled_types.iter().cloned(),
            )),
            None => Locations::None(NoOpLocationResolver),
        }
    }
}

impl LocationResolver for Locations {
    fn can_handle(&self, info_type: &str) -> bool {
        match self {
            Locations::Http(inner) => inner.can_handle(info_type),
            Locations::None(inner) => inner.can_handle(info_type),
        }
    }

    fn resolve_single(&self, name: &str, info_type: &str) -> Result<String, LocationError> {
        match self {
            Locations::Http(inner) => inner.resolve_single(name, info_type),
            Locations::None(inner) => inner.resolve_single(name, info_type),
        }
    }

    fn resolve_batch(&self, requests: &[FileRequest]) -> Result<Vec<ResolvedFile>, LocationError> {
        match self {
            Locations::Http(inner) => inner.resolve_batch(requests),
            Locations::None(inner) => inner.resolve_batch(requests),
        }
    }
}

/// Create a production formatter
pub fn make_formatter(
    catalog: Catalog,
    locations: Locations,
    url_prefix: &str,
    user: UserContext,
) -> CliFormatter {
    JobFormatter::new(
        FormatterDeps {
            store: catalog,
            locations: TracedLocationResolver::new(locations),
            urls: PrefixUrlAssembler::new(url_prefix),
        },
        user,
    )
}
