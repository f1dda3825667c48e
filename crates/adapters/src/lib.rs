// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Collaborators the job formatter consumes: record stores, file location
//! lookup and path URL assembly

pub mod location;
pub mod store;
pub mod traced;
pub mod url;

pub use location::{
    FileRequest, HttpLocationResolver, LocationError, LocationResolver, NoOpLocationResolver,
    ResolvedFile,
};
pub use store::{AnalysisStore, ComponentStore, RecordStore, StoreError, TemplateStore};
pub use traced::TracedLocationResolver;
pub use url::{PathUrlAssembler, PrefixUrlAssembler};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use location::{FakeLocationResolver, LocationCall};
#[cfg(any(test, feature = "test-support"))]
pub use store::{FakeStore, StoreCall};
