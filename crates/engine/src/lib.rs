// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Job formatting engine
//!
//! Turns an analysis definition plus a user's runtime configuration into a
//! job document for the batch backend. Steps are formatted strictly in
//! declared order; a step becomes visible to cross-step mappings only once
//! it is complete.

mod error;
mod formatter;
mod inputs;
mod mapping;
mod outputs;
mod params;
mod source;

pub use error::{FormatError, RecordKind};
pub use formatter::{FormatterDeps, JobFormatter};
pub use mapping::FormattedSteps;
pub use source::ValueSource;
