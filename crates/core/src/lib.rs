// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! jf-core: data model for the job formatter
//!
//! This crate provides:
//! - Analysis definitions: ordered steps, transformations, step-to-step mappings
//! - Templates: property groups, input and output data objects
//! - Runtime configuration and the raw value union decoded from it
//! - Job request and job document records

pub mod analysis;
pub mod job;
pub mod template;
pub mod value;

pub use analysis::{AnalysisDefinition, InputOutputMap, Step, Transformation};
pub use job::{
    DeployedComponent, FormattedStep, InputRecord, JobDocument, JobRequest, OutputRecord,
    ParamRecord, StepConfig, UserContext, WorkspaceId,
};
pub use template::{
    effective_order, DataObject, Multiplicity, Property, PropertyGroup, PropertyType, Template,
};
pub use value::{RawValue, RuntimeConfig};
