// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `jf format` - turn a job request into a job document

use crate::adapters::{make_formatter, Locations};
use crate::error::JfError;
use crate::output::{self, OutputFormat};
use crate::settings::Settings;
use anyhow::{Context, Result};
use clap::Args;
use jf_core::{JobDocument, JobRequest, UserContext};
use jf_storage::Catalog;
use serde::Serialize;
use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Args)]
pub struct FormatArgs {
    /// Job request file (JSON), or `-` for stdin
    pub request: PathBuf,

    /// User the job runs as
    #[arg(long)]
    pub user: Option<String>,

    /// Email address for job notifications
    #[arg(long)]
    pub email: Option<String>,

    /// Prefix for staged file URLs
    #[arg(long)]
    pub url_prefix: Option<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Json)]
    pub output: OutputFormat,
}

/// A formatted document with a per-step text summary
#[derive(Serialize)]
#[serde(transparent)]
struct DocumentView(JobDocument);

impl fmt::Display for DocumentView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let document = &self.0;
        writeln!(
            f,
            "Job: {} ({})",
            document.analysis_name, document.analysis_id
        )?;
        writeln!(f, "  User: {} <{}>", document.username, document.email)?;
        writeln!(f, "  Workspace: {}", document.workspace_id)?;
        for step in &document.steps {
            writeln!(
                f,
                "  Step {}: {} input(s), {} param(s), {} output(s) -> {}/{}",
                step.name,
                step.config.input.len(),
                step.config.params.len(),
                step.config.output.len(),
                step.component.location,
                step.component.name
            )?;
        }
        Ok(())
    }
}

pub fn handle(args: FormatArgs, settings: &Settings, catalog: Catalog) -> Result<()> {
    let request = read_request(&args.request)?;

    let username = args
        .user
        .or_else(|| settings.user.username.clone())
        .ok_or_else(JfError::no_user)?;
    let email = args
        .email
        .or_else(|| settings.user.email.clone())
        .unwrap_or_default();
    let url_prefix = args
        .url_prefix
        .unwrap_or_else(|| settings.urls.prefix.clone());

    let formatter = make_formatter(
        catalog,
        Locations::from_settings(settings.location.as_ref()),
        &url_prefix,
        UserContext::new(username, email),
    );
    let document = formatter.format(&request).map_err(JfError::format_failed)?;

    output::print(&DocumentView(document), args.output)
}

fn read_request(path: &Path) -> Result<JobRequest> {
    let content = if path == Path::new("-") {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("failed to read job request from stdin")?;
        content
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read job request {}", path.display()))?
    };
    serde_json::from_str(&content).context("invalid job request")
}
