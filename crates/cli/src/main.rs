// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! jf - Job Formatter CLI

mod adapters;
mod commands;
mod error;
mod output;
mod settings;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{analysis, format};
use error::JfError;
use settings::Settings;
use std::path::PathBuf;
use std::process::ExitCode;

/// Environment variable holding the log filter
const LOG_ENV: &str = "JF_LOG";

#[derive(Parser)]
#[command(
    name = "jf",
    version,
    about = "Job Formatter - turn analysis requests into job documents"
)]
struct Cli {
    /// Settings file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Catalog of analyses, templates and components (TOML or JSON)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format a job request into a job document
    Format(format::FormatArgs),
    /// Inspect catalog analyses
    Analysis(analysis::AnalysisArgs),
}

fn main() -> ExitCode {
    setup_logging();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<JfError>() {
                Some(jf) => eprint!("{}", jf),
                None => eprintln!("error: {:#}", err),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    let catalog_path = cli.catalog.or_else(|| settings.catalog.clone());
    let catalog = commands::open_catalog(catalog_path.as_deref())?;

    match cli.command {
        Commands::Format(args) => format::handle(args, &settings, catalog),
        Commands::Analysis(args) => analysis::handle(args, &catalog),
    }
}

fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
