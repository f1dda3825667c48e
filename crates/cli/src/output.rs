// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for CLI commands

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Print one value as text or pretty JSON
pub fn print<T: Serialize + Display>(value: &T, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", value),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
    }
    Ok(())
}

/// Print rows under a header; text output says `empty` when there are none
pub fn print_table<T: Serialize + Display>(
    header: &str,
    rows: &[T],
    empty: &str,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text if rows.is_empty() => println!("{}", empty),
        OutputFormat::Text => {
            println!("{}", header);
            for row in rows {
                println!("{}", row);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(rows)?),
    }
    Ok(())
}
