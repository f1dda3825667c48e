// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Analysis commands

use crate::error::JfError;
use crate::output::{self, OutputFormat};
use anyhow::Result;
use clap::{Args, Subcommand};
use jf_core::AnalysisDefinition;
use jf_storage::Catalog;
use serde::Serialize;
use std::fmt;

#[derive(Args)]
pub struct AnalysisArgs {
    #[command(subcommand)]
    pub command: AnalysisCommand,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub output: OutputFormat,
}

#[derive(Subcommand)]
pub enum AnalysisCommand {
    /// List analyses in the catalog
    List,
    /// Show the steps and mappings of an analysis
    Show {
        /// Analysis id
        id: String,
    },
}

#[derive(Serialize)]
struct AnalysisRow {
    id: String,
    name: String,
    steps: usize,
}

impl fmt::Display for AnalysisRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<20} {:<30} {}", self.id, self.name, self.steps)
    }
}

#[derive(Serialize)]
struct StepView {
    name: String,
    template: String,
    component: Option<String>,
}

#[derive(Serialize)]
struct MappingView {
    source: String,
    target: String,
    relation: Vec<(String, String)>,
}

#[derive(Serialize)]
struct AnalysisDetail {
    id: String,
    name: String,
    description: String,
    steps: Vec<StepView>,
    mappings: Vec<MappingView>,
}

impl AnalysisDetail {
    fn new(analysis: &AnalysisDefinition, catalog: &Catalog) -> Self {
        let steps = analysis
            .steps
            .iter()
            .map(|step| StepView {
                name: step.name.clone(),
                template: step.template_id.clone(),
                component: catalog
                    .template(&step.template_id)
                    .map(|template| template.component_id.clone()),
            })
            .collect();
        let mappings = analysis
            .mappings
            .iter()
            .map(|mapping| MappingView {
                source: mapping.source.clone(),
                target: mapping.target.clone(),
                relation: mapping
                    .relation
                    .iter()
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect(),
            })
            .collect();
        Self {
            id: analysis.id.clone(),
            name: analysis.name.clone(),
            description: analysis.description.clone(),
            steps,
            mappings,
        }
    }
}

impl fmt::Display for AnalysisDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Analysis: {}", self.id)?;
        writeln!(f, "  Name: {}", self.name)?;
        if !self.description.is_empty() {
            writeln!(f, "  Description: {}", self.description)?;
        }
        writeln!(f, "  Steps:")?;
        for (i, step) in self.steps.iter().enumerate() {
            let component = step.component.as_deref().unwrap_or("-");
            writeln!(
                f,
                "    {}. {} (template {}, component {})",
                i + 1,
                step.name,
                step.template,
                component
            )?;
        }
        if !self.mappings.is_empty() {
            writeln!(f, "  Mappings:")?;
            for mapping in &self.mappings {
                for (source_key, target_id) in &mapping.relation {
                    writeln!(
                        f,
                        "    {}: {} -> {}: {}",
                        mapping.source, source_key, mapping.target, target_id
                    )?;
                }
            }
        }
        Ok(())
    }
}

pub fn handle(args: AnalysisArgs, catalog: &Catalog) -> Result<()> {
    match args.command {
        AnalysisCommand::List => list_analyses(catalog, args.output),
        AnalysisCommand::Show { id } => show_analysis(catalog, &id, args.output),
    }
}

fn list_analyses(catalog: &Catalog, format: OutputFormat) -> Result<()> {
    let rows: Vec<AnalysisRow> = catalog
        .analyses()
        .map(|analysis| AnalysisRow {
            id: analysis.id.clone(),
            name: analysis.name.clone(),
            steps: analysis.steps.len(),
        })
        .collect();

    let header = format!("{:<20} {:<30} STEPS", "ID", "NAME");
    output::print_table(&header, &rows, "No analyses", format)
}

fn show_analysis(catalog: &Catalog, id: &str, format: OutputFormat) -> Result<()> {
    let analysis = catalog
        .analysis(id)
        .ok_or_else(|| JfError::analysis_not_found(id))?;
    output::print(&AnalysisDetail::new(analysis, catalog), format)
}
