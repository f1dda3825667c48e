// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Catalog: validated records converted to the core model.

use crate::parser::{parse_raw_catalog, read_catalog_file, CatalogFormat, ParseError};
use crate::types::{RawAnalysis, RawCatalog, RawComponent, RawDataObject, RawTemplate};
use crate::validator::validate_catalog;
use indexmap::IndexMap;
use jf_adapters::{AnalysisStore, ComponentStore, StoreError, TemplateStore};
use jf_core::{
    AnalysisDefinition, DataObject, DeployedComponent, InputOutputMap, Multiplicity, Property,
    PropertyGroup, Step, Template, Transformation,
};
use std::path::Path;

/// Analyses, templates and components loaded from one document.
///
/// Records keep document order, so listings are stable.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    analyses: IndexMap<String, AnalysisDefinition>,
    templates: IndexMap<String, Template>,
    components: IndexMap<String, DeployedComponent>,
}

impl Catalog {
    pub fn analyses(&self) -> impl Iterator<Item = &AnalysisDefinition> {
        self.analyses.values()
    }

    pub fn templates(&self) -> impl Iterator<Item = &Template> {
        self.templates.values()
    }

    pub fn components(&self) -> impl Iterator<Item = &DeployedComponent> {
        self.components.values()
    }

    pub fn analysis(&self, id: &str) -> Option<&AnalysisDefinition> {
        self.analyses.get(id)
    }

    pub fn template(&self, id: &str) -> Option<&Template> {
        self.templates.get(id)
    }

    pub fn component(&self, id: &str) -> Option<&DeployedComponent> {
        self.components.get(id)
    }

    fn from_raw(raw: RawCatalog) -> Result<Self, ParseError> {
        let mut catalog = Catalog::default();
        for analysis in raw.analysis {
            catalog
                .analyses
                .insert(analysis.id.clone(), convert_analysis(analysis));
        }
        for template in raw.template {
            catalog
                .templates
                .insert(template.id.clone(), convert_template(template)?);
        }
        for component in raw.component {
            catalog
                .components
                .insert(component.id.clone(), convert_component(component));
        }
        Ok(catalog)
    }
}

/// Parse and validate a catalog document.
pub fn parse_catalog(content: &str, format: CatalogFormat) -> Result<Catalog, ParseError> {
    let raw = parse_raw_catalog(content, format)?;
    validate_catalog(&raw)?;
    Catalog::from_raw(raw)
}

/// Load a catalog file; `.toml` and `.json` are accepted.
pub fn load_catalog(path: &Path) -> Result<Catalog, ParseError> {
    let (content, format) = read_catalog_file(path)?;
    let catalog = parse_catalog(&content, format)?;
    tracing::debug!(
        path = %path.display(),
        analyses = catalog.analyses.len(),
        templates = catalog.templates.len(),
        components = catalog.components.len(),
        "catalog loaded"
    );
    Ok(catalog)
}

fn convert_analysis(raw: RawAnalysis) -> AnalysisDefinition {
    AnalysisDefinition {
        id: raw.id,
        name: raw.name,
        description: raw.description,
        steps: raw
            .step
            .into_iter()
            .map(|step| {
                Step::new(step.name, step.template)
                    .with_transformation(step.transformation.into_iter().collect::<Transformation>())
            })
            .collect(),
        mappings: raw
            .mapping
            .into_iter()
            .map(|mapping| InputOutputMap {
                source: mapping.source,
                target: mapping.target,
                relation: mapping.relation,
            })
            .collect(),
    }
}

fn convert_template(raw: RawTemplate) -> Result<Template, ParseError> {
    let scope = format!("template '{}'", raw.id);
    let inputs = raw
        .input
        .into_iter()
        .map(|d| convert_data_object(d, &scope))
        .collect::<Result<Vec<_>, _>>()?;
    let outputs = raw
        .output
        .into_iter()
        .map(|d| convert_data_object(d, &scope))
        .collect::<Result<Vec<_>, _>>()?;

    let groups = raw
        .group
        .into_iter()
        .map(|group| PropertyGroup {
            name: group.name,
            properties: group
                .property
                .into_iter()
                .map(|p| Property {
                    id: p.id,
                    name: p.name,
                    property_type: p.property_type.into(),
                    order: p.order,
                    omit_if_blank: p.omit_if_blank,
                    is_visible: p.visible,
                    default_value: p.default,
                    data_object: p.data_object,
                })
                .collect(),
        })
        .collect();

    Ok(Template {
        id: raw.id,
        name: raw.name,
        component_id: raw.component,
        groups,
        inputs,
        outputs,
    })
}

fn convert_data_object(raw: RawDataObject, scope: &str) -> Result<DataObject, ParseError> {
    let multiplicity = match raw.multiplicity.as_deref() {
        None | Some("single") => Multiplicity::Single,
        Some("many") => Multiplicity::Many,
        Some("collection") => Multiplicity::Collection,
        Some(other) => {
            return Err(ParseError::InvalidValue {
                field: format!("{}.{}.multiplicity", scope, raw.id),
                value: other.to_string(),
                expected: "single, many or collection".to_string(),
            })
        }
    };
    Ok(DataObject {
        id: raw.id,
        name: raw.name,
        switch_string: raw.switch,
        info_type: raw.info_type,
        multiplicity,
        retain: raw.retain,
        order: raw.order,
        implicit: raw.implicit,
    })
}

fn convert_component(raw: RawComponent) -> DeployedComponent {
    DeployedComponent {
        id: raw.id,
        name: raw.name,
        location: raw.location,
        component_type: raw.component_type,
        description: raw.description,
    }
}

impl AnalysisStore for Catalog {
    fn find_analysis(&self, id: &str) -> Result<Option<AnalysisDefinition>, StoreError> {
        Ok(self.analyses.get(id).cloned())
    }
}

impl TemplateStore for Catalog {
    fn find_template(&self, id: &str) -> Result<Option<Template>, StoreError> {
        Ok(self.templates.get(id).cloned())
    }
}

impl ComponentStore for Catalog {
    fn find_component(&self, id: &str) -> Result<Option<DeployedComponent>, StoreError> {
        Ok(self.components.get(id).cloned())
    }
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
