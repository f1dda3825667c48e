// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job formatter: assembles a job document step by step

use crate::error::{FormatError, RecordKind};
use crate::inputs::{is_unsupported, path_params, InputResolver};
use crate::mapping::{FormattedSteps, MappingResolver};
use crate::outputs::{format_outputs, format_unreferenced_outputs};
use crate::params::{fixed_param, Formatted, PropertyFormatter};
use crate::source::{ValueSource, ValueSources};
use jf_adapters::{LocationResolver, PathUrlAssembler, RecordStore, TemplateStore};
use jf_core::{
    AnalysisDefinition, FormattedStep, InputRecord, JobDocument, JobRequest, ParamRecord,
    PropertyType, Step, StepConfig, Template, UserContext,
};
use serde_json::{Map, Value};

const REQUEST_TYPE: &str = "submit";
const JOB_TYPE: &str = "condor";

/// Formatter collaborators
pub struct FormatterDeps<S, L, U> {
    pub store: S,
    pub locations: L,
    pub urls: U,
}

/// Formats job requests into job documents.
///
/// One formatter serves any number of requests; each call to
/// [`JobFormatter::format`] is independent and keeps its state local.
pub struct JobFormatter<S, L, U> {
    store: S,
    locations: L,
    urls: U,
    user: UserContext,
}

impl<S, L, U> JobFormatter<S, L, U>
where
    S: RecordStore,
    L: LocationResolver,
    U: PathUrlAssembler,
{
    pub fn new(deps: FormatterDeps<S, L, U>, user: UserContext) -> Self {
        Self {
            store: deps.store,
            locations: deps.locations,
            urls: deps.urls,
            user,
        }
    }

    /// Format a request into a job document.
    ///
    /// Any failure aborts the whole pass; no partial document is returned.
    pub fn format(&self, request: &JobRequest) -> Result<JobDocument, FormatError> {
        let span = tracing::info_span!("format", analysis_id = %request.analysis_id);
        let _guard = span.enter();

        let start = std::time::Instant::now();
        let result = self.format_inner(request);
        let elapsed = start.elapsed();

        match &result {
            Ok(document) => tracing::info!(
                steps = document.steps.len(),
                elapsed_ms = elapsed.as_millis() as u64,
                "job formatted"
            ),
            Err(e) => tracing::error!(
                elapsed_ms = elapsed.as_millis() as u64,
                error = %e,
                "format failed"
            ),
        }

        result
    }

    fn format_inner(&self, request: &JobRequest) -> Result<JobDocument, FormatError> {
        let analysis = self
            .store
            .find_analysis(&request.analysis_id)?
            .ok_or_else(|| FormatError::NotFound {
                kind: RecordKind::Analysis,
                id: request.analysis_id.clone(),
            })?;

        let workspace_id = request
            .workspace_id
            .parse()
            .ok_or_else(|| FormatError::InvalidWorkspaceId(request.workspace_id.to_string()))?;
        tracing::debug!(workspace_id, "workspace");

        let mut formatted = FormattedSteps::new();
        for step in &analysis.steps {
            let step = self.format_step(&analysis, step, request, workspace_id, &formatted)?;
            formatted
                .push(step)
                .map_err(|step| FormatError::DuplicateStep {
                    analysis: analysis.id.clone(),
                    step,
                })?;
        }

        let document = JobDocument {
            request_type: REQUEST_TYPE.to_string(),
            job_type: JOB_TYPE.to_string(),
            analysis_id: analysis.id.clone(),
            analysis_name: analysis.name.clone(),
            workspace_id: request.workspace_id.clone(),
            username: self.user.short_username.clone(),
            email: self.user.email.clone(),
            experiment: experiment_fields(request),
            steps: formatted.into_steps(),
        };

        if tracing::enabled!(tracing::Level::DEBUG) {
            let json = serde_json::to_string(&document).unwrap_or_default();
            tracing::debug!(document = %json, "job document");
        }
        Ok(document)
    }

    /// Format one step against the steps completed before it
    fn format_step(
        &self,
        analysis: &AnalysisDefinition,
        step: &Step,
        request: &JobRequest,
        workspace_id: i64,
        formatted: &FormattedSteps,
    ) -> Result<FormattedStep, FormatError> {
        let span = tracing::info_span!("format.step", step = %step.name);
        let _guard = span.enter();

        let template = self
            .store
            .find_template(&step.template_id)?
            .ok_or_else(|| FormatError::NotFound {
                kind: RecordKind::Template,
                id: step.template_id.clone(),
            })?;

        let inputs = InputResolver::new(&self.locations, &self.urls, request.is_debug());
        let phases = StepPhases {
            step,
            template: &template,
            sources: ValueSources::new(analysis, step, &request.config),
            inputs: &inputs,
            formatter: PropertyFormatter::new(
                &step.name,
                workspace_id,
                &request.config,
                &inputs,
            ),
            mappings: MappingResolver::new(analysis, formatted, &self.store),
        };

        let mut config = phases.configured_inputs()?;
        let unreferenced = phases.unreferenced_inputs(&config.inputs)?;
        config.append(unreferenced);
        config.append(phases.properties()?);
        let output = format_outputs(&template, request.is_debug());
        config
            .params
            .extend(format_unreferenced_outputs(&template, &step.transformation));

        let component = self
            .store
            .find_component(&template.component_id)?
            .ok_or_else(|| FormatError::NotFound {
                kind: RecordKind::Component,
                id: template.component_id.clone(),
            })?;

        tracing::info!(
            inputs = config.inputs.len(),
            params = config.params.len(),
            outputs = output.len(),
            "step formatted"
        );

        Ok(FormattedStep {
            name: step.name.clone(),
            step_type: JOB_TYPE.to_string(),
            config: StepConfig {
                input: config.inputs,
                params: config.params,
                output,
            },
            component,
        })
    }
}

/// Per-step formatting phases, each returning its own accumulator
struct StepPhases<'a, S, L, U> {
    step: &'a Step,
    template: &'a Template,
    sources: ValueSources<'a>,
    inputs: &'a InputResolver<'a, L, U>,
    formatter: PropertyFormatter<'a, L, U>,
    mappings: MappingResolver<'a, S>,
}

impl<S, L, U> StepPhases<'_, S, L, U>
where
    S: TemplateStore,
    L: LocationResolver,
    U: PathUrlAssembler,
{
    /// Stage every input data object the user configured
    fn configured_inputs(&self) -> Result<Formatted, FormatError> {
        let mut staged = Vec::new();
        for input in &self.template.inputs {
            if let ValueSource::Config(raw) = self.sources.data_object(input) {
                if !raw.is_blank() {
                    staged.extend(self.inputs.stage(&self.step.name, input, &raw)?);
                }
            }
        }
        Ok(Formatted::inputs(staged))
    }

    /// Parameters for inputs no property refers to, from their staged
    /// files, a fixed value or a mapping
    fn unreferenced_inputs(&self, staged: &[InputRecord]) -> Result<Formatted, FormatError> {
        let mut params = Vec::new();
        for input in self.template.unreferenced_inputs() {
            if is_unsupported(input) {
                continue;
            }
            match self.sources.data_object(input) {
                ValueSource::Fixed(value) => params.push(ParamRecord::new(
                    input.id.clone(),
                    input.switch_string.clone(),
                    value,
                    input.effective_order(),
                )),
                ValueSource::Config(raw) => {
                    if raw.is_blank() {
                        continue;
                    }
                    let own: Vec<InputRecord> = staged
                        .iter()
                        .filter(|record| record.id == input.id)
                        .cloned()
                        .collect();
                    let paths = self.inputs.param_paths(input, &raw, &own)?;
                    params.extend(path_params(input, paths, false));
                }
                ValueSource::Mapped => {
                    params.extend(self.mappings.mapped_params(&self.step.name, input)?);
                }
                ValueSource::Default(_) | ValueSource::Unset => {}
            }
        }
        Ok(Formatted::params(params))
    }

    /// Every property in group order
    fn properties(&self) -> Result<Formatted, FormatError> {
        let mut formatted = Formatted::default();
        for property in self.template.properties() {
            if property.property_type == PropertyType::Info {
                continue;
            }

            let data_object = match &property.data_object {
                Some(id) => Some(self.template.data_object(id).ok_or_else(|| {
                    FormatError::DataObjectNotFound {
                        step: self.step.name.clone(),
                        property: property.id.clone(),
                    }
                })?),
                None => None,
            };

            match self.sources.property(property, data_object) {
                ValueSource::Fixed(value) => formatted.params.push(fixed_param(property, &value)),
                ValueSource::Config(raw) | ValueSource::Default(raw) => {
                    formatted.append(self.formatter.format(property, data_object, &raw)?);
                }
                ValueSource::Mapped => {
                    if let Some(data_object) = data_object {
                        formatted
                            .params
                            .extend(self.mappings.mapped_params(&self.step.name, data_object)?);
                    }
                }
                ValueSource::Unset => {}
            }
        }
        Ok(formatted)
    }
}

/// Request fields carried into the document; generated fields win
fn experiment_fields(request: &JobRequest) -> Map<String, Value> {
    let mut fields: Map<String, Value> = request
        .extra
        .iter()
        .filter(|(key, _)| !JobDocument::GENERATED_FIELDS.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    if let Some(debug) = request.debug {
        fields.insert("debug".to_string(), Value::Bool(debug));
    }
    fields
}

#[cfg(test)]
#[path = "formatter_tests.rs"]
mod tests;
