// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Property formatting: one rule per property type.

use crate::error::FormatError;
use crate::inputs::{path_params, InputResolver};
use jf_adapters::{LocationResolver, PathUrlAssembler};
use jf_core::{DataObject, InputRecord, ParamRecord, Property, PropertyType, RawValue, RuntimeConfig};
use regex::Regex;
use std::sync::LazyLock;

// Separator between an option's flag and its value: `--k v` or `--k=v`
#[allow(clippy::expect_used)]
static OPTION_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+|=").expect("constant regex pattern is valid"));

/// Parameters and staged inputs produced by a formatting phase.
///
/// Phases return their own accumulator; the step assembler merges them in
/// phase order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Formatted {
    pub params: Vec<ParamRecord>,
    pub inputs: Vec<InputRecord>,
}

impl Formatted {
    pub(crate) fn params(params: Vec<ParamRecord>) -> Self {
        Self {
            params,
            inputs: Vec::new(),
        }
    }

    pub(crate) fn inputs(inputs: Vec<InputRecord>) -> Self {
        Self {
            params: Vec::new(),
            inputs,
        }
    }

    fn param(param: ParamRecord) -> Self {
        Self::params(vec![param])
    }

    pub(crate) fn append(&mut self, other: Formatted) {
        self.params.extend(other.params);
        self.inputs.extend(other.inputs);
    }
}

/// Split option text into its flag and optional value
pub(crate) fn split_option(text: &str) -> (String, Option<String>) {
    let mut parts = OPTION_SEPARATOR.splitn(text.trim(), 2);
    let name = parts.next().unwrap_or_default().to_string();
    let value = parts.next().map(str::to_string);
    (name, value)
}

fn space_if_blank(text: &str) -> String {
    if text.trim().is_empty() {
        " ".to_string()
    } else {
        text.to_string()
    }
}

/// A fixed value: emitted as given, whatever the property's type
pub(crate) fn fixed_param(property: &Property, value: &str) -> ParamRecord {
    ParamRecord::new(
        property.id.clone(),
        property.name.clone(),
        value,
        property.effective_order(),
    )
}

/// Formats configured and defaulted property values for one step
pub(crate) struct PropertyFormatter<'a, L, U> {
    step: &'a str,
    workspace_id: i64,
    config: &'a RuntimeConfig,
    inputs: &'a InputResolver<'a, L, U>,
}

impl<'a, L, U> PropertyFormatter<'a, L, U>
where
    L: LocationResolver,
    U: PathUrlAssembler,
{
    pub(crate) fn new(
        step: &'a str,
        workspace_id: i64,
        config: &'a RuntimeConfig,
        inputs: &'a InputResolver<'a, L, U>,
    ) -> Self {
        Self {
            step,
            workspace_id,
            config,
            inputs,
        }
    }

    /// Format a property's raw value according to its type
    pub(crate) fn format(
        &self,
        property: &Property,
        data_object: Option<&DataObject>,
        raw: &RawValue,
    ) -> Result<Formatted, FormatError> {
        match &property.property_type {
            PropertyType::Info => Ok(Formatted::default()),
            PropertyType::Selection | PropertyType::ValueSelection => {
                Ok(self.selection(property, raw)?.map(Formatted::param).unwrap_or_default())
            }
            PropertyType::Flag => Ok(flag(property, raw)
                .map(Formatted::param)
                .unwrap_or_default()),
            PropertyType::QuotedText => Ok(quoted_text(property, raw)
                .map(Formatted::param)
                .unwrap_or_default()),
            PropertyType::BarcodeSelector | PropertyType::ClipperSelector => {
                self.barcode(property, raw)
            }
            PropertyType::Input => {
                let data_object = data_object.ok_or_else(|| FormatError::DataObjectNotFound {
                    step: self.step.to_string(),
                    property: property.id.clone(),
                })?;
                self.input(property, data_object, raw).map(Formatted::params)
            }
            PropertyType::Output => {
                if data_object.is_some_and(|data_object| data_object.implicit) {
                    return Ok(Formatted::default());
                }
                Ok(plain(property, raw).map(Formatted::param).unwrap_or_default())
            }
            PropertyType::Other(_) => {
                Ok(plain(property, raw).map(Formatted::param).unwrap_or_default())
            }
        }
    }

    /// Selections are new style (`{name, value}`) or old style (an index
    /// into the comma-separated candidates of the display name)
    fn selection(
        &self,
        property: &Property,
        raw: &RawValue,
    ) -> Result<Option<ParamRecord>, FormatError> {
        let order = property.effective_order();
        match raw {
            RawValue::Keyed { name, value, .. } => {
                if name.is_empty() && value.is_empty() {
                    return Ok(None);
                }
                Ok(Some(ParamRecord::new(
                    property.id.clone(),
                    space_if_blank(name),
                    space_if_blank(value),
                    order,
                )))
            }
            RawValue::List { .. } => Err(FormatError::malformed(
                self.step,
                &property.id,
                "expected a selection index or a {name, value} object",
            )),
            RawValue::Scalar(text) => {
                let index: i64 = text.trim().parse().map_err(|_| {
                    FormatError::malformed(
                        self.step,
                        &property.id,
                        format!("expected a selection index, got '{}'", text),
                    )
                })?;
                let candidates: Vec<&str> = property.name.split(',').collect();
                let Some(candidate) = usize::try_from(index)
                    .ok()
                    .and_then(|index| candidates.get(index))
                else {
                    return Ok(None);
                };
                let (name, value) = split_option(candidate);
                Ok(Some(match value {
                    Some(value) => ParamRecord::new(property.id.clone(), name, value, order),
                    None => ParamRecord::bare(property.id.clone(), name, order),
                }))
            }
        }
    }

    /// Deprecated barcode files: a parameter naming the file plus a
    /// companion input staging it
    fn barcode(&self, property: &Property, raw: &RawValue) -> Result<Formatted, FormatError> {
        let order = property.effective_order();
        let (filename, url) = self.inputs.barcode_file(raw.as_str(), self.workspace_id)?;

        let param = ParamRecord::new(property.id.clone(), property.name.clone(), filename, order)
            .with_type("File");
        let input = InputRecord {
            id: property.id.clone(),
            name: "1".to_string(),
            property: None,
            info_type: None,
            value: format!("{} ", url),
            multiplicity: Some("single".to_string()),
            retain: None,
            order: Some(order),
        };

        Ok(Formatted {
            params: vec![param],
            inputs: vec![input],
        })
    }

    /// One parameter per path of the property's data object
    fn input(
        &self,
        property: &Property,
        data_object: &DataObject,
        raw: &RawValue,
    ) -> Result<Vec<ParamRecord>, FormatError> {
        let staged = self.inputs.stage(self.step, data_object, raw)?;
        let reference = self
            .config
            .lookup(self.step, &data_object.id)
            .unwrap_or_else(|| raw.clone());
        let paths = self.inputs.param_paths(data_object, &reference, &staged)?;
        Ok(path_params(data_object, paths, property.omit_if_blank))
    }
}

/// Boolean flags pick the first (`true`) or second (`false`) candidate of
/// the display name
pub(crate) fn flag(property: &Property, raw: &RawValue) -> Option<ParamRecord> {
    let selected = raw.as_str().trim().eq_ignore_ascii_case("true");
    let index = if selected { 0 } else { 1 };

    let candidate = property
        .name
        .split(',')
        .nth(index)
        .filter(|candidate| !candidate.trim().is_empty())?;
    let (name, value) = split_option(candidate);
    Some(ParamRecord::new(
        property.id.clone(),
        name,
        value.unwrap_or_default(),
        property.effective_order(),
    ))
}

pub(crate) fn quoted_text(property: &Property, raw: &RawValue) -> Option<ParamRecord> {
    if property.omit_if_blank && raw.is_blank() {
        return None;
    }
    Some(ParamRecord::new(
        property.id.clone(),
        property.name.clone(),
        format!("\"{}\"", raw.as_str()),
        property.effective_order(),
    ))
}

pub(crate) fn plain(property: &Property, raw: &RawValue) -> Option<ParamRecord> {
    if property.omit_if_blank && raw.is_blank() {
        return None;
    }
    Some(ParamRecord::new(
        property.id.clone(),
        property.name.clone(),
        raw.as_str(),
        property.effective_order(),
    ))
}

#[cfg(test)]
#[path = "params_tests.rs"]
mod tests;
