// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Input staging: turns a data object's raw value into the files the
//! backend stages and the paths passed on the command line.

use crate::error::FormatError;
use jf_adapters::{FileRequest, LocationError, LocationResolver, PathUrlAssembler};
use jf_core::{DataObject, InputRecord, Multiplicity, ParamRecord, RawValue};
use regex::Regex;
use std::sync::LazyLock;

/// Info types whose single inputs are always looked up by name
const REFERENCE_GENOME_INFO_TYPES: &[&str] =
    &["ReferenceSequence", "ReferenceAnnotation", "ReferenceGenome"];

/// Info type whose inputs are never staged
const UNSUPPORTED_INFO_TYPE: &str = "ReconcileTaxa";

/// Info type barcode files are looked up under
const BARCODE_INFO_TYPE: &str = "BarcodeSelector";

// Allow expect here as the regex is compile-time verified to be valid
#[allow(clippy::expect_used)]
static FILE_URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:file://|/)").expect("constant regex pattern is valid"));

/// Last path segment
pub(crate) fn basename(path: &str) -> &str {
    path.rsplit_once('/').map_or(path, |(_, name)| name)
}

/// Whether a URL is a bare filesystem path or a `file://` URL
pub(crate) fn is_file_url(url: &str) -> bool {
    FILE_URL_PATTERN.is_match(url)
}

pub(crate) fn is_reference_genome(data_object: &DataObject) -> bool {
    REFERENCE_GENOME_INFO_TYPES.contains(&data_object.info_type())
}

pub(crate) fn is_unsupported(data_object: &DataObject) -> bool {
    data_object
        .info_type()
        .eq_ignore_ascii_case(UNSUPPORTED_INFO_TYPE)
}

/// File name carried by a raw value: the `name` field of a JSON object,
/// else the verbatim text
pub(crate) fn input_name(raw: &RawValue) -> &str {
    match raw {
        RawValue::Keyed { name, .. } => name,
        other => other.as_str(),
    }
}

/// Resolves inputs through the location service and URL assembler
pub(crate) struct InputResolver<'a, L, U> {
    locations: &'a L,
    urls: &'a U,
    debug: bool,
}

impl<'a, L, U> InputResolver<'a, L, U>
where
    L: LocationResolver,
    U: PathUrlAssembler,
{
    pub(crate) fn new(locations: &'a L, urls: &'a U, debug: bool) -> Self {
        Self {
            locations,
            urls,
            debug,
        }
    }

    /// Records to stage for a data object's raw value
    pub(crate) fn stage(
        &self,
        step: &str,
        data_object: &DataObject,
        raw: &RawValue,
    ) -> Result<Vec<InputRecord>, FormatError> {
        if is_unsupported(data_object) {
            return Ok(Vec::new());
        }

        tracing::debug!(
            data_object = %data_object.id,
            info_type = data_object.info_type(),
            multiplicity = %data_object.multiplicity,
            "staging input"
        );

        if self.locations.can_handle(data_object.info_type()) {
            let record = self.resolved_record(input_name(raw), data_object)?;
            return Ok(record.into_iter().collect());
        }

        match data_object.multiplicity {
            Multiplicity::Many => {
                tracing::warn!(file_ids = raw.as_str(), "multiple input files");
                let paths = path_list(step, data_object, raw)?;
                Ok(paths
                    .iter()
                    .map(|path| self.path_record(path, data_object))
                    .collect())
            }
            _ => Ok(vec![self.path_record(raw.as_str(), data_object)]),
        }
    }

    /// Paths to pass on the command line for a data object.
    ///
    /// Single reference genomes are looked up by name from `reference`;
    /// every other input uses the file names of its staged records.
    pub(crate) fn param_paths(
        &self,
        data_object: &DataObject,
        reference: &RawValue,
        staged: &[InputRecord],
    ) -> Result<Vec<String>, FormatError> {
        if data_object.multiplicity != Multiplicity::Single {
            return Ok(staged.iter().map(staged_path).collect());
        }
        if is_reference_genome(data_object) {
            let resolved = self.resolve_file(input_name(reference), data_object)?;
            return Ok(resolved.into_iter().collect());
        }
        Ok(staged.first().map(staged_path).into_iter().collect())
    }

    /// File name and URL of a barcode file.
    ///
    /// A value containing `/` is a path; anything else is a name in the
    /// user's workspace, looked up in one batch request.
    pub(crate) fn barcode_file(
        &self,
        value: &str,
        workspace_id: i64,
    ) -> Result<(String, String), FormatError> {
        if value.contains('/') {
            return Ok((basename(value).to_string(), self.urls.assemble(value)));
        }
        let name = format!("{},{}", workspace_id, value);
        let resolved = self
            .locations
            .resolve_batch(&[FileRequest::new(name.clone(), BARCODE_INFO_TYPE)])?;
        let file = resolved
            .into_iter()
            .next()
            .ok_or(LocationError::Unresolved(name))?;
        Ok((file.file_name, file.url))
    }

    /// Look up a file name; `None` when the name or the answer is blank
    fn resolve_file(
        &self,
        name: &str,
        data_object: &DataObject,
    ) -> Result<Option<String>, FormatError> {
        if name.trim().is_empty() {
            return Ok(None);
        }
        let url = self
            .locations
            .resolve_single(name, data_object.info_type())?;
        if url.trim().is_empty() {
            Ok(None)
        } else {
            Ok(Some(url))
        }
    }

    /// Record for a looked-up file; local files have nothing to stage
    fn resolved_record(
        &self,
        name: &str,
        data_object: &DataObject,
    ) -> Result<Option<InputRecord>, FormatError> {
        let Some(url) = self.resolve_file(name, data_object)? else {
            return Ok(None);
        };
        if is_file_url(&url) {
            return Ok(None);
        }
        Ok(Some(InputRecord {
            id: data_object.id.clone(),
            name: name.to_string(),
            property: Some(name.to_string()),
            info_type: Some(data_object.info_type().to_string()),
            value: url,
            multiplicity: None,
            retain: Some(self.debug || data_object.retain),
            order: None,
        }))
    }

    fn path_record(&self, path: &str, data_object: &DataObject) -> InputRecord {
        let filename = basename(path);
        InputRecord {
            id: data_object.id.clone(),
            name: filename.to_string(),
            property: Some(filename.to_string()),
            info_type: Some(data_object.info_type().to_string()),
            value: self.urls.assemble(path),
            multiplicity: Some(data_object.multiplicity.as_str().to_string()),
            retain: Some(self.debug || data_object.retain),
            order: None,
        }
    }
}

/// Elements of a multi-file value; a blank value holds no files
fn path_list(
    step: &str,
    data_object: &DataObject,
    raw: &RawValue,
) -> Result<Vec<String>, FormatError> {
    if let Some(items) = raw.items() {
        return Ok(items.to_vec());
    }
    if raw.is_blank() {
        return Ok(Vec::new());
    }
    Err(FormatError::malformed(
        step,
        &data_object.id,
        "expected a JSON array of paths",
    ))
}

fn staged_path(record: &InputRecord) -> String {
    record.property.clone().unwrap_or_default()
}

/// One parameter per path, carrying the data object's switch and order
pub(crate) fn path_params(
    data_object: &DataObject,
    paths: Vec<String>,
    omit_if_blank: bool,
) -> Vec<ParamRecord> {
    paths
        .into_iter()
        .filter(|path| !omit_if_blank || !path.trim().is_empty())
        .map(|path| {
            ParamRecord::new(
                data_object.id.clone(),
                data_object.switch_string.clone(),
                path,
                data_object.effective_order(),
            )
        })
        .collect()
}

#[cfg(test)]
#[path = "inputs_tests.rs"]
mod tests;
