// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output records and the command-line parameters of unreferenced outputs

use jf_core::{OutputRecord, ParamRecord, Template, Transformation};

/// Every declared output, then the log collection
pub(crate) fn format_outputs(template: &Template, debug: bool) -> Vec<OutputRecord> {
    template
        .outputs
        .iter()
        .map(|output| OutputRecord {
            name: output.name.clone(),
            property: output.name.clone(),
            info_type: output.info_type().to_string(),
            multiplicity: output.multiplicity.as_str().to_string(),
            retain: debug || output.retain,
        })
        .chain(std::iter::once(OutputRecord::logs()))
        .collect()
}

/// Parameters for outputs no property refers to.
///
/// Outputs whose normalized order is negative stay off the command line.
pub(crate) fn format_unreferenced_outputs(
    template: &Template,
    transformation: &Transformation,
) -> Vec<ParamRecord> {
    template
        .unreferenced_outputs()
        .into_iter()
        .filter(|output| output.effective_order() >= 0)
        .map(|output| {
            let value = transformation
                .value(&output.id)
                .unwrap_or(output.name.as_str());
            ParamRecord::new(
                output.id.clone(),
                output.switch_string.clone(),
                value,
                output.effective_order(),
            )
        })
        .collect()
}

#[cfg(test)]
#[path = "outputs_tests.rs"]
mod tests;
