// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Location resolver backed by a file-info HTTP service.
//!
//! `POST {base}/file-url` with `{"name", "type"}` answers
//! `{"urlInfo": {"url"}}`; `POST {base}/file-urls` with
//! `{"input": [{"name", "type"}, ...]}` answers
//! `[{"urlInfo": {"file_name", "url"}}, ...]`.

use super::{FileRequest, LocationError, LocationResolver, ResolvedFile};
use serde_json::{json, Value};
use std::collections::HashSet;

/// Blocking HTTP client for the file-info service
#[derive(Debug, Clone)]
pub struct HttpLocationResolver {
    base_url: String,
    handled_types: HashSet<String>,
    agent: ureq::Agent,
}

impl HttpLocationResolver {
    pub fn new<I, S>(base_url: impl Into<String>, handled_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            base_url: base_url.into(),
            handled_types: handled_types.into_iter().map(Into::into).collect(),
            agent: ureq::Agent::new_with_defaults(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    fn post(&self, path: &str, body: &Value) -> Result<Value, LocationError> {
        let url = self.endpoint(path);
        let payload = body.to_string();

        let mut response = self
            .agent
            .post(&url)
            .header("Content-Type", "application/json")
            .send(payload.as_str())
            .map_err(|e| LocationError::Request(format!("POST {} failed: {}", url, e)))?;

        let text = response
            .body_mut()
            .read_to_string()
            .map_err(|e| LocationError::Request(format!("failed to read response: {}", e)))?;

        serde_json::from_str(&text)
            .map_err(|e| LocationError::InvalidResponse(format!("{} returned non-JSON: {}", url, e)))
    }
}

impl LocationResolver for HttpLocationResolver {
    fn can_handle(&self, info_type: &str) -> bool {
        self.handled_types.contains(info_type.trim())
    }

    fn resolve_single(&self, name: &str, info_type: &str) -> Result<String, LocationError> {
        let response = self.post("file-url", &json!({ "name": name, "type": info_type }))?;
        single_url(&response)
    }

    fn resolve_batch(&self, requests: &[FileRequest]) -> Result<Vec<ResolvedFile>, LocationError> {
        let input: Vec<Value> = requests
            .iter()
            .map(|request| json!({ "name": request.name, "type": request.info_type }))
            .collect();
        let response = self.post("file-urls", &json!({ "input": input }))?;
        batch_files(&response)
    }
}

/// Extract `urlInfo.url` from a single-file response
pub(crate) fn single_url(response: &Value) -> Result<String, LocationError> {
    response
        .get("urlInfo")
        .and_then(|info| info.get("url"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| LocationError::InvalidResponse("missing urlInfo.url".to_string()))
}

/// Extract `[urlInfo{file_name, url}]` from a batch response
pub(crate) fn batch_files(response: &Value) -> Result<Vec<ResolvedFile>, LocationError> {
    let entries = response
        .as_array()
        .ok_or_else(|| LocationError::InvalidResponse("expected an array".to_string()))?;

    entries
        .iter()
        .map(|entry| {
            let info = entry
                .get("urlInfo")
                .ok_or_else(|| LocationError::InvalidResponse("missing urlInfo".to_string()))?;
            let field = |name: &str| {
                info.get(name)
                    .and_then(Value::as_str)
                    .map(str::to_string)
                    .ok_or_else(|| LocationError::InvalidResponse(format!("missing urlInfo.{}", name)))
            };
            Ok(ResolvedFile {
                file_name: field("file_name")?,
                url: field("url")?,
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
