// ABOUTME: Assessment request loading from JSON text and files
// ABOUTME: Accepts a single request object or an array of requests for batch runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellpath Contributors

use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;
use wellpath_core::errors::{AppError, AppResult};
use wellpath_core::models::AssessmentRequest;

/// Parse one assessment request from JSON text
///
/// # Errors
///
/// Returns a serialization error when the text is not a valid request
pub fn parse_request(json: &str) -> AppResult<AssessmentRequest> {
    Ok(serde_json::from_str(json)?)
}

/// Parse one request or an array of requests from JSON text
///
/// # Errors
///
/// Returns a serialization error when the text is not valid JSON, and an
/// invalid-input error when it is neither a request object nor an array of them
pub fn parse_requests(json: &str) -> AppResult<Vec<AssessmentRequest>> {
    match serde_json::from_str::<Value>(json)? {
        value @ Value::Array(_) => Ok(serde_json::from_value(value)?),
        value @ Value::Object(_) => Ok(vec![serde_json::from_value(value)?]),
        _ => Err(AppError::invalid_input(
            "Expected an assessment request object or an array of requests",
        )
        .with_field("input")),
    }
}

fn read_file(path: &Path) -> AppResult<String> {
    fs::read_to_string(path).map_err(|e| {
        AppError::invalid_input(format!("Cannot read {}: {e}", path.display()))
            .with_field("input")
            .with_source(e)
    })
}

/// Load one assessment request from a JSON file
///
/// # Errors
///
/// Returns an invalid-input error when the file cannot be read and a
/// serialization error when its contents are not a valid request
pub fn load_request(path: impl AsRef<Path>) -> AppResult<AssessmentRequest> {
    let path = path.as_ref();
    let request = parse_request(&read_file(path)?)?;
    debug!(path = %path.display(), "Loaded assessment request");
    Ok(request)
}

/// Load a request object or an array of requests from a JSON file
///
/// # Errors
///
/// Returns an invalid-input error when the file cannot be read or holds
/// neither shape, and a serialization error for malformed requests
pub fn load_requests(path: impl AsRef<Path>) -> AppResult<Vec<AssessmentRequest>> {
    let path = path.as_ref();
    let requests = parse_requests(&read_file(path)?)?;
    debug!(path = %path.display(), count = requests.len(), "Loaded assessment requests");
    Ok(requests)
}
