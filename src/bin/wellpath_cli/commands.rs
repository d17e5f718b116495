// ABOUTME: Subcommand implementations for the Wellpath CLI
// ABOUTME: Each command runs the engine and writes JSON results to stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellpath Contributors

use anyhow::Result;
use chrono::Utc;
use serde::Serialize;
use serde_json::{json, Value};
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;
use tracing::{info, warn};
use wellpath::errors::{AppError, AppResult, ErrorResponse};
use wellpath::models::{ActivityLevel, Gender, HealthProfile, HeartRateReading};
use wellpath::{
    check_interactions, compute_metrics, load_request, load_requests, HealthAssessmentEngine,
};

/// Inputs for the `metrics` command
pub struct MetricsArgs {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age: u32,
    pub gender: Gender,
    pub activity: ActivityLevel,
    pub resting_hr: Option<u32>,
}

fn write_json<T: Serialize>(value: &T, pretty: bool) -> AppResult<()> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{text}")
        .map_err(|e| AppError::internal(format!("Failed to write output: {e}")).with_source(e))
}

pub fn assess(input: &Path, pretty: bool) -> Result<ExitCode> {
    let request = load_request(input)?;
    let report = HealthAssessmentEngine::new().assess(&request)?;
    write_json(&report, pretty)?;
    Ok(ExitCode::SUCCESS)
}

/// Run every request; failed requests are reported in place as error bodies
pub fn batch(input: &Path, pretty: bool) -> Result<ExitCode> {
    let requests = load_requests(input)?;
    let results = HealthAssessmentEngine::new().assess_population(&requests);

    let mut failures = 0_usize;
    let entries: Vec<Value> = results
        .into_iter()
        .map(|result| match result {
            Ok(report) => serde_json::to_value(report),
            Err(error) => {
                failures += 1;
                serde_json::to_value(ErrorResponse::from(error))
            }
        })
        .collect::<Result<_, _>>()?;

    info!(requests = entries.len(), failures, "Batch assessment finished");
    write_json(&entries, pretty)?;

    if failures > 0 {
        warn!(failures, "Some requests failed validation");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

pub fn metrics(args: &MetricsArgs, pretty: bool) -> Result<ExitCode> {
    let mut profile = HealthProfile::new(args.age, args.gender, args.height_cm, args.weight_kg);
    if let Some(value) = args.resting_hr {
        profile.heart_rate.push(HeartRateReading {
            value,
            timestamp: Utc::now(),
        });
    }
    let metrics = compute_metrics(&profile, args.activity)?;
    write_json(&metrics, pretty)?;
    Ok(ExitCode::SUCCESS)
}

pub fn interactions(ids: &[String], pretty: bool) -> Result<ExitCode> {
    let findings = check_interactions(ids);
    write_json(
        &json!({
            "medication_ids": ids,
            "findings": findings,
        }),
        pretty,
    )?;
    Ok(ExitCode::SUCCESS)
}
