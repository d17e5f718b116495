// ABOUTME: Wellpath CLI - command-line front end for the health-risk assessment engine
// ABOUTME: Runs single and batch assessments, body metrics, and medication interaction checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellpath Contributors
//!
//! Usage:
//! ```bash
//! # Assess one request file
//! wellpath-cli assess --input request.json --pretty
//!
//! # Assess an array of requests in parallel
//! wellpath-cli batch --input requests.json
//!
//! # Body metrics without a request file
//! wellpath-cli metrics --weight-kg 70 --height-cm 175 --age 30 --gender male --resting-hr 60
//!
//! # Check medication interactions
//! wellpath-cli interactions warfarin aspirin lisinopril
//! ```
//!
//! Results are written to stdout as JSON. Failures write a JSON error body to
//! stderr and exit with status 1.

mod commands;

use anyhow::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use wellpath::errors::{AppError, ErrorResponse};
use wellpath::logging::init_logging;
use wellpath::models::{ActivityLevel, Gender};

#[derive(Parser)]
#[command(
    name = "wellpath-cli",
    about = "Wellpath health-risk assessment CLI",
    long_about = "Score chronic disease risk, analyze behavior, check medication interactions, and synthesize coaching from JSON health data."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Run a full assessment for one request file
    Assess {
        /// Request file (JSON object)
        #[arg(long, short = 'i')]
        input: PathBuf,

        /// Pretty-print the report
        #[arg(long)]
        pretty: bool,
    },

    /// Run assessments for a file holding a request object or an array of them
    Batch {
        /// Request file (JSON object or array)
        #[arg(long, short = 'i')]
        input: PathBuf,

        /// Pretty-print the reports
        #[arg(long)]
        pretty: bool,
    },

    /// Compute BMI, BMR, TDEE, and heart-rate zones
    Metrics {
        /// Body weight in kilograms
        #[arg(long)]
        weight_kg: f64,

        /// Height in centimetres
        #[arg(long)]
        height_cm: f64,

        /// Age in years
        #[arg(long)]
        age: u32,

        /// Gender used by the BMR equation
        #[arg(long, value_enum)]
        gender: GenderArg,

        /// Activity level used for TDEE
        #[arg(long, value_enum, default_value = "moderate")]
        activity: ActivityArg,

        /// Resting heart rate (enables heart-rate zones)
        #[arg(long)]
        resting_hr: Option<u32>,

        /// Pretty-print the metrics
        #[arg(long)]
        pretty: bool,
    },

    /// Check pairwise interactions between medication identifiers
    Interactions {
        /// Medication identifiers (names or generic identifiers)
        #[arg(required = true)]
        ids: Vec<String>,

        /// Pretty-print the findings
        #[arg(long)]
        pretty: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum GenderArg {
    Male,
    Female,
    Other,
}

impl From<GenderArg> for Gender {
    fn from(arg: GenderArg) -> Self {
        match arg {
            GenderArg::Male => Self::Male,
            GenderArg::Female => Self::Female,
            GenderArg::Other => Self::Other,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ActivityArg {
    Sedentary,
    Light,
    Moderate,
    Active,
    #[value(alias = "very_active")]
    VeryActive,
}

impl From<ActivityArg> for ActivityLevel {
    fn from(arg: ActivityArg) -> Self {
        match arg {
            ActivityArg::Sedentary => Self::Sedentary,
            ActivityArg::Light => Self::Light,
            ActivityArg::Moderate => Self::Moderate,
            ActivityArg::Active => Self::Active,
            ActivityArg::VeryActive => Self::VeryActive,
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    init_logging(cli.verbose)?;

    match cli.command {
        Command::Assess { input, pretty } => commands::assess(&input, pretty),
        Command::Batch { input, pretty } => commands::batch(&input, pretty),
        Command::Metrics {
            weight_kg,
            height_cm,
            age,
            gender,
            activity,
            resting_hr,
            pretty,
        } => commands::metrics(
            &commands::MetricsArgs {
                weight_kg,
                height_cm,
                age,
                gender: gender.into(),
                activity: activity.into(),
                resting_hr,
            },
            pretty,
        ),
        Command::Interactions { ids, pretty } => commands::interactions(&ids, pretty),
    }
}

/// Render a failure as the JSON error body
fn report_error(error: Error) {
    let body = match error.downcast::<AppError>() {
        Ok(app_error) => ErrorResponse::from(app_error),
        Err(other) => ErrorResponse::from(AppError::internal(format!("{other:#}"))),
    };
    match serde_json::to_string(&body) {
        Ok(json) => eprintln!("{json}"),
        Err(e) => eprintln!("{{\"error\":{{\"code\":\"INTERNAL_ERROR\",\"message\":\"{e}\"}}}}"),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(error) => {
            report_error(error);
            ExitCode::FAILURE
        }
    }
}
