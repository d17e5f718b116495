// ABOUTME: Main library entry point for the Wellpath health-risk scoring and coaching engine
// ABOUTME: Re-exports the engine crates and adds logging setup and assessment request loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellpath Contributors

#![deny(unsafe_code)]

//! # Wellpath
//!
//! A deterministic engine that turns a health profile, a lifestyle profile, a
//! behavior log and a medication list into body metrics, chronic disease risk
//! scores, medication interaction findings, behavior insights and prioritized
//! coaching messages.
//!
//! ## Architecture
//!
//! - **`wellpath-core`**: errors, the canonical data model, constants
//! - **`wellpath-intelligence`**: the scoring components and the assessment engine
//! - **this crate**: logging setup, request loading, and the `wellpath-cli` binary
//!
//! ## Example Usage
//!
//! ```rust
//! use wellpath::{parse_request, HealthAssessmentEngine};
//!
//! let request = parse_request(
//!     r#"{"profile": {"age": 30, "gender": "male", "height_cm": 175.0, "weight_kg": 70.0}}"#,
//! )
//! .unwrap();
//! let report = HealthAssessmentEngine::new().assess(&request).unwrap();
//! assert_eq!(report.metrics.bmr, 1649);
//! ```

/// Logging configuration and subscriber setup
pub mod logging;

/// Assessment request loading from JSON text and files
pub mod request;

pub use request::{load_request, load_requests, parse_request, parse_requests};

pub use wellpath_core::{constants, errors, models};
pub use wellpath_intelligence::{
    algorithms, analyze_behavior, assess_risks, behavior_analysis, check_interactions,
    check_medications, coaching, compute_metrics, config, engine, interactions, metrics,
    physiological_constants, risk_scoring, statistics, synthesize_coaching, BehaviorAnalyzer,
    CoachingSynthesizer, ConfigError, EngineConfig, HealthAssessmentEngine, RiskScorer,
    RuleBasedRiskScorer,
};
