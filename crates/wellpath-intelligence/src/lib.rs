// ABOUTME: Health-risk intelligence engine: metrics, risk scoring, interactions, behavior, coaching
// ABOUTME: Pure synchronous components plus the assessment engine that composes them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellpath Contributors

#![deny(unsafe_code)]

//! # Wellpath Intelligence
//!
//! Deterministic health-risk scoring and coaching. Every component is a pure
//! function of its inputs and the engine configuration; the interaction table
//! and rule tables are built once and shared read-only.
//!
//! ```rust
//! use wellpath_core::models::{ActivityLevel, Gender, HealthProfile};
//!
//! let profile = HealthProfile::new(30, Gender::Male, 175.0, 70.0);
//! let metrics = wellpath_intelligence::compute_metrics(&profile, ActivityLevel::Moderate).unwrap();
//! assert_eq!(metrics.bmr, 1649);
//! ```

/// Physiological estimation algorithms
pub mod algorithms;
/// Behavior insight analysis
pub mod behavior_analysis;
/// Coaching message synthesis
pub mod coaching;
/// Engine configuration
pub mod config;
/// Assessment engine
pub mod engine;
/// Medication interaction checking
pub mod interactions;
/// Body metrics
pub mod metrics;
/// Clinical breakpoints
pub mod physiological_constants;
/// Chronic disease risk scoring
pub mod risk_scoring;
/// Descriptive statistics helpers
pub mod statistics;

pub use behavior_analysis::BehaviorAnalyzer;
pub use coaching::CoachingSynthesizer;
pub use config::{ConfigError, EngineConfig};
pub use engine::HealthAssessmentEngine;
pub use interactions::{check_interactions, check_medications};
pub use risk_scoring::{RiskScorer, RuleBasedRiskScorer};

use wellpath_core::errors::AppResult;
use wellpath_core::models::{
    ActivityLevel, BehaviorInsight, BehaviorLog, BodyMetrics, CoachingMessage, HealthProfile,
    LifestyleProfile, RiskAssessment,
};

/// Compute BMI, BMR, TDEE, and heart-rate zones with the global configuration
///
/// # Errors
///
/// Returns a validation error for an invalid profile or resting heart rate
pub fn compute_metrics(
    profile: &HealthProfile,
    activity_level: ActivityLevel,
) -> AppResult<BodyMetrics> {
    metrics::compute_metrics_with_config(profile, activity_level, &EngineConfig::global().metrics)
}

/// Score chronic disease risks with the rule-based scorer
///
/// # Errors
///
/// Returns a validation error for an invalid profile
pub fn assess_risks(
    profile: &HealthProfile,
    lifestyle: &LifestyleProfile,
) -> AppResult<Vec<RiskAssessment>> {
    RuleBasedRiskScorer::new().assess(profile, lifestyle)
}

/// Analyze a behavior log with the global configuration
#[must_use]
pub fn analyze_behavior(log: &BehaviorLog) -> Vec<BehaviorInsight> {
    BehaviorAnalyzer::new().analyze(log)
}

/// Synthesize coaching messages with the global configuration
#[must_use]
pub fn synthesize_coaching(
    profile: &HealthProfile,
    risks: &[RiskAssessment],
    insights: &[BehaviorInsight],
) -> Vec<CoachingMessage> {
    CoachingSynthesizer::new().synthesize(profile, risks, insights)
}
