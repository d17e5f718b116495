// ABOUTME: Health assessment engine orchestrating metrics, risks, interactions, behavior, and coaching
// ABOUTME: Single and parallel batch assessment over a pluggable risk scoring backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellpath Contributors

use crate::behavior_analysis::BehaviorAnalyzer;
use crate::coaching::CoachingSynthesizer;
use crate::config::EngineConfig;
use crate::interactions::check_medications;
use crate::metrics::compute_assessment_metrics;
use crate::risk_scoring::{RiskScorer, RuleBasedRiskScorer};
use rayon::prelude::*;
use tracing::{debug, info};
use wellpath_core::constants::service_names::WELLPATH_ENGINE;
use wellpath_core::errors::AppResult;
use wellpath_core::models::{AssessmentReport, AssessmentRequest};

/// Health assessment engine with configurable risk scoring backend
pub struct HealthAssessmentEngine<S: RiskScorer = RuleBasedRiskScorer> {
    scorer: S,
    config: EngineConfig,
    analyzer: BehaviorAnalyzer,
    coach: CoachingSynthesizer,
}

impl Default for HealthAssessmentEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl HealthAssessmentEngine {
    /// Engine using the global configuration and the rule-based scorer
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::global().clone())
    }

    /// Engine using an explicit configuration and the rule-based scorer
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        let scorer = RuleBasedRiskScorer::with_config(config.risk.clone());
        Self::with_scorer(scorer, config)
    }
}

impl<S: RiskScorer> HealthAssessmentEngine<S> {
    /// Engine using a custom risk scoring backend
    pub fn with_scorer(scorer: S, config: EngineConfig) -> Self {
        Self {
            scorer,
            analyzer: BehaviorAnalyzer::with_config(config.behavior.clone()),
            coach: CoachingSynthesizer::with_config(config.coaching.clone()),
            config,
        }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run the full assessment for one subject
    ///
    /// # Errors
    ///
    /// Returns a validation error when age, height, or weight is invalid; no
    /// partial report is produced. An unusable resting heart rate only drops
    /// the heart-rate zones.
    pub fn assess(&self, request: &AssessmentRequest) -> AppResult<AssessmentReport> {
        let subject = request.subject_id.as_deref().unwrap_or("anonymous");

        let metrics = compute_assessment_metrics(
            &request.profile,
            request.lifestyle.exercise_frequency,
            &self.config.metrics,
        )?;
        let risks = self.scorer.assess(&request.profile, &request.lifestyle)?;
        let interactions = check_medications(&request.medications);
        let behavior = self.analyzer.analyze(&request.behavior_log);
        let coaching = self.coach.synthesize(&request.profile, &risks, &behavior);

        debug!(
            service = WELLPATH_ENGINE,
            subject,
            scorer = self.scorer.name(),
            "Assessment components finished"
        );
        info!(
            service = WELLPATH_ENGINE,
            subject,
            risks = risks.len(),
            elevated = risks.iter().filter(|r| r.risk_level.is_elevated()).count(),
            interactions = interactions.findings.len(),
            insights = behavior.len(),
            coaching = coaching.len(),
            "Health assessment complete"
        );

        Ok(AssessmentReport {
            subject_id: request.subject_id.clone(),
            metrics,
            risks,
            interactions,
            behavior,
            coaching,
        })
    }

    /// Assess independent requests in parallel, one result per request in input order
    pub fn assess_population(
        &self,
        requests: &[AssessmentRequest],
    ) -> Vec<AppResult<AssessmentReport>> {
        let results: Vec<AppResult<AssessmentReport>> =
            requests.par_iter().map(|request| self.assess(request)).collect();

        info!(
            service = WELLPATH_ENGINE,
            requests = requests.len(),
            failed = results.iter().filter(|result| result.is_err()).count(),
            "Population assessment complete"
        );
        results
    }
}
