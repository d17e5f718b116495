// ABOUTME: Risk scoring configuration for confidence estimation
// ABOUTME: Per-condition base confidence and the penalty applied for each missing input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellpath Contributors

use serde::{Deserialize, Serialize};

/// Risk scoring configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskScoringConfig {
    /// Confidence before penalties
    pub base_confidence: BaseConfidenceConfig,
    /// Subtracted once per missing confidence input
    pub confidence_penalty: f64,
}

impl Default for RiskScoringConfig {
    fn default() -> Self {
        Self {
            base_confidence: BaseConfidenceConfig::default(),
            confidence_penalty: 0.10,
        }
    }
}

/// Base confidence per condition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseConfidenceConfig {
    /// Cardiovascular disease
    pub cardiovascular: f64,
    /// Type 2 diabetes
    pub diabetes: f64,
    /// Hypertension
    pub hypertension: f64,
    /// Obesity
    pub obesity: f64,
}

impl Default for BaseConfidenceConfig {
    fn default() -> Self {
        Self {
            cardiovascular: 0.85,
            diabetes: 0.80,
            hypertension: 0.85,
            obesity: 0.90,
        }
    }
}

impl BaseConfidenceConfig {
    /// Values in declaration order, for range checks
    #[must_use]
    pub const fn values(&self) -> [f64; 4] {
        [
            self.cardiovascular,
            self.diabetes,
            self.hypertension,
            self.obesity,
        ]
    }
}
