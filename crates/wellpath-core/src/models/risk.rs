// ABOUTME: Risk assessment output model with uniform risk-level thresholds
// ABOUTME: Condition, RiskLevel, and RiskAssessment definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellpath Contributors

use crate::constants::risk_levels::{HIGH_MIN_SCORE, MODERATE_MIN_SCORE, VERY_HIGH_MIN_SCORE};
use serde::{Deserialize, Serialize};

/// Tracked conditions, in output order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    /// Cardiovascular disease
    CardiovascularDisease,
    /// Type 2 diabetes
    #[serde(rename = "type_2_diabetes")]
    Type2Diabetes,
    /// Hypertension
    Hypertension,
    /// Obesity
    Obesity,
}

impl Condition {
    /// Serialized name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CardiovascularDisease => "cardiovascular_disease",
            Self::Type2Diabetes => "type_2_diabetes",
            Self::Hypertension => "hypertension",
            Self::Obesity => "obesity",
        }
    }

    /// Human-readable name
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::CardiovascularDisease => "Cardiovascular Disease",
            Self::Type2Diabetes => "Type 2 Diabetes",
            Self::Hypertension => "Hypertension",
            Self::Obesity => "Obesity",
        }
    }
}

/// Risk bucket
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    /// Score below 20
    Low,
    /// Score 20 to 39
    Moderate,
    /// Score 40 to 59
    High,
    /// Score 60 and above
    VeryHigh,
}

impl RiskLevel {
    /// Map a clamped score to its level; the same thresholds apply to every condition
    ///
    /// ```rust
    /// use wellpath_core::models::RiskLevel;
    ///
    /// assert_eq!(RiskLevel::from_score(39), RiskLevel::Moderate);
    /// assert_eq!(RiskLevel::from_score(40), RiskLevel::High);
    /// ```
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        if score < MODERATE_MIN_SCORE {
            Self::Low
        } else if score < HIGH_MIN_SCORE {
            Self::Moderate
        } else if score < VERY_HIGH_MIN_SCORE {
            Self::High
        } else {
            Self::VeryHigh
        }
    }

    /// High or very high
    #[must_use]
    pub const fn is_elevated(&self) -> bool {
        matches!(self, Self::High | Self::VeryHigh)
    }
}

/// Scored risk for one condition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RiskAssessment {
    /// Condition scored
    pub condition: Condition,
    /// Clamped score, 0 to 100
    pub score: u8,
    /// Bucket derived from `score`
    pub risk_level: RiskLevel,
    /// Labels of rules that raised the score, in evaluation order
    pub increasing_factors: Vec<String>,
    /// Labels of rules that lowered the score, in evaluation order
    pub decreasing_factors: Vec<String>,
    /// Recommendations tied to the factors that fired
    pub recommendations: Vec<String>,
    /// Data completeness, 0 to 1
    pub confidence: f64,
}
