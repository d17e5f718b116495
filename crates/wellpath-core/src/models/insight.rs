// ABOUTME: Behavior insight output model
// ABOUTME: BehaviorCategory, Sentiment, and BehaviorInsight definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellpath Contributors

use crate::constants::sentiment::{NEGATIVE_BELOW_SCORE, POSITIVE_MIN_SCORE};
use serde::{Deserialize, Serialize};

/// Behavior categories, in output order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BehaviorCategory {
    /// Sleep duration and regularity
    Sleep,
    /// Exercise frequency and intensity
    Exercise,
    /// Medication adherence
    Medication,
    /// Hydration and meals
    Nutrition,
}

impl BehaviorCategory {
    /// Serialized name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sleep => "sleep",
            Self::Exercise => "exercise",
            Self::Medication => "medication",
            Self::Nutrition => "nutrition",
        }
    }
}

/// Qualitative classification of a behavior score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    /// Score 75 and above
    Positive,
    /// Score 50 to below 75
    Neutral,
    /// Score below 50
    Negative,
}

impl Sentiment {
    /// Classify a 0-100 score
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= POSITIVE_MIN_SCORE {
            Self::Positive
        } else if score < NEGATIVE_BELOW_SCORE {
            Self::Negative
        } else {
            Self::Neutral
        }
    }
}

/// Scored behavior category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BehaviorInsight {
    /// Category analyzed
    pub category: BehaviorCategory,
    /// Normalcy score, 0 to 100, one decimal
    pub score: f64,
    /// Classification of `score`
    pub sentiment: Sentiment,
    /// Triggered observations first, then positive fillers
    pub observations: Vec<String>,
    /// One suggestion per triggered observation
    pub suggestions: Vec<String>,
    /// Raw taken/scheduled ratio (medication only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adherence_ratio: Option<f64>,
    /// Samples that contributed
    pub sample_count: usize,
}
