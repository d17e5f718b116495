// ABOUTME: Anthropometric output models: BMI category, heart-rate zones, body metrics
// ABOUTME: Produced fresh by the metrics calculator on every call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellpath Contributors

use super::lifestyle::ActivityLevel;
use serde::{Deserialize, Serialize};

/// BMI classification (WHO breakpoints 18.5/25/30/35/40)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BmiCategory {
    /// BMI below 18.5
    #[serde(rename = "underweight")]
    Underweight,
    /// BMI 18.5 to below 25
    #[serde(rename = "normal")]
    Normal,
    /// BMI 25 to below 30
    #[serde(rename = "overweight")]
    Overweight,
    /// BMI 30 to below 35
    #[serde(rename = "obese_I")]
    ObeseI,
    /// BMI 35 to below 40
    #[serde(rename = "obese_II")]
    ObeseII,
    /// BMI 40 and above
    #[serde(rename = "obese_III")]
    ObeseIII,
}

impl BmiCategory {
    /// Serialized name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Underweight => "underweight",
            Self::Normal => "normal",
            Self::Overweight => "overweight",
            Self::ObeseI => "obese_I",
            Self::ObeseII => "obese_II",
            Self::ObeseIII => "obese_III",
        }
    }
}

/// One Karvonen training zone
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HeartRateZone {
    /// Zone number, 1 to 5
    pub zone: u8,
    /// Zone label (Very Light ... Maximum)
    pub label: String,
    /// Lower bound as a fraction of heart-rate reserve
    pub min_percent: f64,
    /// Upper bound as a fraction of heart-rate reserve
    pub max_percent: f64,
    /// Lower bound (bpm)
    pub min_bpm: u32,
    /// Upper bound (bpm)
    pub max_bpm: u32,
}

/// Full metrics bundle for one profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BodyMetrics {
    /// Body mass index, one decimal
    pub bmi: f64,
    /// BMI classification
    pub bmi_category: BmiCategory,
    /// Basal metabolic rate (kcal/day)
    pub bmr: u32,
    /// Total daily energy expenditure (kcal/day)
    pub tdee: u32,
    /// Activity level used for TDEE
    pub activity_level: ActivityLevel,
    /// Estimated maximum heart rate (bpm), present with zones
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_heart_rate: Option<u32>,
    /// Training zones, absent without a resting heart rate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heart_rate_zones: Option<Vec<HeartRateZone>>,
}
