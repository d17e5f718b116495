// ABOUTME: Lifestyle profile model with categorical habit fields
// ABOUTME: Smoking, alcohol, activity level, diet quality, sleep hours, and stress level
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellpath Contributors

use serde::{Deserialize, Serialize};

/// Smoking status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SmokingStatus {
    /// Never smoked
    #[default]
    Never,
    /// Quit smoking
    Former,
    /// Currently smokes
    Current,
}

/// Alcohol consumption
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum AlcoholConsumption {
    /// No alcohol
    #[default]
    None,
    /// Occasional drinks
    Light,
    /// Regular moderate drinking
    Moderate,
    /// Heavy drinking
    Heavy,
}

/// Exercise frequency, also used as the TDEE activity level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    #[default]
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Very hard exercise or a physical job
    VeryActive,
}

impl ActivityLevel {
    /// Snake-case name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Active => "active",
            Self::VeryActive => "very_active",
        }
    }

    /// Active or very active
    #[must_use]
    pub const fn is_vigorous(&self) -> bool {
        matches!(self, Self::Active | Self::VeryActive)
    }
}

/// Three-step intake level used for diet quality
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum IntakeLevel {
    /// Low intake
    Low,
    /// Medium intake
    #[default]
    Medium,
    /// High intake
    High,
}

/// Diet quality summary
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct DietQuality {
    /// Added sugar intake
    pub sugar_intake: IntakeLevel,
    /// Sodium intake
    pub sodium_intake: IntakeLevel,
    /// Fruit and vegetable intake
    pub produce_intake: IntakeLevel,
}

/// Perceived stress level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum StressLevel {
    /// Low stress
    Low,
    /// Moderate stress
    #[default]
    Moderate,
    /// High stress
    High,
}

/// Lifestyle profile supplied alongside the health profile
///
/// Omitted fields take the [`Default`] values.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LifestyleProfile {
    /// Smoking status
    pub smoking_status: SmokingStatus,
    /// Alcohol consumption
    pub alcohol_consumption: AlcoholConsumption,
    /// Exercise frequency
    pub exercise_frequency: ActivityLevel,
    /// Diet quality
    pub diet_quality: DietQuality,
    /// Typical nightly sleep (hours)
    pub sleep_hours: f64,
    /// Perceived stress
    pub stress_level: StressLevel,
}

impl Default for LifestyleProfile {
    fn default() -> Self {
        Self {
            smoking_status: SmokingStatus::default(),
            alcohol_consumption: AlcoholConsumption::default(),
            exercise_frequency: ActivityLevel::default(),
            diet_quality: DietQuality::default(),
            sleep_hours: 7.5,
            stress_level: StressLevel::default(),
        }
    }
}
