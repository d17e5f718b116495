// ABOUTME: Behavior log model with dated sleep, exercise, adherence, and nutrition samples
// ABOUTME: Append-only per-category logs supplied with each assessment call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellpath Contributors

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// One night of sleep
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SleepEntry {
    /// Night the sleep started
    pub date: NaiveDate,
    /// Hours slept
    pub hours_slept: f64,
    /// Self-reported quality, 1 (worst) to 10 (best)
    pub quality: u8,
    /// Time the user went to bed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bedtime: Option<NaiveTime>,
    /// Time the user woke up
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wake_time: Option<NaiveTime>,
}

/// Exercise session intensity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseIntensity {
    /// Light effort
    Low,
    /// Moderate effort
    Moderate,
    /// Vigorous effort
    High,
}

/// One exercise session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExerciseEntry {
    /// Day of the session
    pub date: NaiveDate,
    /// Session intensity
    pub intensity: ExerciseIntensity,
    /// Session length in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
}

/// One dose slot in the medication schedule
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdherenceEntry {
    /// Day of the dose
    pub date: NaiveDate,
    /// Medication the dose belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medication_id: Option<String>,
    /// Whether a dose was scheduled
    pub scheduled: bool,
    /// Whether the dose was taken as scheduled
    pub taken_as_scheduled: bool,
}

/// One day of nutrition tracking
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NutritionEntry {
    /// Day tracked
    pub date: NaiveDate,
    /// Water intake (fluid ounces)
    pub water_intake_oz: f64,
    /// Number of meals eaten
    pub meal_count: u32,
}

/// Longitudinal behavior samples for one user
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BehaviorLog {
    /// Sleep samples
    #[serde(default)]
    pub sleep: Vec<SleepEntry>,
    /// Exercise sessions
    #[serde(default)]
    pub exercise: Vec<ExerciseEntry>,
    /// Medication dose slots
    #[serde(default)]
    pub medication_adherence: Vec<AdherenceEntry>,
    /// Nutrition days
    #[serde(default)]
    pub nutrition: Vec<NutritionEntry>,
}

impl BehaviorLog {
    /// Whether no category has data
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sleep.is_empty()
            && self.exercise.is_empty()
            && self.medication_adherence.is_empty()
            && self.nutrition.is_empty()
    }
}
