// ABOUTME: Health profile model with anthropometrics and time-series vital readings
// ABOUTME: HealthProfile, Gender, blood pressure, glucose, cholesterol, and heart-rate readings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellpath Contributors

use crate::constants::conversions::GLUCOSE_MMOL_TO_MG_DL;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Gender used by the BMR formulas
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male (Mifflin-St Jeor +5 constant)
    Male,
    /// Female (Mifflin-St Jeor -161 constant)
    Female,
    /// Other or undisclosed (mean of both formulas)
    Other,
}

impl Gender {
    /// Lower-case name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }
}

/// A timestamped sample in one of the profile's vital series
pub trait Timestamped {
    /// When the sample was taken
    fn timestamp(&self) -> DateTime<Utc>;
}

/// Blood pressure reading (mmHg)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BloodPressureReading {
    /// Systolic pressure (the higher number)
    pub systolic: u32,
    /// Diastolic pressure (the lower number)
    pub diastolic: u32,
    /// When the reading was taken
    pub timestamp: DateTime<Utc>,
}

impl BloodPressureReading {
    /// Whether either component meets the given systolic/diastolic bracket
    #[must_use]
    pub const fn at_or_above(&self, systolic: u32, diastolic: u32) -> bool {
        self.systolic >= systolic || self.diastolic >= diastolic
    }
}

/// Glucose measurement unit
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum GlucoseUnit {
    /// Milligrams per decilitre
    #[default]
    MgDl,
    /// Millimoles per litre
    MmolL,
}

/// Blood glucose reading, treated as a fasting value
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BloodGlucoseReading {
    /// Measured value in `unit`
    pub value: f64,
    /// Unit of `value`
    #[serde(default)]
    pub unit: GlucoseUnit,
    /// When the reading was taken
    pub timestamp: DateTime<Utc>,
}

impl BloodGlucoseReading {
    /// Value converted to mg/dL
    #[must_use]
    pub fn mg_dl(&self) -> f64 {
        match self.unit {
            GlucoseUnit::MgDl => self.value,
            GlucoseUnit::MmolL => self.value * GLUCOSE_MMOL_TO_MG_DL,
        }
    }
}

/// Lipid panel (mg/dL)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CholesterolReading {
    /// Total cholesterol
    pub total: f64,
    /// HDL cholesterol
    pub hdl: f64,
    /// LDL cholesterol
    pub ldl: f64,
    /// When the panel was drawn
    pub timestamp: DateTime<Utc>,
}

/// Resting heart rate sample (bpm)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct HeartRateReading {
    /// Beats per minute
    pub value: u32,
    /// When the sample was taken
    pub timestamp: DateTime<Utc>,
}

macro_rules! impl_timestamped {
    ($($ty:ty),+) => {
        $(impl Timestamped for $ty {
            fn timestamp(&self) -> DateTime<Utc> {
                self.timestamp
            }
        })+
    };
}

impl_timestamped!(
    BloodPressureReading,
    BloodGlucoseReading,
    CholesterolReading,
    HeartRateReading
);

/// Latest-by-timestamp entry of a series; on equal timestamps the later entry wins
#[must_use]
pub fn latest<T: Timestamped>(series: &[T]) -> Option<&T> {
    series.iter().max_by_key(|sample| sample.timestamp())
}

/// User health profile supplied by the data-fetch layer
///
/// # Examples
///
/// ```rust
/// use wellpath_core::models::{Gender, HealthProfile};
///
/// let profile = HealthProfile::new(42, Gender::Female, 165.0, 60.0);
/// assert!(profile.validate().is_ok());
/// assert!(profile.latest_blood_pressure().is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthProfile {
    /// Age in years
    pub age: u32,
    /// Gender for BMR calculation
    pub gender: Gender,
    /// Height in centimetres
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Blood pressure history
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub blood_pressure: Vec<BloodPressureReading>,
    /// Blood glucose history
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub blood_glucose: Vec<BloodGlucoseReading>,
    /// Lipid panel history
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cholesterol: Vec<CholesterolReading>,
    /// Resting heart rate history
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub heart_rate: Vec<HeartRateReading>,
    /// Diagnosed conditions (free text, normalized on lookup)
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub conditions: BTreeSet<String>,
    /// Conditions present in close relatives
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub family_history: BTreeSet<String>,
}

impl HealthProfile {
    /// Profile with only the required fields set
    #[must_use]
    pub const fn new(age: u32, gender: Gender, height_cm: f64, weight_kg: f64) -> Self {
        Self {
            age,
            gender,
            height_cm,
            weight_kg,
            blood_pressure: Vec::new(),
            blood_glucose: Vec::new(),
            cholesterol: Vec::new(),
            heart_rate: Vec::new(),
            conditions: BTreeSet::new(),
            family_history: BTreeSet::new(),
        }
    }

    /// Validate the required fields
    ///
    /// # Errors
    ///
    /// Returns a validation `AppError` when age is zero or height/weight are
    /// not positive finite numbers
    pub fn validate(&self) -> AppResult<()> {
        if self.age == 0 {
            return Err(AppError::invalid_input("Age must be greater than 0").with_field("age"));
        }
        if !self.height_cm.is_finite() || self.height_cm <= 0.0 {
            return Err(
                AppError::invalid_input("Height must be a positive number of centimetres")
                    .with_field("height_cm"),
            );
        }
        if !self.weight_kg.is_finite() || self.weight_kg <= 0.0 {
            return Err(
                AppError::invalid_input("Weight must be a positive number of kilograms")
                    .with_field("weight_kg"),
            );
        }
        Ok(())
    }

    /// Most recent blood pressure reading
    #[must_use]
    pub fn latest_blood_pressure(&self) -> Option<&BloodPressureReading> {
        latest(&self.blood_pressure)
    }

    /// Most recent glucose reading
    #[must_use]
    pub fn latest_blood_glucose(&self) -> Option<&BloodGlucoseReading> {
        latest(&self.blood_glucose)
    }

    /// Most recent lipid panel
    #[must_use]
    pub fn latest_cholesterol(&self) -> Option<&CholesterolReading> {
        latest(&self.cholesterol)
    }

    /// Most recent resting heart rate
    #[must_use]
    pub fn latest_heart_rate(&self) -> Option<&HeartRateReading> {
        latest(&self.heart_rate)
    }

    /// Timestamp of the newest reading across all series
    #[must_use]
    pub fn newest_reading_at(&self) -> Option<DateTime<Utc>> {
        [
            self.latest_blood_pressure().map(Timestamped::timestamp),
            self.latest_blood_glucose().map(Timestamped::timestamp),
            self.latest_cholesterol().map(Timestamped::timestamp),
            self.latest_heart_rate().map(Timestamped::timestamp),
        ]
        .into_iter()
        .flatten()
        .max()
    }

    /// Whether a diagnosed condition matches any of the given keys
    #[must_use]
    pub fn has_condition(&self, keys: &[&str]) -> bool {
        matches_any(&self.conditions, keys)
    }

    /// Whether the family history matches any of the given keys
    #[must_use]
    pub fn has_family_history(&self, keys: &[&str]) -> bool {
        matches_any(&self.family_history, keys)
    }
}

/// Normalize free-text labels: trimmed, lower-case, whitespace/hyphens as `_`
#[must_use]
pub fn normalize_label(label: &str) -> String {
    label
        .trim()
        .to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

fn matches_any(labels: &BTreeSet<String>, keys: &[&str]) -> bool {
    labels
        .iter()
        .map(|label| normalize_label(label))
        .any(|label| keys.contains(&label.as_str()))
}
