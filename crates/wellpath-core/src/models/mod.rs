// ABOUTME: Canonical health data model shared by every engine component
// ABOUTME: Inputs (profile, lifestyle, behavior log, medications), outputs, and request/report envelopes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellpath Contributors

//! # Data Models
//!
//! One canonical shape per concept. Any alternative input shape is an adapter
//! concern in front of these types.

/// Behavior log samples
pub mod behavior;
/// Coaching messages
pub mod coaching;
/// Behavior insights
pub mod insight;
/// Medication interaction findings
pub mod interaction;
/// Lifestyle profile
pub mod lifestyle;
/// Medication list
pub mod medication;
/// Anthropometric outputs
pub mod metrics;
/// Health profile and vital series
pub mod profile;
/// Risk assessments
pub mod risk;

pub use behavior::{
    AdherenceEntry, BehaviorLog, ExerciseEntry, ExerciseIntensity, NutritionEntry, SleepEntry,
};
pub use coaching::{CoachingCategory, CoachingMessage, Priority};
pub use insight::{BehaviorCategory, BehaviorInsight, Sentiment};
pub use interaction::{InteractionFinding, InteractionReport, Severity};
pub use lifestyle::{
    ActivityLevel, AlcoholConsumption, DietQuality, IntakeLevel, LifestyleProfile, SmokingStatus,
    StressLevel,
};
pub use medication::{Medication, MedicationStatus};
pub use metrics::{BmiCategory, BodyMetrics, HeartRateZone};
pub use profile::{
    latest, normalize_label, BloodGlucoseReading, BloodPressureReading, CholesterolReading,
    Gender, GlucoseUnit, HealthProfile, HeartRateReading, Timestamped,
};
pub use risk::{Condition, RiskAssessment, RiskLevel};

use serde::{Deserialize, Serialize};

/// Everything the engine needs for one user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssessmentRequest {
    /// Caller-side identifier echoed into the report
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_id: Option<String>,
    /// Health profile
    pub profile: HealthProfile,
    /// Lifestyle profile
    #[serde(default)]
    pub lifestyle: LifestyleProfile,
    /// Behavior samples
    #[serde(default)]
    pub behavior_log: BehaviorLog,
    /// Medication list
    #[serde(default)]
    pub medications: Vec<Medication>,
}

/// Everything the engine produces for one user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssessmentReport {
    /// Identifier from the request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_id: Option<String>,
    /// Body metrics
    pub metrics: BodyMetrics,
    /// Risk assessments in condition order
    pub risks: Vec<RiskAssessment>,
    /// Interaction findings over active medications
    pub interactions: InteractionReport,
    /// Behavior insights in category order
    pub behavior: Vec<BehaviorInsight>,
    /// Prioritized coaching messages
    pub coaching: Vec<CoachingMessage>,
}
