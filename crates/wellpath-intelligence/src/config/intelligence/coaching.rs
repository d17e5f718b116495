// ABOUTME: Coaching synthesis configuration for vital-sign alerts and achievements
// ABOUTME: Blood pressure, glucose, and resting heart rate alert levels plus adherence alert ratio
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellpath Contributors

use serde::{Deserialize, Serialize};

/// Coaching configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoachingConfig {
    /// Vital-sign alert levels
    pub vitals: VitalThresholds,
    /// Adherence ratio below which a high-priority message is always emitted
    pub adherence_alert_ratio: f64,
    /// Minimum positive behavior score that earns an achievement message
    pub achievement_min_score: f64,
}

impl Default for CoachingConfig {
    fn default() -> Self {
        Self {
            vitals: VitalThresholds::default(),
            adherence_alert_ratio: 0.8,
            achievement_min_score: 90.0,
        }
    }
}

/// Vital-sign alert levels; a reading at or above either component alerts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VitalThresholds {
    /// Systolic above-target level (mmHg)
    pub systolic_alert: u32,
    /// Diastolic above-target level (mmHg)
    pub diastolic_alert: u32,
    /// Systolic crisis level (mmHg)
    pub systolic_crisis: u32,
    /// Diastolic crisis level (mmHg)
    pub diastolic_crisis: u32,
    /// Fasting glucose alert level (mg/dL)
    pub glucose_alert_mg_dl: f64,
    /// Resting heart rate alert, strictly above (bpm)
    pub resting_hr_alert: u32,
}

impl Default for VitalThresholds {
    fn default() -> Self {
        Self {
            systolic_alert: 140,
            diastolic_alert: 90,
            systolic_crisis: 180,
            diastolic_crisis: 120,
            glucose_alert_mg_dl: 126.0,
            resting_hr_alert: 100,
        }
    }
}
