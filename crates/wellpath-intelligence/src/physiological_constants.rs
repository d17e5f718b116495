// ABOUTME: Clinical breakpoints used by the metrics calculator and the risk rule tables
// ABOUTME: Heart rate, BMI, blood pressure, glucose, cholesterol, age, and sleep constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellpath Contributors

//! Physiological constants
//!
//! Breakpoints that define clinical categories. They are part of the scoring
//! contract and therefore not configurable.

/// Heart rate constants
pub mod heart_rate {
    /// Tanaka intercept (bpm)
    ///
    /// Reference: Tanaka, H. et al. (2001). "Age-predicted maximal heart rate revisited."
    /// *J Am Coll Cardiol*, 37(1), 153-156.
    pub const TANAKA_INTERCEPT: f64 = 208.0;

    /// Tanaka age coefficient (bpm per year)
    pub const TANAKA_AGE_COEFFICIENT: f64 = 0.7;

    /// Labels of the five Karvonen zones, lowest first
    pub const ZONE_LABELS: [&str; 5] = ["Very Light", "Light", "Moderate", "Hard", "Maximum"];
}

/// BMI category breakpoints (kg/m²), each the exclusive upper bound of its category
pub mod bmi {
    /// Underweight below this
    pub const UNDERWEIGHT_BELOW: f64 = 18.5;
    /// Normal below this
    pub const NORMAL_BELOW: f64 = 25.0;
    /// Overweight below this
    pub const OVERWEIGHT_BELOW: f64 = 30.0;
    /// Obese class I below this
    pub const OBESE_I_BELOW: f64 = 35.0;
    /// Obese class II below this; class III at or above
    pub const OBESE_II_BELOW: f64 = 40.0;
}

/// Blood pressure brackets (mmHg), matched when systolic OR diastolic reaches them
pub mod blood_pressure {
    /// Stage 2 hypertension
    pub const STAGE_2: (u32, u32) = (140, 90);
    /// Stage 1 hypertension
    pub const STAGE_1: (u32, u32) = (130, 85);
    /// Elevated
    pub const ELEVATED: (u32, u32) = (120, 80);
}

/// Fasting glucose brackets (mg/dL)
pub mod glucose {
    /// Diabetic range, at or above
    pub const DIABETIC_MIN: f64 = 126.0;
    /// Prediabetic range, at or above
    pub const PREDIABETIC_MIN: f64 = 100.0;
}

/// Lipid panel brackets (mg/dL)
pub mod cholesterol {
    /// High total cholesterol, strictly above
    pub const HIGH_TOTAL_ABOVE: f64 = 240.0;
    /// Borderline total cholesterol, strictly above
    pub const BORDERLINE_TOTAL_ABOVE: f64 = 200.0;
    /// Low HDL, strictly below
    pub const LOW_HDL_BELOW: f64 = 40.0;
    /// Protective HDL, strictly above
    pub const PROTECTIVE_HDL_ABOVE: f64 = 60.0;
}

/// Age brackets (years), each matched strictly above
pub mod age {
    /// Oldest bracket
    pub const OVER_65: u32 = 65;
    /// Second bracket
    pub const OVER_55: u32 = 55;
    /// Third bracket
    pub const OVER_45: u32 = 45;
    /// Youngest bracket
    pub const OVER_35: u32 = 35;
}

/// Self-reported sleep
pub mod sleep {
    /// Short habitual sleep, strictly below (hours)
    pub const SHORT_SLEEP_HOURS: f64 = 6.0;
}
