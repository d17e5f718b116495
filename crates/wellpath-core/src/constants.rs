// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for risk levels, sentiment, conversions, and service identity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellpath Contributors

//! Constants module
//!
//! Contract-level constants shared by the data model and the engine. Tunable
//! clinical thresholds live in the engine configuration instead.

/// Risk-level thresholds, identical for every condition
pub mod risk_levels {
    /// Lowest score classified as moderate
    pub const MODERATE_MIN_SCORE: u8 = 20;
    /// Lowest score classified as high
    pub const HIGH_MIN_SCORE: u8 = 40;
    /// Lowest score classified as very high
    pub const VERY_HIGH_MIN_SCORE: u8 = 60;
    /// Upper clamp for every score
    pub const MAX_SCORE: i32 = 100;
}

/// Behavior sentiment thresholds
pub mod sentiment {
    /// Scores at or above this are positive
    pub const POSITIVE_MIN_SCORE: f64 = 75.0;
    /// Scores below this are negative
    pub const NEGATIVE_BELOW_SCORE: f64 = 50.0;
}

/// Unit conversions
pub mod conversions {
    /// mmol/L to mg/dL for glucose
    pub const GLUCOSE_MMOL_TO_MG_DL: f64 = 18.0;
    /// Centimetres per metre
    pub const CM_PER_METER: f64 = 100.0;
    /// Minutes per day
    pub const MINUTES_PER_DAY: i64 = 1440;
}

/// Service identity used in logs
pub mod service_names {
    /// Engine service name
    pub const WELLPATH_ENGINE: &str = "wellpath-engine";
    /// Command-line front end
    pub const WELLPATH_CLI: &str = "wellpath-cli";
}
