// ABOUTME: Body metrics configuration for BMR, TDEE, and heart-rate zone calculation
// ABOUTME: Mifflin-St Jeor coefficients, activity multipliers, and Karvonen zone bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellpath Contributors

//! Metrics Configuration
//!
//! Coefficients for the anthropometric calculations. Defaults reproduce the
//! published formulas exactly.

use serde::{Deserialize, Serialize};

/// Metrics Configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// Mifflin-St Jeor coefficients
    pub bmr: BmrConfig,
    /// TDEE activity multipliers
    pub activity_factors: ActivityFactorsConfig,
    /// Karvonen zone bounds
    pub heart_rate_zones: HeartRateZoneConfig,
}

/// Mifflin-St Jeor BMR coefficients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Weight coefficient (kcal per kg)
    pub weight_coef: f64,
    /// Height coefficient (kcal per cm)
    pub height_coef: f64,
    /// Age coefficient (kcal per year, negative)
    pub age_coef: f64,
    /// Constant added for males
    pub male_constant: f64,
    /// Constant added for females
    pub female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            weight_coef: 10.0,
            height_coef: 6.25,
            age_coef: -5.0,
            male_constant: 5.0,
            female_constant: -161.0,
        }
    }
}

/// Activity factors for TDEE calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Little or no exercise
    pub sedentary: f64,
    /// Light exercise 1-3 days/week
    pub light: f64,
    /// Moderate exercise 3-5 days/week
    pub moderate: f64,
    /// Hard exercise 6-7 days/week
    pub active: f64,
    /// Very hard exercise or a physical job
    pub very_active: f64,
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            light: 1.375,
            moderate: 1.55,
            active: 1.725,
            very_active: 1.9,
        }
    }
}

/// Karvonen zone boundaries as fractions of heart-rate reserve
///
/// Zone `n` spans `bounds[n - 1]..=bounds[n]`, so five zones need six bounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeartRateZoneConfig {
    /// Ascending bounds from zone 1 minimum to zone 5 maximum
    pub bounds: [f64; 6],
}

impl Default for HeartRateZoneConfig {
    fn default() -> Self {
        Self {
            bounds: [0.5, 0.6, 0.7, 0.8, 0.9, 1.0],
        }
    }
}
