// ABOUTME: Maximum heart rate estimation using the Tanaka age-predicted formula
// ABOUTME: Single source of truth for max heart rate across the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellpath Contributors

use crate::physiological_constants::heart_rate::{TANAKA_AGE_COEFFICIENT, TANAKA_INTERCEPT};
use serde::{Deserialize, Serialize};
use wellpath_core::errors::{AppError, AppResult};

/// Maximum heart rate estimation algorithm
///
/// Only Tanaka is supported; zones, alerts, and reports all derive from it.
///
/// # Scientific References
///
/// - Tanaka, H. et al. (2001). "Age-predicted maximal heart rate revisited." *J Am Coll Cardiol*, 37(1), 153-156.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MaxHrAlgorithm {
    /// Tanaka formula: 208 - 0.7 x age
    ///
    /// Based on meta-analysis of 18,712 subjects
    /// Standard deviation: ±7-8 bpm
    #[default]
    Tanaka,
}

impl MaxHrAlgorithm {
    /// Estimate maximum heart rate from age
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if age is zero
    ///
    /// # Example
    ///
    /// ```rust
    /// use wellpath_intelligence::algorithms::MaxHrAlgorithm;
    ///
    /// let max_hr = MaxHrAlgorithm::Tanaka.estimate(40).unwrap();
    /// assert!((max_hr - 180.0).abs() < 1e-9);
    /// ```
    pub fn estimate(&self, age: u32) -> AppResult<f64> {
        if age == 0 {
            return Err(AppError::invalid_input("Age must be greater than 0").with_field("age"));
        }

        match self {
            Self::Tanaka => Ok(TANAKA_AGE_COEFFICIENT.mul_add(-f64::from(age), TANAKA_INTERCEPT)),
        }
    }

    /// Get the formula as a string
    #[must_use]
    pub const fn formula(&self) -> &'static str {
        match self {
            Self::Tanaka => "208 - 0.7 x age",
        }
    }
}
