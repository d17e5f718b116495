// ABOUTME: Anthropometric and cardiovascular metrics: BMI, BMR, TDEE, and heart-rate zones
// ABOUTME: Validated pure functions parameterized by the metrics configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellpath Contributors

//! # Body Metrics
//!
//! - BMI: `weight / (height_m)^2`, one decimal
//! - BMR: Mifflin-St Jeor (1990). Mifflin, M.D., et al. "A new predictive
//!   equation for resting energy expenditure." *Am J Clin Nutr*, 51(2), 241-247.
//! - TDEE: BMR x activity multiplier
//! - Heart-rate zones: Karvonen, K.J. et al. (1957) heart-rate reserve method
//!   on top of the Tanaka maximum heart rate

use crate::algorithms::MaxHrAlgorithm;
use crate::config::intelligence::{
    ActivityFactorsConfig, BmrConfig, HeartRateZoneConfig, MetricsConfig,
};
use crate::physiological_constants::{bmi as bmi_bounds, heart_rate::ZONE_LABELS};
use crate::statistics::round_to;
use tracing::{debug, warn};
use wellpath_core::constants::conversions::CM_PER_METER;
use wellpath_core::errors::{AppError, AppResult};
use wellpath_core::models::{
    ActivityLevel, BmiCategory, BodyMetrics, Gender, HealthProfile, HeartRateZone,
};

fn validate_body(weight_kg: f64, height_cm: f64) -> AppResult<()> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(
            AppError::invalid_input("Weight must be a positive number of kilograms")
                .with_field("weight_kg"),
        );
    }
    if !height_cm.is_finite() || height_cm <= 0.0 {
        return Err(
            AppError::invalid_input("Height must be a positive number of centimetres")
                .with_field("height_cm"),
        );
    }
    Ok(())
}

/// Body mass index rounded to one decimal
///
/// # Errors
///
/// Returns a validation error when weight or height is not a positive finite number
///
/// ```rust
/// use wellpath_intelligence::metrics::calculate_bmi;
///
/// assert!((calculate_bmi(70.0, 175.0).unwrap() - 22.9).abs() < 1e-9);
/// ```
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> AppResult<f64> {
    validate_body(weight_kg, height_cm)?;
    let height_m = height_cm / CM_PER_METER;
    Ok(round_to(weight_kg / (height_m * height_m), 1))
}

/// Classify a BMI value
#[must_use]
pub fn bmi_category(bmi: f64) -> BmiCategory {
    if bmi < bmi_bounds::UNDERWEIGHT_BELOW {
        BmiCategory::Underweight
    } else if bmi < bmi_bounds::NORMAL_BELOW {
        BmiCategory::Normal
    } else if bmi < bmi_bounds::OVERWEIGHT_BELOW {
        BmiCategory::Overweight
    } else if bmi < bmi_bounds::OBESE_I_BELOW {
        BmiCategory::ObeseI
    } else if bmi < bmi_bounds::OBESE_II_BELOW {
        BmiCategory::ObeseII
    } else {
        BmiCategory::ObeseIII
    }
}

/// Basal metabolic rate (kcal/day) using Mifflin-St Jeor
///
/// `Gender::Other` uses the mean of the male and female equations.
///
/// # Errors
///
/// Returns a validation error for non-positive inputs or when the equation
/// yields a non-positive rate
pub fn calculate_bmr(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: Gender,
    config: &BmrConfig,
) -> AppResult<u32> {
    validate_body(weight_kg, height_cm)?;
    if age == 0 {
        return Err(AppError::invalid_input("Age must be greater than 0").with_field("age"));
    }

    let base = config.age_coef.mul_add(
        f64::from(age),
        config
            .weight_coef
            .mul_add(weight_kg, config.height_coef * height_cm),
    );
    let gender_constant = match gender {
        Gender::Male => config.male_constant,
        Gender::Female => config.female_constant,
        Gender::Other => (config.male_constant + config.female_constant) / 2.0,
    };

    let bmr = (base + gender_constant).round();
    if bmr <= 0.0 {
        return Err(AppError::out_of_range(
            "bmr",
            format!("Mifflin-St Jeor produced a non-positive rate ({bmr}) for these inputs"),
        ));
    }
    Ok(bmr as u32)
}

/// Total daily energy expenditure (kcal/day)
///
/// # Errors
///
/// Returns a validation error when `bmr` is zero
pub fn calculate_tdee(
    bmr: u32,
    activity_level: ActivityLevel,
    config: &ActivityFactorsConfig,
) -> AppResult<u32> {
    if bmr == 0 {
        return Err(AppError::invalid_input("BMR must be greater than 0").with_field("bmr"));
    }

    let multiplier = match activity_level {
        ActivityLevel::Sedentary => config.sedentary,
        ActivityLevel::Light => config.light,
        ActivityLevel::Moderate => config.moderate,
        ActivityLevel::Active => config.active,
        ActivityLevel::VeryActive => config.very_active,
    };
    Ok((f64::from(bmr) * multiplier).round() as u32)
}

/// Karvonen heart-rate zones over the Tanaka maximum
///
/// # Errors
///
/// Returns a validation error when age or resting heart rate is zero, or
/// when the resting heart rate is not below the estimated maximum
pub fn calculate_heart_rate_zones(
    age: u32,
    resting_hr: u32,
    config: &HeartRateZoneConfig,
) -> AppResult<Vec<HeartRateZone>> {
    let max_hr = MaxHrAlgorithm::Tanaka.estimate(age)?;
    if resting_hr == 0 {
        return Err(AppError::out_of_range(
            "resting_heart_rate",
            "Resting heart rate must be greater than 0",
        ));
    }
    let resting = f64::from(resting_hr);
    if resting >= max_hr {
        return Err(AppError::out_of_range(
            "resting_heart_rate",
            format!(
                "Resting heart rate {resting_hr} must be below the estimated maximum of {max_hr:.0}"
            ),
        ));
    }

    let reserve = max_hr - resting;
    let bpm_at = |fraction: f64| reserve.mul_add(fraction, resting).round() as u32;

    Ok(config
        .bounds
        .windows(2)
        .zip(ZONE_LABELS)
        .enumerate()
        .map(|(index, (bounds, label))| HeartRateZone {
            zone: index as u8 + 1,
            label: label.to_owned(),
            min_percent: bounds[0],
            max_percent: bounds[1],
            min_bpm: bpm_at(bounds[0]),
            max_bpm: bpm_at(bounds[1]),
        })
        .collect())
}

fn zones_for(
    profile: &HealthProfile,
    config: &MetricsConfig,
) -> AppResult<(Option<u32>, Option<Vec<HeartRateZone>>)> {
    let Some(reading) = profile.latest_heart_rate() else {
        return Ok((None, None));
    };
    let zones = calculate_heart_rate_zones(profile.age, reading.value, &config.heart_rate_zones)?;
    let max_hr = MaxHrAlgorithm::Tanaka.estimate(profile.age)?.round() as u32;
    Ok((Some(max_hr), Some(zones)))
}

fn assemble(
    profile: &HealthProfile,
    activity_level: ActivityLevel,
    config: &MetricsConfig,
    (max_heart_rate, heart_rate_zones): (Option<u32>, Option<Vec<HeartRateZone>>),
) -> AppResult<BodyMetrics> {
    let bmi = calculate_bmi(profile.weight_kg, profile.height_cm)?;
    let bmr = calculate_bmr(
        profile.weight_kg,
        profile.height_cm,
        profile.age,
        profile.gender,
        &config.bmr,
    )?;
    let tdee = calculate_tdee(bmr, activity_level, &config.activity_factors)?;

    debug!(
        bmi,
        bmr,
        tdee,
        zones = heart_rate_zones.is_some(),
        "Computed body metrics"
    );

    Ok(BodyMetrics {
        bmi,
        bmi_category: bmi_category(bmi),
        bmr,
        tdee,
        activity_level,
        max_heart_rate,
        heart_rate_zones,
    })
}

/// Compute the full metrics bundle with explicit configuration
///
/// Zones use the latest resting heart rate and are omitted when the series is
/// empty. An invalid resting heart rate is an error.
///
/// # Errors
///
/// Returns a validation error for an invalid profile or resting heart rate
pub fn compute_metrics_with_config(
    profile: &HealthProfile,
    activity_level: ActivityLevel,
    config: &MetricsConfig,
) -> AppResult<BodyMetrics> {
    profile.validate()?;
    let zones = zones_for(profile, config)?;
    assemble(profile, activity_level, config, zones)
}

/// Metrics bundle for a full assessment
///
/// Only the profile itself (age, height, weight) is fatal here. A resting
/// heart rate the zones cannot be built from leaves `max_heart_rate` and
/// `heart_rate_zones` empty and is logged.
///
/// # Errors
///
/// Returns a validation error for an invalid profile
pub fn compute_assessment_metrics(
    profile: &HealthProfile,
    activity_level: ActivityLevel,
    config: &MetricsConfig,
) -> AppResult<BodyMetrics> {
    profile.validate()?;
    let zones = zones_for(profile, config).unwrap_or_else(|error| {
        warn!(
            field = error.context.field.as_deref().unwrap_or("resting_heart_rate"),
            error = %error.message,
            "Skipping heart-rate zones"
        );
        (None, None)
    });
    assemble(profile, activity_level, config, zones)
}
