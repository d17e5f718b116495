// ABOUTME: Tests for BMI, BMR, TDEE, and heart-rate zone calculations
// ABOUTME: Covers formula values, category breakpoints, zone layout, and input validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellpath Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use wellpath::algorithms::MaxHrAlgorithm;
use wellpath::config::intelligence::{
    ActivityFactorsConfig, BmrConfig, HeartRateZoneConfig, MetricsConfig,
};
use wellpath::errors::ErrorCode;
use wellpath::metrics::{
    bmi_category, calculate_bmi, calculate_bmr, calculate_heart_rate_zones, calculate_tdee,
    compute_assessment_metrics, compute_metrics_with_config,
};
use wellpath::models::{ActivityLevel, BmiCategory, Gender};

mod common;

// ============================================================================
// BMI
// ============================================================================

#[test]
fn test_bmi_reference_value() {
    let bmi = calculate_bmi(70.0, 175.0).unwrap();
    assert!((bmi - 22.9).abs() < 1e-9, "BMI should be 22.9, got {bmi}");
    assert_eq!(bmi_category(bmi), BmiCategory::Normal);
}

#[test]
fn test_bmi_increases_with_weight_and_decreases_with_height() {
    let base = calculate_bmi(70.0, 175.0).unwrap();
    assert!(calculate_bmi(80.0, 175.0).unwrap() > base);
    assert!(calculate_bmi(70.0, 185.0).unwrap() < base);
}

#[test]
fn test_bmi_rejects_non_positive_inputs() {
    let error = calculate_bmi(0.0, 175.0).unwrap_err();
    assert!(error.is_validation());
    assert_eq!(error.context.field.as_deref(), Some("weight_kg"));

    let error = calculate_bmi(70.0, -1.0).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert_eq!(error.context.field.as_deref(), Some("height_cm"));

    assert!(calculate_bmi(f64::NAN, 175.0).is_err());
}

#[test]
fn test_bmi_category_breakpoints() {
    assert_eq!(bmi_category(18.4), BmiCategory::Underweight);
    assert_eq!(bmi_category(18.5), BmiCategory::Normal);
    assert_eq!(bmi_category(24.9), BmiCategory::Normal);
    assert_eq!(bmi_category(25.0), BmiCategory::Overweight);
    assert_eq!(bmi_category(29.9), BmiCategory::Overweight);
    assert_eq!(bmi_category(30.0), BmiCategory::ObeseI);
    assert_eq!(bmi_category(35.0), BmiCategory::ObeseII);
    assert_eq!(bmi_category(40.0), BmiCategory::ObeseIII);
}

// ============================================================================
// BMR - Mifflin-St Jeor
// ============================================================================

#[test]
fn test_bmr_male_reference() {
    // 10 * 70 + 6.25 * 175 - 5 * 30 + 5 = 1648.75
    let bmr = calculate_bmr(70.0, 175.0, 30, Gender::Male, &BmrConfig::default()).unwrap();
    assert_eq!(bmr, 1649);
}

#[test]
fn test_bmr_female_and_other() {
    let config = BmrConfig::default();
    // 1643.75 - 161 = 1482.75
    assert_eq!(calculate_bmr(70.0, 175.0, 30, Gender::Female, &config).unwrap(), 1483);
    // 1643.75 - 78 = 1565.75
    assert_eq!(calculate_bmr(70.0, 175.0, 30, Gender::Other, &config).unwrap(), 1566);
}

#[test]
fn test_bmr_rejects_zero_age() {
    let error = calculate_bmr(70.0, 175.0, 0, Gender::Male, &BmrConfig::default()).unwrap_err();
    assert!(error.is_validation());
    assert_eq!(error.context.field.as_deref(), Some("age"));
}

#[test]
fn test_bmr_non_positive_result_is_out_of_range() {
    let error = calculate_bmr(1.0, 1.0, 120, Gender::Female, &BmrConfig::default()).unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    assert_eq!(error.context.field.as_deref(), Some("bmr"));
}

// ============================================================================
// TDEE
// ============================================================================

#[test]
fn test_tdee_activity_multipliers() {
    let factors = ActivityFactorsConfig::default();
    assert_eq!(calculate_tdee(1649, ActivityLevel::Sedentary, &factors).unwrap(), 1979);
    assert_eq!(calculate_tdee(1649, ActivityLevel::Moderate, &factors).unwrap(), 2556);
    assert_eq!(calculate_tdee(1649, ActivityLevel::VeryActive, &factors).unwrap(), 3133);
}

#[test]
fn test_tdee_rejects_zero_bmr() {
    let error =
        calculate_tdee(0, ActivityLevel::Light, &ActivityFactorsConfig::default()).unwrap_err();
    assert!(error.is_validation());
}

// ============================================================================
// Heart-rate zones
// ============================================================================

#[test]
fn test_tanaka_max_heart_rate() {
    let max_hr = MaxHrAlgorithm::Tanaka.estimate(30).unwrap();
    assert!((max_hr - 187.0).abs() < 1e-9);
    assert!(MaxHrAlgorithm::Tanaka.estimate(0).is_err());
}

#[test]
fn test_heart_rate_zones_layout() {
    let zones = calculate_heart_rate_zones(30, 60, &HeartRateZoneConfig::default()).unwrap();

    assert_eq!(zones.len(), 5);
    for (index, zone) in zones.iter().enumerate() {
        assert_eq!(usize::from(zone.zone), index + 1);
        assert!(zone.min_bpm < zone.max_bpm);
    }
    for pair in zones.windows(2) {
        assert_eq!(pair[0].max_bpm, pair[1].min_bpm, "zones should be contiguous");
    }

    // Reserve 187 - 60 = 127; 60 + 0.5 * 127 = 123.5
    assert_eq!(zones[0].min_bpm, 124);
    assert_eq!(zones[4].max_bpm, 187);
    assert_eq!(zones[0].label, "Very Light");
    assert_eq!(zones[4].label, "Maximum");
}

#[test]
fn test_heart_rate_zones_reject_invalid_resting_rate() {
    let config = HeartRateZoneConfig::default();

    let error = calculate_heart_rate_zones(30, 0, &config).unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);

    let error = calculate_heart_rate_zones(30, 187, &config).unwrap_err();
    assert_eq!(error.context.field.as_deref(), Some("resting_heart_rate"));
}

// ============================================================================
// Metrics bundle
// ============================================================================

#[test]
fn test_metrics_without_heart_rate_omit_zones() {
    let profile = common::profile(30, Gender::Male, 175.0, 70.0);
    let metrics =
        compute_metrics_with_config(&profile, ActivityLevel::Moderate, &MetricsConfig::default())
            .unwrap();

    assert_eq!(metrics.bmr, 1649);
    assert_eq!(metrics.tdee, 2556);
    assert_eq!(metrics.bmi_category, BmiCategory::Normal);
    assert!(metrics.max_heart_rate.is_none());
    assert!(metrics.heart_rate_zones.is_none());
}

#[test]
fn test_metrics_with_heart_rate_include_zones() {
    let profile =
        common::with_resting_heart_rate(common::profile(30, Gender::Male, 175.0, 70.0), 60);
    let metrics =
        compute_metrics_with_config(&profile, ActivityLevel::Active, &MetricsConfig::default())
            .unwrap();

    assert_eq!(metrics.max_heart_rate, Some(187));
    assert_eq!(metrics.heart_rate_zones.map(|zones| zones.len()), Some(5));
}

#[test]
fn test_metrics_invalid_resting_rate_fails() {
    let profile =
        common::with_resting_heart_rate(common::profile(30, Gender::Male, 175.0, 70.0), 200);
    let result =
        compute_metrics_with_config(&profile, ActivityLevel::Active, &MetricsConfig::default());
    assert!(result.unwrap_err().is_validation());
}

#[test]
fn test_assessment_metrics_drop_zones_for_invalid_resting_rate() {
    let profile =
        common::with_resting_heart_rate(common::profile(30, Gender::Male, 175.0, 70.0), 200);
    let metrics =
        compute_assessment_metrics(&profile, ActivityLevel::Active, &MetricsConfig::default())
            .unwrap();

    assert_eq!(metrics.bmr, 1649);
    assert!(metrics.max_heart_rate.is_none());
    assert!(metrics.heart_rate_zones.is_none());
}

#[test]
fn test_assessment_metrics_still_reject_invalid_profile() {
    let profile = common::profile(30, Gender::Male, 175.0, 0.0);
    let error =
        compute_assessment_metrics(&profile, ActivityLevel::Active, &MetricsConfig::default())
            .unwrap_err();
    assert!(error.is_validation());
}
