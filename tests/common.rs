// ABOUTME: Shared test fixtures for Wellpath integration tests
// ABOUTME: Builders for profiles, readings, behavior logs, and engines with default configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellpath Contributors

#![allow(dead_code)]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use wellpath::models::{
    AdherenceEntry, AssessmentRequest, BehaviorLog, BloodGlucoseReading, BloodPressureReading,
    CholesterolReading, ExerciseEntry, ExerciseIntensity, Gender, GlucoseUnit, HealthProfile,
    HeartRateReading, LifestyleProfile, NutritionEntry, SleepEntry,
};
use wellpath::{EngineConfig, HealthAssessmentEngine};

/// Fixed reference instant so tests never depend on the wall clock
pub fn timestamp(day_offset: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 3, 8, 0, 0).single().unwrap() + Duration::days(day_offset)
}

/// Monday 2025-03-03 plus `day_offset` days
pub fn day(day_offset: i64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 3).unwrap() + Duration::days(day_offset)
}

pub fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

pub fn profile(age: u32, gender: Gender, height_cm: f64, weight_kg: f64) -> HealthProfile {
    HealthProfile::new(age, gender, height_cm, weight_kg)
}

/// Healthy 30-year-old reference subject
pub fn healthy_profile() -> HealthProfile {
    profile(30, Gender::Female, 165.0, 58.0)
}

pub fn with_blood_pressure(
    mut profile: HealthProfile,
    systolic: u32,
    diastolic: u32,
) -> HealthProfile {
    profile.blood_pressure.push(BloodPressureReading {
        systolic,
        diastolic,
        timestamp: timestamp(0),
    });
    profile
}

pub fn with_glucose(mut profile: HealthProfile, mg_dl: f64) -> HealthProfile {
    profile.blood_glucose.push(BloodGlucoseReading {
        value: mg_dl,
        unit: GlucoseUnit::MgDl,
        timestamp: timestamp(0),
    });
    profile
}

pub fn with_cholesterol(mut profile: HealthProfile, total: f64, hdl: f64) -> HealthProfile {
    profile.cholesterol.push(CholesterolReading {
        total,
        hdl,
        ldl: total - hdl - 30.0,
        timestamp: timestamp(0),
    });
    profile
}

pub fn with_resting_heart_rate(mut profile: HealthProfile, bpm: u32) -> HealthProfile {
    profile.heart_rate.push(HeartRateReading {
        value: bpm,
        timestamp: timestamp(0),
    });
    profile
}

/// One nightly entry per element of `hours`, fixed bedtime and wake time
pub fn steady_sleep(hours: &[f64], quality: u8) -> Vec<SleepEntry> {
    hours
        .iter()
        .zip(0_i64..)
        .map(|(hours_slept, offset)| SleepEntry {
            date: day(offset),
            hours_slept: *hours_slept,
            quality,
            bedtime: Some(time(23, 0)),
            wake_time: Some(time(7, 0)),
        })
        .collect()
}

/// One session per listed day offset
pub fn exercise_on(days: &[i64], intensity: ExerciseIntensity) -> Vec<ExerciseEntry> {
    days.iter()
        .map(|offset| ExerciseEntry {
            date: day(*offset),
            intensity,
            duration_minutes: Some(40),
        })
        .collect()
}

/// One scheduled dose per element, in date order
pub fn doses(taken: &[bool]) -> Vec<AdherenceEntry> {
    taken
        .iter()
        .zip(0_i64..)
        .map(|(taken_as_scheduled, offset)| AdherenceEntry {
            date: day(offset),
            medication_id: Some("med-1".to_owned()),
            scheduled: true,
            taken_as_scheduled: *taken_as_scheduled,
        })
        .collect()
}

pub fn nutrition(days: i64, water_intake_oz: f64, meal_count: u32) -> Vec<NutritionEntry> {
    (0..days)
        .map(|offset| NutritionEntry {
            date: day(offset),
            water_intake_oz,
            meal_count,
        })
        .collect()
}

pub fn request(profile: HealthProfile) -> AssessmentRequest {
    AssessmentRequest {
        subject_id: None,
        profile,
        lifestyle: LifestyleProfile::default(),
        behavior_log: BehaviorLog::default(),
        medications: Vec::new(),
    }
}

/// Engine with the built-in defaults, independent of environment overrides
pub fn engine() -> HealthAssessmentEngine {
    HealthAssessmentEngine::with_config(EngineConfig::default())
}
