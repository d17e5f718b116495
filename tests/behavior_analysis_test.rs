// ABOUTME: Tests for sleep, exercise, medication adherence, and nutrition behavior analysis
// ABOUTME: Covers sub-score weighting, triggered observations, truncation, and category skipping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellpath Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use wellpath::behavior_analysis::observation_keys;
use wellpath::config::intelligence::BehaviorConfig;
use wellpath::models::{
    AdherenceEntry, BehaviorCategory, BehaviorLog, ExerciseIntensity, Sentiment, SleepEntry,
};
use wellpath::BehaviorAnalyzer;

mod common;

fn analyzer() -> BehaviorAnalyzer {
    BehaviorAnalyzer::with_config(BehaviorConfig::default())
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 0.05,
        "expected {expected}, got {actual}"
    );
}

// ============================================================================
// Sleep
// ============================================================================

#[test]
fn test_steady_sleep_scores_perfect() {
    let insight = analyzer()
        .analyze_sleep(&common::steady_sleep(&[8.0; 7], 8))
        .unwrap();

    assert_eq!(insight.category, BehaviorCategory::Sleep);
    assert_close(insight.score, 100.0);
    assert_eq!(insight.sentiment, Sentiment::Positive);
    assert_eq!(insight.sample_count, 7);
    assert!(insight.suggestions.is_empty());
    assert_eq!(insight.observations.len(), 2);
    assert!(insight.adherence_ratio.is_none());
}

#[test]
fn test_short_poor_sleep_triggers_observations() {
    let insight = analyzer()
        .analyze_sleep(&common::steady_sleep(&[5.0; 7], 4))
        .unwrap();

    // 0.4 * 1/3 duration + 0.3 regularity + 0.15 bedtime + 0.15 wake
    assert_close(insight.score, 73.3);
    assert_eq!(insight.sentiment, Sentiment::Neutral);
    assert_eq!(insight.observations.len(), 2);
    assert!(insight.observations[0].contains(observation_keys::SLEEP_SHORT));
    assert!(insight.observations[1].contains(observation_keys::SLEEP_QUALITY_LOW));
    assert_eq!(insight.suggestions.len(), 2);
}

#[test]
fn test_sleep_without_timing_uses_quality_for_timing_scores() {
    let entries: Vec<SleepEntry> = (0..5)
        .map(|offset| SleepEntry {
            date: common::day(offset),
            hours_slept: 4.0,
            quality: 2,
            bedtime: None,
            wake_time: None,
        })
        .collect();
    let insight = analyzer().analyze_sleep(&entries).unwrap();

    // 0 duration + 0.3 regularity + 0.3 * (1/9) quality
    assert_close(insight.score, 33.3);
    assert_eq!(insight.sentiment, Sentiment::Negative);
}

#[test]
fn test_sleep_observations_truncate_to_four() {
    let entries: Vec<SleepEntry> = [2.0, 7.0, 2.0, 7.0, 2.0, 7.0]
        .iter()
        .zip(0_i64..)
        .map(|(hours, offset)| SleepEntry {
            date: common::day(offset),
            hours_slept: *hours,
            quality: 2,
            bedtime: Some(if offset % 2 == 0 {
                common::time(20, 0)
            } else {
                common::time(2, 0)
            }),
            wake_time: Some(if offset % 2 == 0 {
                common::time(5, 0)
            } else {
                common::time(11, 0)
            }),
        })
        .collect();
    let insight = analyzer().analyze_sleep(&entries).unwrap();

    assert_eq!(insight.observations.len(), 4);
    assert_eq!(insight.suggestions.len(), 4);
    assert!(insight.observations[0].contains(observation_keys::SLEEP_SHORT));
    assert!(insight.observations[1].contains(observation_keys::SLEEP_IRREGULAR));
    assert!(insight.observations[2].contains(observation_keys::BEDTIME_INCONSISTENT));
    assert!(insight.observations[3].contains(observation_keys::WAKE_INCONSISTENT));
}

#[test]
fn test_bedtimes_across_midnight_stay_consistent() {
    let entries: Vec<SleepEntry> = (0..6)
        .map(|offset| SleepEntry {
            date: common::day(offset),
            hours_slept: 8.0,
            quality: 8,
            bedtime: Some(if offset % 2 == 0 {
                common::time(23, 45)
            } else {
                common::time(0, 15)
            }),
            wake_time: Some(common::time(8, 0)),
        })
        .collect();
    let insight = analyzer().analyze_sleep(&entries).unwrap();

    assert!(insight
        .observations
        .iter()
        .all(|observation| !observation.contains(observation_keys::BEDTIME_INCONSISTENT)));
    assert_eq!(insight.sentiment, Sentiment::Positive);
}

// ============================================================================
// Exercise
// ============================================================================

#[test]
fn test_regular_moderate_exercise_scores_perfect() {
    let insight = analyzer()
        .analyze_exercise(&common::exercise_on(&[0, 1, 2, 3, 4], ExerciseIntensity::Moderate))
        .unwrap();

    assert_close(insight.score, 100.0);
    assert_eq!(insight.sentiment, Sentiment::Positive);
    assert!(insight.suggestions.is_empty());
}

#[test]
fn test_sparse_easy_exercise_is_negative() {
    let insight = analyzer()
        .analyze_exercise(&common::exercise_on(&[0, 14], ExerciseIntensity::Low))
        .unwrap();

    // 0.5 * (0.93 / 5) frequency + 0 intensity + 0.25 * 2/3 consistency
    assert_close(insight.score, 26.0);
    assert_eq!(insight.sentiment, Sentiment::Negative);
    assert_eq!(insight.observations.len(), 3);
    assert!(insight.observations[0].contains(observation_keys::EXERCISE_INFREQUENT));
    assert!(insight.observations[1].contains(observation_keys::EXERCISE_LOW_INTENSITY));
    assert!(insight.observations[2].contains(observation_keys::EXERCISE_GAPS));
}

#[test]
fn test_daily_hard_sessions_flag_overtraining() {
    let days: Vec<i64> = (0..14).collect();
    let insight = analyzer()
        .analyze_exercise(&common::exercise_on(&days, ExerciseIntensity::High))
        .unwrap();

    assert!(insight.observations[0].contains(observation_keys::EXERCISE_OVERTRAINING));
    assert_eq!(insight.suggestions.len(), 1);
}

#[test]
fn test_short_exercise_window_uses_minimum_days() {
    // Three sessions inside two days still count against a full week
    let insight = analyzer()
        .analyze_exercise(&common::exercise_on(&[0, 0, 1], ExerciseIntensity::Moderate))
        .unwrap();
    assert!(!insight.observations[0].contains(observation_keys::EXERCISE_INFREQUENT));
    // 3 sessions per 7 days: 0.5 * 0.6 + 0.25 + 0.25
    assert_close(insight.score, 80.0);
}

// ============================================================================
// Medication adherence
// ============================================================================

#[test]
fn test_low_adherence_reports_ratio_and_observations() {
    let insight = analyzer()
        .analyze_medication(&common::doses(&[
            true, true, true, false, true, false, true, false, true, false,
        ]))
        .unwrap();

    assert_eq!(insight.category, BehaviorCategory::Medication);
    assert_close(insight.adherence_ratio.unwrap(), 0.6);
    assert_eq!(insight.sample_count, 10);
    assert!(insight.observations[0].contains(observation_keys::ADHERENCE_LOW));
    assert!(insight.observations[1].contains(observation_keys::ADHERENCE_DECLINING));
}

#[test]
fn test_missed_dose_streak_is_reported() {
    let insight = analyzer()
        .analyze_medication(&common::doses(&[
            true, true, true, true, false, false, false, true, true, true,
        ]))
        .unwrap();

    let streak = insight
        .observations
        .iter()
        .find(|observation| observation.contains(observation_keys::ADHERENCE_STREAK))
        .unwrap();
    assert!(streak.contains("Missed 3"));
    assert_eq!(insight.suggestions.len(), 3);
}

#[test]
fn test_perfect_adherence_is_positive() {
    let insight = analyzer()
        .analyze_medication(&common::doses(&[true; 10]))
        .unwrap();
    assert_close(insight.score, 100.0);
    assert_eq!(insight.sentiment, Sentiment::Positive);
    assert_close(insight.adherence_ratio.unwrap(), 1.0);
}

#[test]
fn test_unscheduled_doses_are_ignored() {
    let entries = vec![AdherenceEntry {
        date: common::day(0),
        medication_id: None,
        scheduled: false,
        taken_as_scheduled: false,
    }];
    assert!(analyzer().analyze_medication(&entries).is_none());
}

#[test]
fn test_adherence_uses_date_order() {
    let mut entries = common::doses(&[false, false, false, true, true, true, true]);
    entries.reverse();
    let insight = analyzer().analyze_medication(&entries).unwrap();
    assert!(insight
        .observations
        .iter()
        .any(|observation| observation.contains(observation_keys::ADHERENCE_STREAK)));
}

// ============================================================================
// Nutrition
// ============================================================================

#[test]
fn test_balanced_nutrition_scores_perfect() {
    let insight = analyzer()
        .analyze_nutrition(&common::nutrition(7, 64.0, 3))
        .unwrap();
    assert_close(insight.score, 100.0);
    assert_eq!(insight.sentiment, Sentiment::Positive);
}

#[test]
fn test_low_water_and_few_meals() {
    let insight = analyzer()
        .analyze_nutrition(&common::nutrition(7, 32.0, 2))
        .unwrap();

    // 0.4 * 0.5 hydration + 0.4 * 0.5 meals + 0.2 regularity
    assert_close(insight.score, 60.0);
    assert!(insight.observations[0].contains(observation_keys::WATER_LOW));
    assert!(insight.observations[1].contains(observation_keys::MEALS_FEW));
}

#[test]
fn test_excessive_meals() {
    let insight = analyzer()
        .analyze_nutrition(&common::nutrition(5, 80.0, 6))
        .unwrap();
    assert!(insight.observations[0].contains(observation_keys::MEALS_MANY));
}

// ============================================================================
// Whole log
// ============================================================================

#[test]
fn test_analyze_skips_empty_categories_and_keeps_order() {
    let log = BehaviorLog {
        sleep: common::steady_sleep(&[7.5; 5], 7),
        nutrition: common::nutrition(5, 64.0, 3),
        ..BehaviorLog::default()
    };
    let insights = analyzer().analyze(&log);
    let categories: Vec<BehaviorCategory> =
        insights.iter().map(|insight| insight.category).collect();
    assert_eq!(
        categories,
        vec![BehaviorCategory::Sleep, BehaviorCategory::Nutrition]
    );

    assert!(analyzer().analyze(&BehaviorLog::default()).is_empty());
}

#[test]
fn test_observation_and_score_bounds() {
    let log = BehaviorLog {
        sleep: common::steady_sleep(&[3.0, 13.0, 6.0], 1),
        exercise: common::exercise_on(&[0, 30], ExerciseIntensity::Low),
        medication_adherence: common::doses(&[false; 5]),
        nutrition: common::nutrition(3, 0.0, 0),
    };
    for insight in analyzer().analyze(&log) {
        assert!((0.0..=100.0).contains(&insight.score));
        assert!((2..=4).contains(&insight.observations.len()));
        assert!(insight.suggestions.len() <= 4);
    }
}
