// ABOUTME: Behavior insight analysis for sleep, exercise, medication adherence, and nutrition logs
// ABOUTME: Weighted sub-score model with triggered observations, positive fillers, and suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellpath Contributors

//! # Behavior Analysis
//!
//! Each category with data gets a 0-100 score, a weighted sum of sub-scores in
//! `[0, 1]`. Triggered observations come first in a fixed order and each has
//! exactly one suggestion; positive fillers pad short lists.

use crate::config::intelligence::{
    AdherenceTargets, BehaviorConfig, ExerciseTargets, NutritionTargets, ObservationLimits,
    SleepTargets,
};
use crate::config::EngineConfig;
use crate::statistics::{mean, round_to, std_dev, unit, unit_ratio};
use chrono::{NaiveTime, Timelike};
use std::collections::BTreeSet;
use tracing::debug;
use wellpath_core::constants::conversions::MINUTES_PER_DAY;
use wellpath_core::models::{
    AdherenceEntry, BehaviorCategory, BehaviorInsight, BehaviorLog, ExerciseEntry,
    ExerciseIntensity, NutritionEntry, Sentiment, SleepEntry,
};

/// Stable fragments of triggered observations, matched by the coaching lookup
pub mod observation_keys {
    /// Average sleep below the recommended range
    pub const SLEEP_SHORT: &str = "below the recommended";
    /// Average sleep above the recommended range
    pub const SLEEP_LONG: &str = "above the recommended";
    /// Night-to-night duration variability
    pub const SLEEP_IRREGULAR: &str = "varies considerably";
    /// Bedtime spread
    pub const BEDTIME_INCONSISTENT: &str = "Bedtime is inconsistent";
    /// Wake-time spread
    pub const WAKE_INCONSISTENT: &str = "Wake time is inconsistent";
    /// Low quality ratings
    pub const SLEEP_QUALITY_LOW: &str = "quality is low";
    /// Too few sessions
    pub const EXERCISE_INFREQUENT: &str = "sessions per week";
    /// Mostly low-intensity sessions
    pub const EXERCISE_LOW_INTENSITY: &str = "low intensity";
    /// Inactive weeks
    pub const EXERCISE_GAPS: &str = "long gaps";
    /// High-intensity volume without rest
    pub const EXERCISE_OVERTRAINING: &str = "time for recovery";
    /// Overall adherence below target
    pub const ADHERENCE_LOW: &str = "adherence target";
    /// Recent adherence below overall adherence
    pub const ADHERENCE_DECLINING: &str = "most recent doses";
    /// Run of missed doses
    pub const ADHERENCE_STREAK: &str = "in a row";
    /// Water below target
    pub const WATER_LOW: &str = "water intake";
    /// Too few meals
    pub const MEALS_FEW: &str = "fewer than";
    /// Too many meals
    pub const MEALS_MANY: &str = "more than";
    /// Meal count spread
    pub const MEALS_IRREGULAR: &str = "varies a lot";
}

use self::observation_keys::{
    ADHERENCE_DECLINING, ADHERENCE_LOW, ADHERENCE_STREAK, BEDTIME_INCONSISTENT, EXERCISE_GAPS,
    EXERCISE_INFREQUENT, EXERCISE_LOW_INTENSITY, EXERCISE_OVERTRAINING, MEALS_FEW,
    MEALS_IRREGULAR, MEALS_MANY, SLEEP_IRREGULAR, SLEEP_LONG, SLEEP_QUALITY_LOW, SLEEP_SHORT,
    WAKE_INCONSISTENT, WATER_LOW,
};

const MINUTES_AT_NOON: i64 = MINUTES_PER_DAY / 2;
const DAYS_PER_WEEK: i64 = 7;

/// Collects triggered observations and positive fillers for one category
struct ObservationSet<'a> {
    limits: &'a ObservationLimits,
    triggered: Vec<(String, &'static str)>,
    positives: Vec<String>,
}

impl<'a> ObservationSet<'a> {
    const fn new(limits: &'a ObservationLimits) -> Self {
        Self {
            limits,
            triggered: Vec::new(),
            positives: Vec::new(),
        }
    }

    fn trigger(&mut self, observation: String, suggestion: &'static str) {
        self.triggered.push((observation, suggestion));
    }

    fn positive(&mut self, observation: impl Into<String>) {
        self.positives.push(observation.into());
    }

    fn finish(mut self) -> (Vec<String>, Vec<String>) {
        self.triggered.truncate(self.limits.max_triggered);
        let (mut observations, suggestions): (Vec<String>, Vec<String>) = self
            .triggered
            .into_iter()
            .map(|(observation, suggestion)| (observation, suggestion.to_owned()))
            .unzip();

        let missing = self.limits.min_total.saturating_sub(observations.len());
        observations.extend(self.positives.into_iter().take(missing));
        (observations, suggestions)
    }
}

fn build_insight(
    category: BehaviorCategory,
    weighted: f64,
    observations: ObservationSet<'_>,
    adherence_ratio: Option<f64>,
    sample_count: usize,
) -> BehaviorInsight {
    let score = round_to(unit(weighted) * 100.0, 1);
    let (observations, suggestions) = observations.finish();
    BehaviorInsight {
        category,
        score,
        sentiment: Sentiment::from_score(score),
        observations,
        suggestions,
        adherence_ratio,
        sample_count,
    }
}

/// Minutes after noon, so late-evening and after-midnight bedtimes stay adjacent
fn minutes_from_noon(time: NaiveTime) -> f64 {
    let minutes = i64::from(time.num_seconds_from_midnight() / 60);
    (minutes - MINUTES_AT_NOON).rem_euclid(MINUTES_PER_DAY) as f64
}

fn minutes_from_midnight(time: NaiveTime) -> f64 {
    f64::from(time.num_seconds_from_midnight() / 60)
}

/// Behavior log analyzer
#[derive(Debug, Clone, Default)]
pub struct BehaviorAnalyzer {
    config: BehaviorConfig,
}

impl BehaviorAnalyzer {
    /// Analyzer using the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::global().behavior.clone())
    }

    /// Analyzer using an explicit configuration
    #[must_use]
    pub const fn with_config(config: BehaviorConfig) -> Self {
        Self { config }
    }

    /// Analyze every category that has data, in category order
    #[must_use]
    pub fn analyze(&self, log: &BehaviorLog) -> Vec<BehaviorInsight> {
        let insights: Vec<BehaviorInsight> = [
            self.analyze_sleep(&log.sleep),
            self.analyze_exercise(&log.exercise),
            self.analyze_medication(&log.medication_adherence),
            self.analyze_nutrition(&log.nutrition),
        ]
        .into_iter()
        .flatten()
        .collect();

        debug!(
            categories = insights.len(),
            negative = insights
                .iter()
                .filter(|insight| insight.sentiment == Sentiment::Negative)
                .count(),
            "Analyzed behavior log"
        );
        insights
    }

    /// Score sleep duration, regularity, timing, and quality
    #[must_use]
    pub fn analyze_sleep(&self, entries: &[SleepEntry]) -> Option<BehaviorInsight> {
        if entries.is_empty() {
            return None;
        }
        let targets: &SleepTargets = &self.config.sleep;

        let hours: Vec<f64> = entries.iter().map(|entry| entry.hours_slept).collect();
        let avg_hours = mean(&hours);
        let variability = unit_ratio(std_dev(&hours), targets.max_duration_std_dev_hours);

        let qualities: Vec<f64> = entries
            .iter()
            .map(|entry| f64::from(entry.quality.clamp(1, 10)))
            .collect();
        let avg_quality = mean(&qualities);
        let quality_score = unit((avg_quality - 1.0) / 9.0);

        let bedtimes: Vec<f64> = entries
            .iter()
            .filter_map(|entry| entry.bedtime.map(minutes_from_noon))
            .collect();
        let wake_times: Vec<f64> = entries
            .iter()
            .filter_map(|entry| entry.wake_time.map(minutes_from_midnight))
            .collect();
        let timing_consistency = |minutes: &[f64]| {
            if minutes.is_empty() {
                None
            } else {
                Some(1.0 - unit_ratio(std_dev(minutes), targets.max_timing_std_dev_minutes))
            }
        };
        let bedtime = timing_consistency(&bedtimes);
        let wake = timing_consistency(&wake_times);

        let weights = &targets.weights;
        let weighted = weights.wake.mul_add(
            wake.unwrap_or(quality_score),
            weights.bedtime.mul_add(
                bedtime.unwrap_or(quality_score),
                weights.duration.mul_add(
                    Self::sleep_duration_score(avg_hours, targets),
                    weights.regularity * (1.0 - variability),
                ),
            ),
        );

        let mut observations = ObservationSet::new(&self.config.observations);
        let min_hours = targets.min_hours;
        let max_hours = targets.max_hours;
        let short = avg_hours < min_hours;
        let long = avg_hours > max_hours;
        if short {
            observations.trigger(
                format!("Average sleep of {avg_hours:.1} hours is {SLEEP_SHORT} {min_hours} hours"),
                "Move your bedtime 30 minutes earlier and protect a full night of sleep",
            );
        }
        if long {
            observations.trigger(
                format!("Average sleep of {avg_hours:.1} hours is {SLEEP_LONG} {max_hours} hours"),
                "Keep a fixed wake time and mention long sleep to your healthcare provider",
            );
        }
        let irregular = variability > targets.variability_alert;
        if irregular {
            observations.trigger(
                format!("Sleep duration {SLEEP_IRREGULAR} from night to night"),
                "Aim for the same amount of sleep every night, including weekends",
            );
        }
        if bedtime.is_some_and(|score| score < targets.consistency_alert) {
            observations.trigger(
                format!("{BEDTIME_INCONSISTENT} across the week"),
                "Pick a regular bedtime and keep it within 30 minutes each night",
            );
        }
        if wake.is_some_and(|score| score < targets.consistency_alert) {
            observations.trigger(
                format!("{WAKE_INCONSISTENT} across the week"),
                "Set one alarm time for every day of the week",
            );
        }
        let poor_quality = avg_quality < targets.low_quality_rating;
        if poor_quality {
            observations.trigger(
                format!("Average sleep {SLEEP_QUALITY_LOW} ({avg_quality:.1}/10)"),
                "Keep the bedroom dark, cool, and quiet, and avoid screens before bed",
            );
        }

        if !short && !long {
            observations.positive("Average sleep duration is within the recommended range");
        }
        if !irregular {
            observations.positive("Sleep duration is steady from night to night");
        }
        if !poor_quality {
            observations.positive("Sleep quality is rated well");
        }
        observations.positive(format!("Logged {} nights of sleep", entries.len()));

        Some(build_insight(
            BehaviorCategory::Sleep,
            weighted,
            observations,
            None,
            entries.len(),
        ))
    }

    /// 1 inside the recommended range, falling linearly to 0 at the zero-score bounds
    fn sleep_duration_score(avg_hours: f64, targets: &SleepTargets) -> f64 {
        if avg_hours < targets.min_hours {
            unit_ratio(
                avg_hours - targets.zero_score_short_hours,
                targets.min_hours - targets.zero_score_short_hours,
            )
        } else if avg_hours > targets.max_hours {
            unit_ratio(
                targets.zero_score_long_hours - avg_hours,
                targets.zero_score_long_hours - targets.max_hours,
            )
        } else {
            1.0
        }
    }

    /// Score exercise frequency, intensity, and week-to-week consistency
    #[must_use]
    pub fn analyze_exercise(&self, entries: &[ExerciseEntry]) -> Option<BehaviorInsight> {
        let first = entries.iter().map(|entry| entry.date).min()?;
        let last = entries.iter().map(|entry| entry.date).max()?;
        let targets: &ExerciseTargets = &self.config.exercise;

        let sessions = entries.len() as f64;
        let window_days = ((last - first).num_days() + 1).max(targets.min_window_days);
        let sessions_per_week = sessions / (window_days as f64 / DAYS_PER_WEEK as f64);

        let vigorous = entries
            .iter()
            .filter(|entry| entry.intensity != ExerciseIntensity::Low)
            .count() as f64;
        let high = entries
            .iter()
            .filter(|entry| entry.intensity == ExerciseIntensity::High)
            .count() as f64;
        let vigorous_share = vigorous / sessions;
        let high_share = high / sessions;

        let total_weeks = (window_days + DAYS_PER_WEEK - 1) / DAYS_PER_WEEK;
        let active_weeks: BTreeSet<i64> = entries
            .iter()
            .map(|entry| (entry.date - first).num_days() / DAYS_PER_WEEK)
            .collect();
        let consistency = unit_ratio(active_weeks.len() as f64, total_weeks as f64);

        let frequency = unit_ratio(sessions_per_week, targets.target_sessions_per_week);
        let intensity = unit_ratio(vigorous_share, targets.vigorous_share_target);
        let weights = &targets.weights;
        let weighted = weights.consistency.mul_add(
            consistency,
            weights
                .frequency
                .mul_add(frequency, weights.intensity * intensity),
        );

        let mut observations = ObservationSet::new(&self.config.observations);
        let infrequent = sessions_per_week < targets.min_sessions_per_week;
        if infrequent {
            let goal = targets.target_sessions_per_week;
            observations.trigger(
                format!(
                    "Averaging {sessions_per_week:.1} {EXERCISE_INFREQUENT}, below the goal of {goal}"
                ),
                "Schedule short sessions on fixed days to reach at least 3 per week",
            );
        }
        let mostly_easy = vigorous_share < targets.vigorous_share_target;
        if mostly_easy {
            observations.trigger(
                format!("Most sessions are {EXERCISE_LOW_INTENSITY}"),
                "Add brisk intervals to some sessions so you can talk but not sing",
            );
        }
        let patchy = consistency < targets.consistency_alert;
        if patchy {
            observations.trigger(
                format!("Activity has {EXERCISE_GAPS} between active weeks"),
                "Plan at least one session every week, even a short walk",
            );
        }
        if sessions_per_week > targets.overtraining_sessions_per_week
            && high_share > targets.overtraining_high_share
        {
            observations.trigger(
                format!("Frequent high-intensity sessions leave little {EXERCISE_OVERTRAINING}"),
                "Swap one or two hard sessions for easy or rest days",
            );
        }

        if !infrequent {
            observations.positive("Exercise frequency meets the weekly minimum");
        }
        if !mostly_easy {
            observations.positive("Sessions include moderate or vigorous effort");
        }
        if !patchy {
            observations.positive("Activity is spread evenly across weeks");
        }
        observations.positive(format!("Logged {} exercise sessions", entries.len()));

        Some(build_insight(
            BehaviorCategory::Exercise,
            weighted,
            observations,
            None,
            entries.len(),
        ))
    }

    /// Score medication adherence over scheduled doses
    #[must_use]
    pub fn analyze_medication(&self, entries: &[AdherenceEntry]) -> Option<BehaviorInsight> {
        let mut scheduled: Vec<&AdherenceEntry> =
            entries.iter().filter(|entry| entry.scheduled).collect();
        if scheduled.is_empty() {
            return None;
        }
        scheduled.sort_by_key(|entry| entry.date);
        let targets: &AdherenceTargets = &self.config.adherence;

        let taken_ratio = |doses: &[&AdherenceEntry]| {
            doses.iter().filter(|entry| entry.taken_as_scheduled).count() as f64
                / doses.len() as f64
        };
        let ratio = taken_ratio(&scheduled);
        let recent_start = scheduled.len().saturating_sub(targets.recent_window);
        let recent = taken_ratio(&scheduled[recent_start..]);
        let longest_missed_run = scheduled
            .iter()
            .fold((0_usize, 0_usize), |(current, longest), entry| {
                if entry.taken_as_scheduled {
                    (0, longest)
                } else {
                    (current + 1, longest.max(current + 1))
                }
            })
            .1;

        let weighted = targets
            .overall_weight
            .mul_add(ratio, targets.recent_weight * recent);

        let mut observations = ObservationSet::new(&self.config.observations);
        let below_target = ratio < targets.target_ratio;
        if below_target {
            let taken_pct = ratio * 100.0;
            let target_pct = targets.target_ratio * 100.0;
            observations.trigger(
                format!(
                    "Took {taken_pct:.0}% of scheduled doses, below the {target_pct:.0}% {ADHERENCE_LOW}"
                ),
                "Use a pill organizer or phone reminder tied to a daily routine",
            );
        }
        let declining = recent < ratio - targets.recent_drop_alert;
        if declining {
            observations.trigger(
                format!("Adherence has dropped over the {ADHERENCE_DECLINING}"),
                "Check what changed recently and set a fresh reminder",
            );
        }
        let streak = longest_missed_run >= targets.consecutive_missed_alert;
        if streak {
            observations.trigger(
                format!("Missed {longest_missed_run} scheduled doses {ADHERENCE_STREAK}"),
                "Ask your pharmacist what to do after missed doses",
            );
        }

        if !below_target {
            observations.positive("Scheduled doses are taken consistently");
        }
        if !declining {
            observations.positive("Recent adherence is steady");
        }
        if !streak {
            observations.positive("No long runs of missed doses");
        }
        observations.positive(format!("Tracked {} scheduled doses", scheduled.len()));

        Some(build_insight(
            BehaviorCategory::Medication,
            weighted,
            observations,
            Some(ratio),
            scheduled.len(),
        ))
    }

    /// Score hydration, meal count, and meal regularity
    #[must_use]
    pub fn analyze_nutrition(&self, entries: &[NutritionEntry]) -> Option<BehaviorInsight> {
        if entries.is_empty() {
            return None;
        }
        let targets: &NutritionTargets = &self.config.nutrition;

        let water: Vec<f64> = entries.iter().map(|entry| entry.water_intake_oz).collect();
        let meals: Vec<f64> = entries
            .iter()
            .map(|entry| f64::from(entry.meal_count))
            .collect();
        let avg_water = mean(&water);
        let avg_meals = mean(&meals);

        let hydration = unit_ratio(avg_water, targets.water_target_oz);
        let meal_score = if avg_meals < targets.min_meals {
            unit((targets.min_meals - avg_meals).mul_add(-targets.meal_penalty, 1.0))
        } else if avg_meals > targets.max_meals {
            unit((avg_meals - targets.max_meals).mul_add(-targets.meal_penalty, 1.0))
        } else {
            1.0
        };
        let regularity = 1.0 - unit_ratio(std_dev(&meals), targets.max_meal_std_dev);

        let weights = &targets.weights;
        let weighted = weights.regularity.mul_add(
            regularity,
            weights
                .hydration
                .mul_add(hydration, weights.meals * meal_score),
        );

        let mut observations = ObservationSet::new(&self.config.observations);
        let dehydrated = avg_water < targets.water_target_oz;
        if dehydrated {
            let target = targets.water_target_oz;
            observations.trigger(
                format!(
                    "Average {WATER_LOW} of {avg_water:.0} oz is below the {target} oz daily target"
                ),
                "Keep a water bottle nearby and refill it with every meal",
            );
        }
        let few_meals = avg_meals < targets.min_meals;
        if few_meals {
            let min_meals = targets.min_meals;
            observations.trigger(
                format!("Averaging {avg_meals:.1} meals a day, {MEALS_FEW} the recommended {min_meals}"),
                "Plan three regular meals and keep simple options on hand",
            );
        }
        let many_meals = avg_meals > targets.excessive_meals;
        if many_meals {
            let excessive = targets.excessive_meals;
            observations.trigger(
                format!("Eating {avg_meals:.1} times a day, {MEALS_MANY} {excessive} on average"),
                "Group snacks into planned meals and notice hunger cues",
            );
        }
        let irregular = regularity < targets.regularity_alert;
        if irregular {
            observations.trigger(
                format!("Meal pattern {MEALS_IRREGULAR} from day to day"),
                "Eat at roughly the same times each day",
            );
        }

        if !dehydrated {
            observations.positive("Hydration meets the daily target");
        }
        if !few_meals && !many_meals {
            observations.positive("Meal count is in a healthy range");
        }
        if !irregular {
            observations.positive("Meal pattern is regular");
        }
        observations.positive(format!("Logged nutrition for {} days", entries.len()));

        Some(build_insight(
            BehaviorCategory::Nutrition,
            weighted,
            observations,
            None,
            entries.len(),
        ))
    }
}
