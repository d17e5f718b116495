// ABOUTME: Behavior analysis configuration for sleep, exercise, adherence, and nutrition scoring
// ABOUTME: Recommended ranges, sub-score normalizers, observation triggers, and category weights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellpath Contributors

//! Behavior Analysis Configuration
//!
//! Every category score is a weighted sum of sub-scores in `[0, 1]`, scaled
//! to 0-100. Weights of each category must sum to 1.0.
//!
//! # References
//!
//! - Sleep duration: NSF/AASM guidelines (Watson et al. 2015, Hirshkowitz et al. 2015)
//! - Exercise frequency: WHO physical activity guidelines (2020)
//! - Medication adherence: 80% proportion-of-days-covered convention

use serde::{Deserialize, Serialize};

/// Behavior Analysis Configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BehaviorConfig {
    /// Sleep targets
    pub sleep: SleepTargets,
    /// Exercise targets
    pub exercise: ExerciseTargets,
    /// Medication adherence targets
    pub adherence: AdherenceTargets,
    /// Nutrition targets
    pub nutrition: NutritionTargets,
    /// Observation list limits
    pub observations: ObservationLimits,
}

/// Sleep duration and regularity targets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SleepTargets {
    /// Lower bound of the recommended range (hours)
    pub min_hours: f64,
    /// Upper bound of the recommended range (hours)
    pub max_hours: f64,
    /// Average at which the duration sub-score reaches zero on the short side
    pub zero_score_short_hours: f64,
    /// Average at which the duration sub-score reaches zero on the long side
    pub zero_score_long_hours: f64,
    /// Standard deviation (hours) that maps to full variability
    pub max_duration_std_dev_hours: f64,
    /// Standard deviation (minutes) of bedtime or wake time that maps to zero consistency
    pub max_timing_std_dev_minutes: f64,
    /// Variability above this triggers an observation
    pub variability_alert: f64,
    /// Bedtime or wake consistency below this triggers an observation
    pub consistency_alert: f64,
    /// Average quality (1-10) below this triggers an observation
    pub low_quality_rating: f64,
    /// Sub-score weights
    pub weights: SleepWeights,
}

impl Default for SleepTargets {
    fn default() -> Self {
        Self {
            min_hours: 7.0,
            max_hours: 9.0,
            zero_score_short_hours: 4.0,
            zero_score_long_hours: 12.0,
            max_duration_std_dev_hours: 2.0,
            max_timing_std_dev_minutes: 90.0,
            variability_alert: 0.5,
            consistency_alert: 0.5,
            low_quality_rating: 5.0,
            weights: SleepWeights::default(),
        }
    }
}

/// Sleep sub-score weights
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SleepWeights {
    /// Duration sub-score
    pub duration: f64,
    /// Inverted variability sub-score
    pub regularity: f64,
    /// Bedtime consistency sub-score
    pub bedtime: f64,
    /// Wake-time consistency sub-score
    pub wake: f64,
}

impl Default for SleepWeights {
    fn default() -> Self {
        Self {
            duration: 0.4,
            regularity: 0.3,
            bedtime: 0.15,
            wake: 0.15,
        }
    }
}

impl SleepWeights {
    /// Sum of all weights
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.duration + self.regularity + self.bedtime + self.wake
    }
}

/// Exercise frequency and intensity targets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseTargets {
    /// Sessions per week that earn a full frequency sub-score
    pub target_sessions_per_week: f64,
    /// Sessions per week below which an observation is triggered
    pub min_sessions_per_week: f64,
    /// Moderate-or-high share that earns a full intensity sub-score
    pub vigorous_share_target: f64,
    /// Share of active weeks below which an observation is triggered
    pub consistency_alert: f64,
    /// Sessions per week above which high-intensity volume is flagged
    pub overtraining_sessions_per_week: f64,
    /// High-intensity share above which high volume is flagged
    pub overtraining_high_share: f64,
    /// Shortest analysis window (days)
    pub min_window_days: i64,
    /// Sub-score weights
    pub weights: ExerciseWeights,
}

impl Default for ExerciseTargets {
    fn default() -> Self {
        Self {
            target_sessions_per_week: 5.0,
            min_sessions_per_week: 3.0,
            vigorous_share_target: 0.5,
            consistency_alert: 0.75,
            overtraining_sessions_per_week: 6.0,
            overtraining_high_share: 0.8,
            min_window_days: 7,
            weights: ExerciseWeights::default(),
        }
    }
}

/// Exercise sub-score weights
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseWeights {
    /// Frequency sub-score
    pub frequency: f64,
    /// Intensity sub-score
    pub intensity: f64,
    /// Weekly consistency sub-score
    pub consistency: f64,
}

impl Default for ExerciseWeights {
    fn default() -> Self {
        Self {
            frequency: 0.5,
            intensity: 0.25,
            consistency: 0.25,
        }
    }
}

impl ExerciseWeights {
    /// Sum of all weights
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.frequency + self.intensity + self.consistency
    }
}

/// Medication adherence targets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdherenceTargets {
    /// Ratio below which adherence is flagged
    pub target_ratio: f64,
    /// Most recent scheduled doses used for the recent ratio
    pub recent_window: usize,
    /// Drop of the recent ratio below the overall ratio that is flagged
    pub recent_drop_alert: f64,
    /// Consecutive missed doses that are flagged
    pub consecutive_missed_alert: usize,
    /// Weight of the overall ratio
    pub overall_weight: f64,
    /// Weight of the recent ratio
    pub recent_weight: f64,
}

impl Default for AdherenceTargets {
    fn default() -> Self {
        Self {
            target_ratio: 0.8,
            recent_window: 7,
            recent_drop_alert: 0.1,
            consecutive_missed_alert: 3,
            overall_weight: 0.7,
            recent_weight: 0.3,
        }
    }
}

/// Hydration and meal targets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionTargets {
    /// Daily water target (fluid ounces)
    pub water_target_oz: f64,
    /// Lower bound of the healthy meal range
    pub min_meals: f64,
    /// Upper bound of the healthy meal range
    pub max_meals: f64,
    /// Average meal count above which an observation is triggered
    pub excessive_meals: f64,
    /// Sub-score penalty per meal outside the healthy range
    pub meal_penalty: f64,
    /// Meal-count standard deviation that maps to zero regularity
    pub max_meal_std_dev: f64,
    /// Regularity below this triggers an observation
    pub regularity_alert: f64,
    /// Sub-score weights
    pub weights: NutritionWeights,
}

impl Default for NutritionTargets {
    fn default() -> Self {
        Self {
            water_target_oz: 64.0,
            min_meals: 3.0,
            max_meals: 4.0,
            excessive_meals: 5.0,
            meal_penalty: 0.5,
            max_meal_std_dev: 1.5,
            regularity_alert: 0.5,
            weights: NutritionWeights::default(),
        }
    }
}

/// Nutrition sub-score weights
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionWeights {
    /// Hydration sub-score
    pub hydration: f64,
    /// Meal-count sub-score
    pub meals: f64,
    /// Meal regularity sub-score
    pub regularity: f64,
}

impl Default for NutritionWeights {
    fn default() -> Self {
        Self {
            hydration: 0.4,
            meals: 0.4,
            regularity: 0.2,
        }
    }
}

impl NutritionWeights {
    /// Sum of all weights
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.hydration + self.meals + self.regularity
    }
}

/// Observation list limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservationLimits {
    /// Most triggered observations kept per category
    pub max_triggered: usize,
    /// Fewest observations per category, padded with positive fillers
    pub min_total: usize,
}

impl Default for ObservationLimits {
    fn default() -> Self {
        Self {
            max_triggered: 4,
            min_total: 2,
        }
    }
}
