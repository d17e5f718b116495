// ABOUTME: Engine configuration root with environment overrides and validation
// ABOUTME: Aggregates metrics, risk, behavior, and coaching configuration behind a global cache
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellpath Contributors

//! Engine Configuration
//!
//! `EngineConfig::default()` carries the published thresholds. `load()` applies
//! `WELLPATH_*` environment overrides on top and validates the result;
//! `global()` caches the loaded configuration for the process lifetime.

/// Behavior analysis targets
pub mod behavior;
/// Coaching thresholds
pub mod coaching;
/// Configuration errors
pub mod error;
/// Body metrics coefficients
pub mod metrics;
/// Risk scoring confidence model
pub mod risk;

pub use behavior::{
    AdherenceTargets, BehaviorConfig, ExerciseTargets, ExerciseWeights, NutritionTargets,
    NutritionWeights, ObservationLimits, SleepTargets, SleepWeights,
};
pub use coaching::{CoachingConfig, VitalThresholds};
pub use error::ConfigError;
pub use metrics::{ActivityFactorsConfig, BmrConfig, HeartRateZoneConfig, MetricsConfig};
pub use risk::{BaseConfidenceConfig, RiskScoringConfig};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static ENGINE_CONFIG: OnceLock<EngineConfig> = OnceLock::new();

/// Tolerance for weight sums
const WEIGHT_SUM_TOLERANCE: f64 = 0.01;

/// Main engine configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Body metrics coefficients
    pub metrics: MetricsConfig,
    /// Risk scoring confidence model
    pub risk: RiskScoringConfig,
    /// Behavior analysis targets
    pub behavior: BehaviorConfig,
    /// Coaching thresholds
    pub coaching: CoachingConfig,
}

impl EngineConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        ENGINE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load engine config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error when ranges are inverted, weights do not sum to 1.0,
    /// or a value is outside its valid range
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_metrics()?;
        self.validate_risk()?;
        self.validate_behavior()?;
        self.validate_coaching()
    }

    fn validate_metrics(&self) -> Result<(), ConfigError> {
        let bounds = &self.metrics.heart_rate_zones.bounds;
        if bounds.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(ConfigError::InvalidRange(
                "Heart rate zone bounds must be in ascending order",
            ));
        }
        if bounds[0] <= 0.0 || bounds[5] > 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Heart rate zone bounds must lie in (0, 1]",
            ));
        }

        let factors = &self.metrics.activity_factors;
        let ordered = [
            factors.sedentary,
            factors.light,
            factors.moderate,
            factors.active,
            factors.very_active,
        ];
        if ordered[0] < 1.0 || ordered.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(ConfigError::InvalidRange(
                "Activity factors must be at least 1.0 and strictly increasing",
            ));
        }
        Ok(())
    }

    fn validate_risk(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.risk.confidence_penalty) {
            return Err(ConfigError::ValueOutOfRange(
                "confidence_penalty must be between 0.0 and 1.0",
            ));
        }
        if self
            .risk
            .base_confidence
            .values()
            .iter()
            .any(|value| !(0.0..=1.0).contains(value))
        {
            return Err(ConfigError::ValueOutOfRange(
                "Base confidence values must be between 0.0 and 1.0",
            ));
        }
        Ok(())
    }

    fn validate_behavior(&self) -> Result<(), ConfigError> {
        let sleep = &self.behavior.sleep;
        if sleep.min_hours >= sleep.max_hours {
            return Err(ConfigError::InvalidRange(
                "sleep min_hours must be < max_hours",
            ));
        }
        if sleep.zero_score_short_hours >= sleep.min_hours
            || sleep.max_hours >= sleep.zero_score_long_hours
        {
            return Err(ConfigError::InvalidRange(
                "Sleep zero-score bounds must lie outside the recommended range",
            ));
        }
        if sleep.max_duration_std_dev_hours <= 0.0 || sleep.max_timing_std_dev_minutes <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Sleep standard deviation normalizers must be positive",
            ));
        }
        check_weights(sleep.weights.sum(), "Sleep weights must sum to 1.0")?;

        let exercise = &self.behavior.exercise;
        if exercise.target_sessions_per_week <= 0.0 || exercise.vigorous_share_target <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Exercise targets must be positive",
            ));
        }
        if exercise.min_sessions_per_week > exercise.target_sessions_per_week {
            return Err(ConfigError::InvalidRange(
                "exercise min_sessions_per_week must be <= target_sessions_per_week",
            ));
        }
        if exercise.min_window_days < 1 {
            return Err(ConfigError::ValueOutOfRange(
                "exercise min_window_days must be at least 1",
            ));
        }
        check_weights(exercise.weights.sum(), "Exercise weights must sum to 1.0")?;

        let adherence = &self.behavior.adherence;
        if !(0.0..=1.0).contains(&adherence.target_ratio) {
            return Err(ConfigError::ValueOutOfRange(
                "adherence target_ratio must be between 0.0 and 1.0",
            ));
        }
        if adherence.recent_window == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "adherence recent_window must be at least 1",
            ));
        }
        check_weights(
            adherence.overall_weight + adherence.recent_weight,
            "Adherence weights must sum to 1.0",
        )?;

        let nutrition = &self.behavior.nutrition;
        if nutrition.water_target_oz <= 0.0 || nutrition.max_meal_std_dev <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Nutrition targets must be positive",
            ));
        }
        if nutrition.min_meals > nutrition.max_meals
            || nutrition.max_meals > nutrition.excessive_meals
        {
            return Err(ConfigError::InvalidRange(
                "Meal targets must satisfy min_meals <= max_meals <= excessive_meals",
            ));
        }
        check_weights(nutrition.weights.sum(), "Nutrition weights must sum to 1.0")?;

        let limits = &self.behavior.observations;
        if limits.min_total > limits.max_triggered {
            return Err(ConfigError::InvalidRange(
                "observation min_total must be <= max_triggered",
            ));
        }
        Ok(())
    }

    fn validate_coaching(&self) -> Result<(), ConfigError> {
        let vitals = &self.coaching.vitals;
        if vitals.systolic_alert >= vitals.systolic_crisis
            || vitals.diastolic_alert >= vitals.diastolic_crisis
        {
            return Err(ConfigError::InvalidRange(
                "Blood pressure alert levels must be below crisis levels",
            ));
        }
        if vitals.glucose_alert_mg_dl <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "glucose_alert_mg_dl must be positive",
            ));
        }
        if !(0.0..=1.0).contains(&self.coaching.adherence_alert_ratio) {
            return Err(ConfigError::ValueOutOfRange(
                "adherence_alert_ratio must be between 0.0 and 1.0",
            ));
        }
        if !(0.0..=100.0).contains(&self.coaching.achievement_min_score) {
            return Err(ConfigError::ValueOutOfRange(
                "achievement_min_score must be between 0 and 100",
            ));
        }
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            "WELLPATH_RISK_CONFIDENCE_PENALTY",
            &mut self.risk.confidence_penalty,
        )?;

        // Behavior targets
        Self::apply_env_var(
            "WELLPATH_SLEEP_TARGET_MIN_HOURS",
            &mut self.behavior.sleep.min_hours,
        )?;
        Self::apply_env_var(
            "WELLPATH_SLEEP_TARGET_MAX_HOURS",
            &mut self.behavior.sleep.max_hours,
        )?;
        Self::apply_env_var(
            "WELLPATH_EXERCISE_TARGET_SESSIONS",
            &mut self.behavior.exercise.target_sessions_per_week,
        )?;
        Self::apply_env_var(
            "WELLPATH_WATER_TARGET_OZ",
            &mut self.behavior.nutrition.water_target_oz,
        )?;

        // The adherence threshold drives both the observation and the coaching alert
        Self::apply_env_var(
            "WELLPATH_ADHERENCE_THRESHOLD",
            &mut self.behavior.adherence.target_ratio,
        )?;
        self.coaching.adherence_alert_ratio = self.behavior.adherence.target_ratio;

        // Coaching thresholds
        Self::apply_env_var(
            "WELLPATH_SYSTOLIC_ALERT",
            &mut self.coaching.vitals.systolic_alert,
        )?;
        Self::apply_env_var(
            "WELLPATH_DIASTOLIC_ALERT",
            &mut self.coaching.vitals.diastolic_alert,
        )?;
        Self::apply_env_var(
            "WELLPATH_GLUCOSE_ALERT_MG_DL",
            &mut self.coaching.vitals.glucose_alert_mg_dl,
        )?;
        Self::apply_env_var(
            "WELLPATH_ACHIEVEMENT_SCORE",
            &mut self.coaching.achievement_min_score,
        )?;

        Ok(self)
    }
}

fn check_weights(sum: f64, message: &'static str) -> Result<(), ConfigError> {
    if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        return Err(ConfigError::InvalidWeights(message));
    }
    Ok(())
}
