// ABOUTME: Rule-based chronic disease risk scoring over declarative per-condition rule tables
// ABOUTME: RiskScorer trait seam with the rule-based implementation and confidence estimation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellpath Contributors

//! # Risk Scoring
//!
//! Every condition is a [`ConditionScorer`]: a base score plus an ordered
//! table of [`RiskRule`]s. Scoring folds the table: each rule whose predicate
//! holds contributes its delta and its label. Brackets (age, BMI, blood
//! pressure, cholesterol, glucose) are pre-computed once per assessment so at
//! most one bracket of a family can fire.

use crate::config::intelligence::RiskScoringConfig;
use crate::config::EngineConfig;
use crate::metrics::{bmi_category, calculate_bmi};
use crate::physiological_constants::{
    age, blood_pressure, bmi as bmi_bounds, cholesterol, glucose, sleep as sleep_constants,
};
use crate::statistics::round_to;
use std::fmt;
use tracing::debug;
use wellpath_core::constants::risk_levels::MAX_SCORE;
use wellpath_core::errors::AppResult;
use wellpath_core::models::{
    ActivityLevel, AlcoholConsumption, BmiCategory, Condition, HealthProfile, IntakeLevel,
    LifestyleProfile, RiskAssessment, RiskLevel, SmokingStatus, StressLevel,
};

/// Appended to the recommendations of high and very-high assessments
pub const PROVIDER_FOLLOW_UP: &str = "Discuss these results with your healthcare provider";

/// Used when no fired rule carries a recommendation
pub const MAINTAIN_HABITS: &str = "Maintain your current healthy habits";

const HEART_DISEASE_KEYS: &[&str] = &[
    "heart_disease",
    "cardiovascular_disease",
    "heart_attack",
    "stroke",
];
const DIABETES_KEYS: &[&str] = &["diabetes", "type_2_diabetes"];
const PREDIABETES_KEYS: &[&str] = &["prediabetes"];
const HYPERTENSION_KEYS: &[&str] = &["hypertension", "high_blood_pressure"];
const OBESITY_KEYS: &[&str] = &["obesity"];
const KIDNEY_DISEASE_KEYS: &[&str] = &["kidney_disease"];

/// Optional reading a scorer may depend on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskInput {
    /// Latest blood pressure reading
    BloodPressure,
    /// Latest lipid panel
    Cholesterol,
    /// Latest fasting glucose reading
    Glucose,
}

/// Inputs of one assessment, with bracket families resolved once
///
/// Bracket values count up from 0 (no bracket) to the most severe bracket.
#[derive(Debug, Clone, Copy)]
pub struct RiskFactors<'a> {
    /// Profile being scored
    pub profile: &'a HealthProfile,
    /// Lifestyle being scored
    pub lifestyle: &'a LifestyleProfile,
    /// BMI, one decimal
    pub bmi: f64,
    /// BMI classification
    pub bmi_category: BmiCategory,
    /// Latest fasting glucose in mg/dL
    pub glucose_mg_dl: Option<f64>,
    /// Latest HDL in mg/dL
    pub hdl: Option<f64>,
    /// 0..=4 for none, >35, >45, >55, >65
    pub age_bracket: u8,
    /// 0..=2 for <25, >=25, >=30
    pub bmi_bracket: u8,
    /// 0..=3 for normal, >=120/80, >=130/85, >=140/90; `None` without a reading
    pub blood_pressure_bracket: Option<u8>,
    /// 0..=2 for <=200, >200, >240; `None` without a panel
    pub total_cholesterol_bracket: Option<u8>,
    /// 0..=2 for <100, >=100, >=126; `None` without a reading
    pub glucose_bracket: Option<u8>,
}

impl<'a> RiskFactors<'a> {
    /// Validate the profile and resolve every bracket
    ///
    /// # Errors
    ///
    /// Returns a validation error for an invalid profile
    pub fn resolve(profile: &'a HealthProfile, lifestyle: &'a LifestyleProfile) -> AppResult<Self> {
        profile.validate()?;
        let bmi = calculate_bmi(profile.weight_kg, profile.height_cm)?;
        let glucose_mg_dl = profile.latest_blood_glucose().map(|reading| reading.mg_dl());
        let panel = profile.latest_cholesterol();

        Ok(Self {
            profile,
            lifestyle,
            bmi,
            bmi_category: bmi_category(bmi),
            glucose_mg_dl,
            hdl: panel.map(|reading| reading.hdl),
            age_bracket: age_bracket(profile.age),
            bmi_bracket: bracket_at_least(
                bmi,
                &[bmi_bounds::NORMAL_BELOW, bmi_bounds::OVERWEIGHT_BELOW],
            ),
            blood_pressure_bracket: profile.latest_blood_pressure().map(|reading| {
                [
                    blood_pressure::ELEVATED,
                    blood_pressure::STAGE_1,
                    blood_pressure::STAGE_2,
                ]
                .iter()
                .filter(|(systolic, diastolic)| reading.at_or_above(*systolic, *diastolic))
                .count() as u8
            }),
            total_cholesterol_bracket: panel.map(|reading| {
                [
                    cholesterol::BORDERLINE_TOTAL_ABOVE,
                    cholesterol::HIGH_TOTAL_ABOVE,
                ]
                .iter()
                .filter(|limit| reading.total > **limit)
                .count() as u8
            }),
            glucose_bracket: glucose_mg_dl.map(|value| {
                bracket_at_least(value, &[glucose::PREDIABETIC_MIN, glucose::DIABETIC_MIN])
            }),
        })
    }

    /// Whether an optional reading is present
    #[must_use]
    pub const fn has(&self, input: RiskInput) -> bool {
        match input {
            RiskInput::BloodPressure => self.blood_pressure_bracket.is_some(),
            RiskInput::Cholesterol => self.total_cholesterol_bracket.is_some(),
            RiskInput::Glucose => self.glucose_bracket.is_some(),
        }
    }

    fn vigorous(&self) -> bool {
        self.lifestyle.exercise_frequency.is_vigorous()
    }

    fn sedentary(&self) -> bool {
        self.lifestyle.exercise_frequency == ActivityLevel::Sedentary
    }
}

fn age_bracket(years: u32) -> u8 {
    [age::OVER_35, age::OVER_45, age::OVER_55, age::OVER_65]
        .iter()
        .filter(|limit| years > **limit)
        .count() as u8
}

fn bracket_at_least(value: f64, limits: &[f64]) -> u8 {
    limits.iter().filter(|limit| value >= **limit).count() as u8
}

/// One declarative scoring rule
#[derive(Clone, Copy)]
pub struct RiskRule {
    /// Factor label reported when the rule fires
    pub label: &'static str,
    /// Score contribution; positive raises risk, negative lowers it
    pub delta: i32,
    /// Whether the rule fires
    pub predicate: fn(&RiskFactors<'_>) -> bool,
    /// Advice collected when an increasing rule fires
    pub recommendation: Option<&'static str>,
}

impl fmt::Debug for RiskRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RiskRule")
            .field("label", &self.label)
            .field("delta", &self.delta)
            .field("recommendation", &self.recommendation)
            .finish_non_exhaustive()
    }
}

impl RiskRule {
    const fn raise(
        label: &'static str,
        delta: i32,
        predicate: fn(&RiskFactors<'_>) -> bool,
        recommendation: &'static str,
    ) -> Self {
        Self {
            label,
            delta,
            predicate,
            recommendation: Some(recommendation),
        }
    }

    const fn lower(
        label: &'static str,
        delta: i32,
        predicate: fn(&RiskFactors<'_>) -> bool,
    ) -> Self {
        Self {
            label,
            delta,
            predicate,
            recommendation: None,
        }
    }
}

/// Scorer for one condition
#[derive(Debug, Clone, Copy)]
pub struct ConditionScorer {
    /// Condition scored
    pub condition: Condition,
    /// Score before any rule fires
    pub base_score: i32,
    /// Ordered rule table
    pub rules: &'static [RiskRule],
    /// Inputs without which the condition is not scored
    pub requires: &'static [RiskInput],
    /// Inputs whose absence lowers confidence
    pub confidence_inputs: &'static [RiskInput],
}

impl ConditionScorer {
    /// Score the condition; `None` when a required input is missing
    #[must_use]
    pub fn score(
        &self,
        factors: &RiskFactors<'_>,
        config: &RiskScoringConfig,
    ) -> Option<RiskAssessment> {
        if !self.requires.iter().all(|input| factors.has(*input)) {
            return None;
        }

        let tally = self
            .rules
            .iter()
            .filter(|rule| (rule.predicate)(factors))
            .fold(RuleTally::new(self.base_score), RuleTally::apply);

        let score = tally.total.clamp(0, MAX_SCORE) as u8;
        let risk_level = RiskLevel::from_score(score);
        let recommendations = tally.finish_recommendations(risk_level);

        Some(RiskAssessment {
            condition: self.condition,
            score,
            risk_level,
            increasing_factors: tally.increasing,
            decreasing_factors: tally.decreasing,
            recommendations,
            confidence: self.confidence(factors, config),
        })
    }

    fn confidence(&self, factors: &RiskFactors<'_>, config: &RiskScoringConfig) -> f64 {
        let base = match self.condition {
            Condition::CardiovascularDisease => config.base_confidence.cardiovascular,
            Condition::Type2Diabetes => config.base_confidence.diabetes,
            Condition::Hypertension => config.base_confidence.hypertension,
            Condition::Obesity => config.base_confidence.obesity,
        };
        let missing = self
            .confidence_inputs
            .iter()
            .filter(|input| !factors.has(**input))
            .count() as f64;
        round_to(
            config.confidence_penalty.mul_add(-missing, base).clamp(0.0, 1.0),
            2,
        )
    }
}

struct RuleTally {
    total: i32,
    increasing: Vec<String>,
    decreasing: Vec<String>,
    recommendations: Vec<String>,
}

impl RuleTally {
    const fn new(base_score: i32) -> Self {
        Self {
            total: base_score,
            increasing: Vec::new(),
            decreasing: Vec::new(),
            recommendations: Vec::new(),
        }
    }

    fn apply(mut self, rule: &RiskRule) -> Self {
        self.total += rule.delta;
        if rule.delta > 0 {
            self.increasing.push(rule.label.to_owned());
            if let Some(advice) = rule.recommendation {
                if !self.recommendations.iter().any(|existing| existing == advice) {
                    self.recommendations.push(advice.to_owned());
                }
            }
        } else if rule.delta < 0 {
            self.decreasing.push(rule.label.to_owned());
        }
        self
    }

    fn finish_recommendations(&self, level: RiskLevel) -> Vec<String> {
        let mut recommendations = self.recommendations.clone();
        if level.is_elevated() {
            recommendations.push(PROVIDER_FOLLOW_UP.to_owned());
        }
        if recommendations.is_empty() {
            recommendations.push(MAINTAIN_HABITS.to_owned());
        }
        recommendations
    }
}

// Shared advice strings
const QUIT_SMOKING: &str = "Quit smoking; ask about cessation programs";
const LOSE_WEIGHT: &str = "Aim for gradual weight loss through diet and activity";
const MONITOR_BP: &str = "Monitor blood pressure regularly and reduce sodium";
const MOVE_MORE: &str = "Build up to 150 minutes of moderate activity per week";
const CUT_SODIUM: &str = "Limit sodium to under 2,300 mg per day";
const CUT_SUGAR: &str = "Cut back on sugary drinks and refined carbohydrates";
const LIMIT_ALCOHOL: &str = "Limit alcohol to no more than one or two drinks per day";
const MANAGE_STRESS: &str = "Practice stress management such as breathing exercises or walks";
const REGULAR_SCREENING: &str = "Schedule regular screening with your healthcare provider";
const AGE_SCREENING: &str = "Keep up with age-appropriate health screenings";

static CARDIOVASCULAR_RULES: [RiskRule; 25] = [
    RiskRule::raise("Age over 65", 25, |f| f.age_bracket == 4, AGE_SCREENING),
    RiskRule::raise("Age over 55", 20, |f| f.age_bracket == 3, AGE_SCREENING),
    RiskRule::raise("Age over 45", 15, |f| f.age_bracket == 2, AGE_SCREENING),
    RiskRule::raise("Age over 35", 5, |f| f.age_bracket == 1, AGE_SCREENING),
    RiskRule::raise("BMI of 30 or higher", 15, |f| f.bmi_bracket == 2, LOSE_WEIGHT),
    RiskRule::raise("BMI of 25 or higher", 8, |f| f.bmi_bracket == 1, LOSE_WEIGHT),
    RiskRule::raise(
        "Blood pressure at or above 140/90",
        25,
        |f| f.blood_pressure_bracket == Some(3),
        MONITOR_BP,
    ),
    RiskRule::raise(
        "Blood pressure at or above 130/85",
        15,
        |f| f.blood_pressure_bracket == Some(2),
        MONITOR_BP,
    ),
    RiskRule::raise(
        "Blood pressure at or above 120/80",
        5,
        |f| f.blood_pressure_bracket == Some(1),
        MONITOR_BP,
    ),
    RiskRule::raise(
        "Total cholesterol above 240 mg/dL",
        15,
        |f| f.total_cholesterol_bracket == Some(2),
        "Discuss cholesterol-lowering options and a heart-healthy diet",
    ),
    RiskRule::raise(
        "Total cholesterol above 200 mg/dL",
        8,
        |f| f.total_cholesterol_bracket == Some(1),
        "Reduce saturated fat and recheck cholesterol",
    ),
    RiskRule::raise(
        "HDL cholesterol below 40 mg/dL",
        10,
        |f| f.hdl.is_some_and(|hdl| hdl < cholesterol::LOW_HDL_BELOW),
        "Raise HDL with regular aerobic exercise",
    ),
    RiskRule::lower("HDL cholesterol above 60 mg/dL", -10, |f| {
        f.hdl
            .is_some_and(|hdl| hdl > cholesterol::PROTECTIVE_HDL_ABOVE)
    }),
    RiskRule::raise(
        "Current smoker",
        20,
        |f| f.lifestyle.smoking_status == SmokingStatus::Current,
        QUIT_SMOKING,
    ),
    RiskRule::raise(
        "Former smoker",
        5,
        |f| f.lifestyle.smoking_status == SmokingStatus::Former,
        "Stay smoke-free",
    ),
    RiskRule::raise(
        "Heavy alcohol consumption",
        10,
        |f| f.lifestyle.alcohol_consumption == AlcoholConsumption::Heavy,
        LIMIT_ALCOHOL,
    ),
    RiskRule::raise(
        "Moderate alcohol consumption",
        3,
        |f| f.lifestyle.alcohol_consumption == AlcoholConsumption::Moderate,
        LIMIT_ALCOHOL,
    ),
    RiskRule::raise("Sedentary lifestyle", 10, |f| f.sedentary(), MOVE_MORE),
    RiskRule::lower("Regular vigorous exercise", -10, |f| f.vigorous()),
    RiskRule::raise(
        "High sodium intake",
        5,
        |f| f.lifestyle.diet_quality.sodium_intake == IntakeLevel::High,
        CUT_SODIUM,
    ),
    RiskRule::lower("High fruit and vegetable intake", -5, |f| {
        f.lifestyle.diet_quality.produce_intake == IntakeLevel::High
    }),
    RiskRule::raise(
        "High stress",
        5,
        |f| f.lifestyle.stress_level == StressLevel::High,
        MANAGE_STRESS,
    ),
    RiskRule::raise(
        "Family history of heart disease",
        10,
        |f| f.profile.has_family_history(HEART_DISEASE_KEYS),
        REGULAR_SCREENING,
    ),
    RiskRule::raise(
        "Existing diabetes",
        10,
        |f| f.profile.has_condition(DIABETES_KEYS),
        "Keep blood sugar within your target range",
    ),
    RiskRule::raise(
        "Existing hypertension",
        10,
        |f| f.profile.has_condition(HYPERTENSION_KEYS),
        "Take blood pressure medication as prescribed",
    ),
];

static DIABETES_RULES: [RiskRule; 16] = [
    RiskRule::raise("Age over 65", 15, |f| f.age_bracket == 4, AGE_SCREENING),
    RiskRule::raise("Age over 55", 12, |f| f.age_bracket == 3, AGE_SCREENING),
    RiskRule::raise("Age over 45", 10, |f| f.age_bracket == 2, AGE_SCREENING),
    RiskRule::raise("Age over 35", 5, |f| f.age_bracket == 1, AGE_SCREENING),
    RiskRule::raise("BMI of 30 or higher", 20, |f| f.bmi_bracket == 2, LOSE_WEIGHT),
    RiskRule::raise("BMI of 25 or higher", 10, |f| f.bmi_bracket == 1, LOSE_WEIGHT),
    RiskRule::raise(
        "Fasting glucose at or above 126 mg/dL",
        35,
        |f| f.glucose_bracket == Some(2),
        "Ask your provider about an HbA1c test to confirm diabetes",
    ),
    RiskRule::raise(
        "Fasting glucose at or above 100 mg/dL",
        20,
        |f| f.glucose_bracket == Some(1),
        "Recheck fasting glucose and reduce refined carbohydrates",
    ),
    RiskRule::raise("Sedentary lifestyle", 10, |f| f.sedentary(), MOVE_MORE),
    RiskRule::lower("Regular vigorous exercise", -10, |f| f.vigorous()),
    RiskRule::raise(
        "High sugar intake",
        10,
        |f| f.lifestyle.diet_quality.sugar_intake == IntakeLevel::High,
        CUT_SUGAR,
    ),
    RiskRule::lower("High fruit and vegetable intake", -5, |f| {
        f.lifestyle.diet_quality.produce_intake == IntakeLevel::High
    }),
    RiskRule::raise(
        "Current smoker",
        5,
        |f| f.lifestyle.smoking_status == SmokingStatus::Current,
        QUIT_SMOKING,
    ),
    RiskRule::raise(
        "Family history of diabetes",
        15,
        |f| f.profile.has_family_history(DIABETES_KEYS),
        REGULAR_SCREENING,
    ),
    RiskRule::raise(
        "Existing prediabetes",
        15,
        |f| f.profile.has_condition(PREDIABETES_KEYS),
        "Join a diabetes prevention program",
    ),
    RiskRule::raise(
        "Existing hypertension",
        5,
        |f| f.profile.has_condition(HYPERTENSION_KEYS),
        "Take blood pressure medication as prescribed",
    ),
];

static HYPERTENSION_RULES: [RiskRule; 20] = [
    RiskRule::raise("Age over 65", 15, |f| f.age_bracket == 4, AGE_SCREENING),
    RiskRule::raise("Age over 55", 10, |f| f.age_bracket == 3, AGE_SCREENING),
    RiskRule::raise("Age over 45", 8, |f| f.age_bracket == 2, AGE_SCREENING),
    RiskRule::raise("Age over 35", 3, |f| f.age_bracket == 1, AGE_SCREENING),
    RiskRule::raise("BMI of 30 or higher", 15, |f| f.bmi_bracket == 2, LOSE_WEIGHT),
    RiskRule::raise("BMI of 25 or higher", 8, |f| f.bmi_bracket == 1, LOSE_WEIGHT),
    RiskRule::raise(
        "Blood pressure at or above 140/90",
        40,
        |f| f.blood_pressure_bracket == Some(3),
        MONITOR_BP,
    ),
    RiskRule::raise(
        "Blood pressure at or above 130/85",
        25,
        |f| f.blood_pressure_bracket == Some(2),
        MONITOR_BP,
    ),
    RiskRule::raise(
        "Blood pressure at or above 120/80",
        10,
        |f| f.blood_pressure_bracket == Some(1),
        MONITOR_BP,
    ),
    RiskRule::raise(
        "High sodium intake",
        10,
        |f| f.lifestyle.diet_quality.sodium_intake == IntakeLevel::High,
        CUT_SODIUM,
    ),
    RiskRule::raise(
        "Heavy alcohol consumption",
        10,
        |f| f.lifestyle.alcohol_consumption == AlcoholConsumption::Heavy,
        LIMIT_ALCOHOL,
    ),
    RiskRule::raise(
        "Moderate alcohol consumption",
        5,
        |f| f.lifestyle.alcohol_consumption == AlcoholConsumption::Moderate,
        LIMIT_ALCOHOL,
    ),
    RiskRule::raise(
        "Current smoker",
        5,
        |f| f.lifestyle.smoking_status == SmokingStatus::Current,
        QUIT_SMOKING,
    ),
    RiskRule::raise("Sedentary lifestyle", 5, |f| f.sedentary(), MOVE_MORE),
    RiskRule::lower("Regular vigorous exercise", -8, |f| f.vigorous()),
    RiskRule::raise(
        "High stress",
        8,
        |f| f.lifestyle.stress_level == StressLevel::High,
        MANAGE_STRESS,
    ),
    RiskRule::lower("High fruit and vegetable intake", -5, |f| {
        f.lifestyle.diet_quality.produce_intake == IntakeLevel::High
    }),
    RiskRule::raise(
        "Family history of hypertension",
        10,
        |f| f.profile.has_family_history(HYPERTENSION_KEYS),
        REGULAR_SCREENING,
    ),
    RiskRule::raise(
        "Existing hypertension",
        20,
        |f| f.profile.has_condition(HYPERTENSION_KEYS),
        "Take blood pressure medication as prescribed",
    ),
    RiskRule::raise(
        "Existing kidney disease",
        10,
        |f| f.profile.has_condition(KIDNEY_DISEASE_KEYS),
        "Keep kidney function checks on schedule",
    ),
];

static OBESITY_RULES: [RiskRule; 12] = [
    RiskRule::raise(
        "BMI in the overweight range",
        30,
        |f| f.bmi_category == BmiCategory::Overweight,
        LOSE_WEIGHT,
    ),
    RiskRule::raise(
        "BMI in obesity class I",
        50,
        |f| f.bmi_category == BmiCategory::ObeseI,
        LOSE_WEIGHT,
    ),
    RiskRule::raise(
        "BMI in obesity class II",
        65,
        |f| f.bmi_category == BmiCategory::ObeseII,
        "Ask your provider about a structured weight-management program",
    ),
    RiskRule::raise(
        "BMI in obesity class III",
        80,
        |f| f.bmi_category == BmiCategory::ObeseIII,
        "Ask your provider about a structured weight-management program",
    ),
    RiskRule::raise("Sedentary lifestyle", 10, |f| f.sedentary(), MOVE_MORE),
    RiskRule::lower("Regular vigorous exercise", -5, |f| f.vigorous()),
    RiskRule::raise(
        "High sugar intake",
        8,
        |f| f.lifestyle.diet_quality.sugar_intake == IntakeLevel::High,
        CUT_SUGAR,
    ),
    RiskRule::lower("High fruit and vegetable intake", -5, |f| {
        f.lifestyle.diet_quality.produce_intake == IntakeLevel::High
    }),
    RiskRule::raise(
        "Sleeping less than 6 hours",
        5,
        |f| f.lifestyle.sleep_hours < sleep_constants::SHORT_SLEEP_HOURS,
        "Aim for 7 to 9 hours of sleep per night",
    ),
    RiskRule::raise(
        "High stress",
        3,
        |f| f.lifestyle.stress_level == StressLevel::High,
        MANAGE_STRESS,
    ),
    RiskRule::raise(
        "Heavy alcohol consumption",
        5,
        |f| f.lifestyle.alcohol_consumption == AlcoholConsumption::Heavy,
        LIMIT_ALCOHOL,
    ),
    RiskRule::raise(
        "Family history of obesity",
        8,
        |f| f.profile.has_family_history(OBESITY_KEYS),
        "Build healthy eating habits together with your family",
    ),
];

const BASE_SCORE: i32 = 5;

static CONDITION_SCORERS: [ConditionScorer; 4] = [
    ConditionScorer {
        condition: Condition::CardiovascularDisease,
        base_score: BASE_SCORE,
        rules: &CARDIOVASCULAR_RULES,
        requires: &[],
        confidence_inputs: &[RiskInput::BloodPressure, RiskInput::Cholesterol],
    },
    ConditionScorer {
        condition: Condition::Type2Diabetes,
        base_score: BASE_SCORE,
        rules: &DIABETES_RULES,
        requires: &[RiskInput::Glucose],
        confidence_inputs: &[RiskInput::Cholesterol],
    },
    ConditionScorer {
        condition: Condition::Hypertension,
        base_score: BASE_SCORE,
        rules: &HYPERTENSION_RULES,
        requires: &[],
        confidence_inputs: &[RiskInput::BloodPressure],
    },
    ConditionScorer {
        condition: Condition::Obesity,
        base_score: BASE_SCORE,
        rules: &OBESITY_RULES,
        requires: &[],
        confidence_inputs: &[],
    },
];

/// The built-in scorers in output order
#[must_use]
pub fn condition_scorers() -> &'static [ConditionScorer] {
    &CONDITION_SCORERS
}

/// Contract for risk scoring backends
pub trait RiskScorer: Send + Sync {
    /// Score every supported condition for one profile
    ///
    /// # Errors
    ///
    /// Returns a validation error for an invalid profile; no partial scores are produced
    fn assess(
        &self,
        profile: &HealthProfile,
        lifestyle: &LifestyleProfile,
    ) -> AppResult<Vec<RiskAssessment>>;

    /// Backend name for logging
    fn name(&self) -> &'static str;
}

/// Rule-table risk scorer
#[derive(Debug, Clone, Default)]
pub struct RuleBasedRiskScorer {
    config: RiskScoringConfig,
}

impl RuleBasedRiskScorer {
    /// Scorer using the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::global().risk.clone())
    }

    /// Scorer using an explicit configuration
    #[must_use]
    pub const fn with_config(config: RiskScoringConfig) -> Self {
        Self { config }
    }
}

impl RiskScorer for RuleBasedRiskScorer {
    fn assess(
        &self,
        profile: &HealthProfile,
        lifestyle: &LifestyleProfile,
    ) -> AppResult<Vec<RiskAssessment>> {
        let factors = RiskFactors::resolve(profile, lifestyle)?;
        let assessments: Vec<RiskAssessment> = condition_scorers()
            .iter()
            .filter_map(|scorer| scorer.score(&factors, &self.config))
            .collect();

        debug!(
            conditions = assessments.len(),
            elevated = assessments
                .iter()
                .filter(|assessment| assessment.risk_level.is_elevated())
                .count(),
            "Scored chronic disease risks"
        );
        Ok(assessments)
    }

    fn name(&self) -> &'static str {
        "rule_based"
    }
}
