// ABOUTME: Tests for rule-based chronic disease risk scoring
// ABOUTME: Covers bracket exclusivity, clamping, level thresholds, confidence, and the scorer seam
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellpath Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use wellpath::config::intelligence::RiskScoringConfig;
use wellpath::errors::AppResult;
use wellpath::models::{
    ActivityLevel, AlcoholConsumption, Condition, Gender, HealthProfile, IntakeLevel,
    LifestyleProfile, RiskAssessment, RiskLevel, SmokingStatus, StressLevel,
};
use wellpath::risk_scoring::{MAINTAIN_HABITS, PROVIDER_FOLLOW_UP};
use wellpath::{EngineConfig, HealthAssessmentEngine, RiskScorer, RuleBasedRiskScorer};

mod common;

fn scorer() -> RuleBasedRiskScorer {
    RuleBasedRiskScorer::with_config(RiskScoringConfig::default())
}

fn assessment(risks: &[RiskAssessment], condition: Condition) -> &RiskAssessment {
    risks
        .iter()
        .find(|risk| risk.condition == condition)
        .unwrap_or_else(|| panic!("missing assessment for {condition:?}"))
}

#[test]
fn test_risk_level_thresholds() {
    assert_eq!(RiskLevel::from_score(0), RiskLevel::Low);
    assert_eq!(RiskLevel::from_score(19), RiskLevel::Low);
    assert_eq!(RiskLevel::from_score(20), RiskLevel::Moderate);
    assert_eq!(RiskLevel::from_score(39), RiskLevel::Moderate);
    assert_eq!(RiskLevel::from_score(40), RiskLevel::High);
    assert_eq!(RiskLevel::from_score(59), RiskLevel::High);
    assert_eq!(RiskLevel::from_score(60), RiskLevel::VeryHigh);
    assert_eq!(RiskLevel::from_score(100), RiskLevel::VeryHigh);
}

#[test]
fn test_healthy_profile_is_low_risk() {
    let risks = scorer()
        .assess(&common::healthy_profile(), &LifestyleProfile::default())
        .unwrap();

    // No glucose reading: diabetes is not scored
    let conditions: Vec<Condition> = risks.iter().map(|risk| risk.condition).collect();
    assert_eq!(
        conditions,
        vec![
            Condition::CardiovascularDisease,
            Condition::Hypertension,
            Condition::Obesity
        ]
    );
    for risk in &risks {
        assert_eq!(risk.score, 5);
        assert_eq!(risk.risk_level, RiskLevel::Low);
        assert!(risk.increasing_factors.is_empty());
        assert_eq!(risk.recommendations, vec![MAINTAIN_HABITS.to_owned()]);
    }
}

#[test]
fn test_high_blood_pressure_obese_middle_aged_male() {
    let profile =
        common::with_blood_pressure(common::profile(50, Gender::Male, 175.0, 95.0), 150, 95);
    let risks = scorer().assess(&profile, &LifestyleProfile::default()).unwrap();

    let cardiovascular = assessment(&risks, Condition::CardiovascularDisease);
    // 5 base + 15 age + 15 BMI + 25 blood pressure
    assert_eq!(cardiovascular.score, 60);
    assert_eq!(cardiovascular.risk_level, RiskLevel::VeryHigh);
    assert_eq!(
        cardiovascular.increasing_factors,
        vec![
            "Age over 45".to_owned(),
            "BMI of 30 or higher".to_owned(),
            "Blood pressure at or above 140/90".to_owned(),
        ]
    );
    assert_eq!(
        cardiovascular.recommendations.last().map(String::as_str),
        Some(PROVIDER_FOLLOW_UP)
    );

    let hypertension = assessment(&risks, Condition::Hypertension);
    // 5 base + 8 age + 15 BMI + 40 blood pressure
    assert_eq!(hypertension.score, 68);
    assert!(hypertension.risk_level >= RiskLevel::High);

    let obesity = assessment(&risks, Condition::Obesity);
    assert_eq!(obesity.score, 55);
    assert_eq!(obesity.risk_level, RiskLevel::High);
}

#[test]
fn test_only_one_bracket_per_family_fires() {
    let profile =
        common::with_blood_pressure(common::profile(70, Gender::Female, 165.0, 60.0), 185, 125);
    let risks = scorer().assess(&profile, &LifestyleProfile::default()).unwrap();
    let cardiovascular = assessment(&risks, Condition::CardiovascularDisease);

    let age_factors = cardiovascular
        .increasing_factors
        .iter()
        .filter(|factor| factor.starts_with("Age over"))
        .count();
    let pressure_factors = cardiovascular
        .increasing_factors
        .iter()
        .filter(|factor| factor.starts_with("Blood pressure"))
        .count();
    assert_eq!(age_factors, 1);
    assert_eq!(pressure_factors, 1);
    assert!(cardiovascular
        .increasing_factors
        .contains(&"Age over 65".to_owned()));
}

#[test]
fn test_scores_clamp_to_bounds() {
    let mut profile = common::with_cholesterol(
        common::with_blood_pressure(common::profile(70, Gender::Male, 175.0, 140.0), 190, 125),
        260.0,
        35.0,
    );
    profile.conditions.insert("Hypertension".to_owned());
    profile.conditions.insert("Type 2 Diabetes".to_owned());
    profile.family_history.insert("heart disease".to_owned());
    let lifestyle = LifestyleProfile {
        smoking_status: SmokingStatus::Current,
        alcohol_consumption: AlcoholConsumption::Heavy,
        exercise_frequency: ActivityLevel::Sedentary,
        stress_level: StressLevel::High,
        ..LifestyleProfile::default()
    };
    let risks = scorer().assess(&profile, &lifestyle).unwrap();
    let cardiovascular = assessment(&risks, Condition::CardiovascularDisease);
    assert_eq!(cardiovascular.score, 100);
    assert!(cardiovascular
        .increasing_factors
        .contains(&"Existing diabetes".to_owned()));

    let mut lifestyle = LifestyleProfile {
        exercise_frequency: ActivityLevel::VeryActive,
        ..LifestyleProfile::default()
    };
    lifestyle.diet_quality.produce_intake = IntakeLevel::High;
    let risks = scorer().assess(&common::healthy_profile(), &lifestyle).unwrap();
    let cardiovascular = assessment(&risks, Condition::CardiovascularDisease);
    assert_eq!(cardiovascular.score, 0);
    assert_eq!(
        cardiovascular.decreasing_factors,
        vec![
            "Regular vigorous exercise".to_owned(),
            "High fruit and vegetable intake".to_owned(),
        ]
    );
}

#[test]
fn test_diabetes_requires_glucose_and_uses_mg_dl() {
    let risks = scorer()
        .assess(
            &common::with_glucose(common::healthy_profile(), 130.0),
            &LifestyleProfile::default(),
        )
        .unwrap();
    let diabetes = assessment(&risks, Condition::Type2Diabetes);
    assert_eq!(diabetes.score, 40);
    assert_eq!(diabetes.risk_level, RiskLevel::High);
    // Missing lipid panel lowers confidence by one penalty step
    assert!((diabetes.confidence - 0.70).abs() < 1e-9);

    let risks = scorer()
        .assess(
            &common::with_glucose(common::healthy_profile(), 110.0),
            &LifestyleProfile::default(),
        )
        .unwrap();
    assert_eq!(assessment(&risks, Condition::Type2Diabetes).score, 25);
}

#[test]
fn test_hdl_direction() {
    let low_hdl = common::with_cholesterol(common::healthy_profile(), 180.0, 35.0);
    let risks = scorer().assess(&low_hdl, &LifestyleProfile::default()).unwrap();
    assert!(assessment(&risks, Condition::CardiovascularDisease)
        .increasing_factors
        .contains(&"HDL cholesterol below 40 mg/dL".to_owned()));

    let high_hdl = common::with_cholesterol(common::healthy_profile(), 180.0, 65.0);
    let risks = scorer().assess(&high_hdl, &LifestyleProfile::default()).unwrap();
    assert!(assessment(&risks, Condition::CardiovascularDisease)
        .decreasing_factors
        .contains(&"HDL cholesterol above 60 mg/dL".to_owned()));
}

#[test]
fn test_confidence_reflects_missing_readings() {
    let bare = scorer()
        .assess(&common::healthy_profile(), &LifestyleProfile::default())
        .unwrap();
    let cardiovascular = assessment(&bare, Condition::CardiovascularDisease);
    assert!((cardiovascular.confidence - 0.65).abs() < 1e-9);
    assert!((assessment(&bare, Condition::Obesity).confidence - 0.90).abs() < 1e-9);

    let complete = common::with_cholesterol(
        common::with_blood_pressure(common::healthy_profile(), 115, 75),
        180.0,
        50.0,
    );
    let risks = scorer().assess(&complete, &LifestyleProfile::default()).unwrap();
    let cardiovascular = assessment(&risks, Condition::CardiovascularDisease);
    assert!((cardiovascular.confidence - 0.85).abs() < 1e-9);
}

#[test]
fn test_invalid_profile_produces_no_scores() {
    let profile = common::profile(0, Gender::Male, 175.0, 70.0);
    let error = scorer().assess(&profile, &LifestyleProfile::default()).unwrap_err();
    assert!(error.is_validation());
}

#[test]
fn test_scores_stay_in_range_across_profiles() {
    for age in [20, 40, 50, 60, 80] {
        for weight in [45.0, 70.0, 100.0, 150.0] {
            let profile = common::with_blood_pressure(
                common::profile(age, Gender::Other, 170.0, weight),
                100 + age,
                70 + age / 2,
            );
            for risk in scorer().assess(&profile, &LifestyleProfile::default()).unwrap() {
                assert!(risk.score <= 100);
                assert_eq!(risk.risk_level, RiskLevel::from_score(risk.score));
                assert!((0.0..=1.0).contains(&risk.confidence));
            }
        }
    }
}

struct FixedScorer;

impl RiskScorer for FixedScorer {
    fn assess(
        &self,
        _profile: &HealthProfile,
        _lifestyle: &LifestyleProfile,
    ) -> AppResult<Vec<RiskAssessment>> {
        Ok(vec![RiskAssessment {
            condition: Condition::Obesity,
            score: 75,
            risk_level: RiskLevel::VeryHigh,
            increasing_factors: vec!["Fixed".to_owned()],
            decreasing_factors: Vec::new(),
            recommendations: vec!["Fixed advice".to_owned()],
            confidence: 1.0,
        }])
    }

    fn name(&self) -> &'static str {
        "fixed"
    }
}

#[test]
fn test_engine_accepts_custom_scorer() {
    let engine = HealthAssessmentEngine::with_scorer(FixedScorer, EngineConfig::default());
    let report = engine
        .assess(&common::request(common::healthy_profile()))
        .unwrap();

    assert_eq!(report.risks.len(), 1);
    assert_eq!(report.risks[0].score, 75);
    assert!(report
        .coaching
        .iter()
        .any(|message| message.title == "Elevated Obesity Risk"));
}
