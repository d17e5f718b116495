// ABOUTME: Coaching message synthesis from behavior insights, vital signs, and risk assessments
// ABOUTME: Fixed message lookup, vital alerts, risk follow-ups, dedup, and deterministic ordering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellpath Contributors

//! # Coaching
//!
//! The synthesizer never fails. Vital-sign alerts are evaluated directly on the
//! latest readings, so a breach always yields a high-priority message even when
//! every behavior insight is positive.

use crate::behavior_analysis::observation_keys as keys;
use crate::config::intelligence::CoachingConfig;
use crate::config::EngineConfig;
use chrono::Datelike;
use tracing::debug;
use wellpath_core::models::{
    BehaviorCategory, BehaviorInsight, CoachingCategory, CoachingMessage, HealthProfile,
    Priority, RiskAssessment, RiskLevel, Sentiment,
};

/// Title of the adherence alert
pub const ADHERENCE_ALERT_TITLE: &str = "Medication Adherence Needs Attention";
/// Title of the blood pressure crisis alert
pub const BP_CRISIS_TITLE: &str = "Blood Pressure Critically High";
/// Title of the blood pressure alert
pub const BP_HIGH_TITLE: &str = "Blood Pressure Above Target";
/// Title of the fasting glucose alert
pub const GLUCOSE_HIGH_TITLE: &str = "High Fasting Glucose";
/// Title of the resting heart rate alert
pub const RESTING_HR_TITLE: &str = "Elevated Resting Heart Rate";

/// (category, observation fragment, title, message, action)
type CoachingTemplate = (
    BehaviorCategory,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
);

const COACHING_TEMPLATES: [CoachingTemplate; 17] = [
    (
        BehaviorCategory::Sleep,
        keys::SLEEP_SHORT,
        "Get More Sleep",
        "Your recent nights are shorter than the 7 to 9 hours adults need.",
        "Move your bedtime 30 minutes earlier this week",
    ),
    (
        BehaviorCategory::Sleep,
        keys::SLEEP_LONG,
        "Check Your Sleep Quality",
        "You are sleeping longer than 9 hours on average, which can point to poor sleep quality.",
        "Keep a fixed wake time and note how rested you feel",
    ),
    (
        BehaviorCategory::Sleep,
        keys::SLEEP_IRREGULAR,
        "Keep a Steady Sleep Schedule",
        "Your sleep duration swings a lot from night to night.",
        "Aim for the same amount of sleep every night, including weekends",
    ),
    (
        BehaviorCategory::Sleep,
        keys::BEDTIME_INCONSISTENT,
        "Set a Regular Bedtime",
        "Your bedtime shifts by more than an hour across the week.",
        "Pick a bedtime and keep it within 30 minutes each night",
    ),
    (
        BehaviorCategory::Sleep,
        keys::WAKE_INCONSISTENT,
        "Wake Up at the Same Time",
        "Your wake time shifts a lot across the week.",
        "Set one alarm time for every day of the week",
    ),
    (
        BehaviorCategory::Sleep,
        keys::SLEEP_QUALITY_LOW,
        "Improve Sleep Quality",
        "You rate your recent sleep as poor.",
        "Keep the bedroom dark and cool, and avoid screens for an hour before bed",
    ),
    (
        BehaviorCategory::Exercise,
        keys::EXERCISE_INFREQUENT,
        "Move More This Week",
        "You are exercising less often than the recommended minimum.",
        "Schedule three short sessions on fixed days this week",
    ),
    (
        BehaviorCategory::Exercise,
        keys::EXERCISE_LOW_INTENSITY,
        "Add Some Intensity",
        "Most of your sessions are low intensity.",
        "Add brisk intervals to two sessions this week",
    ),
    (
        BehaviorCategory::Exercise,
        keys::EXERCISE_GAPS,
        "Build a Consistent Routine",
        "Your activity comes in bursts with inactive weeks in between.",
        "Plan at least one session every week, even a short walk",
    ),
    (
        BehaviorCategory::Exercise,
        keys::EXERCISE_OVERTRAINING,
        "Schedule Recovery Days",
        "You train hard almost every day and leave little room for recovery.",
        "Swap one or two hard sessions for easy or rest days",
    ),
    (
        BehaviorCategory::Medication,
        keys::ADHERENCE_LOW,
        ADHERENCE_ALERT_TITLE,
        "You are missing a significant share of your scheduled doses.",
        "Use a pill organizer or a phone reminder tied to a daily routine",
    ),
    (
        BehaviorCategory::Medication,
        keys::ADHERENCE_DECLINING,
        "Get Back on Track With Medications",
        "Your adherence has slipped over your most recent doses.",
        "Set a fresh reminder and check what changed in your routine",
    ),
    (
        BehaviorCategory::Medication,
        keys::ADHERENCE_STREAK,
        "Talk to Your Care Team About Missed Doses",
        "You missed several doses in a row.",
        "Ask your pharmacist what to do after missed doses",
    ),
    (
        BehaviorCategory::Nutrition,
        keys::WATER_LOW,
        "Drink More Water",
        "Your water intake is below the daily target.",
        "Keep a water bottle nearby and refill it with every meal",
    ),
    (
        BehaviorCategory::Nutrition,
        keys::MEALS_FEW,
        "Eat Regular Meals",
        "You are eating fewer meals than recommended.",
        "Plan three regular meals and keep simple options on hand",
    ),
    (
        BehaviorCategory::Nutrition,
        keys::MEALS_MANY,
        "Plan Your Meals and Snacks",
        "You are eating very frequently throughout the day.",
        "Group snacks into planned meals",
    ),
    (
        BehaviorCategory::Nutrition,
        keys::MEALS_IRREGULAR,
        "Keep Regular Meal Times",
        "Your meal pattern changes a lot from day to day.",
        "Eat at roughly the same times each day",
    ),
];

/// (title, message), rotated by day number
const MOTIVATIONAL_MESSAGES: [(&str, &str); 4] = [
    (
        "Small Steps Add Up",
        "Keep logging your habits; small daily choices drive long-term health.",
    ),
    (
        "Consistency Beats Intensity",
        "Showing up regularly matters more than any single perfect day.",
    ),
    (
        "Celebrate Your Progress",
        "Take a moment to notice what is going well and build on it.",
    ),
    (
        "Stay Curious About Your Health",
        "Check in on your sleep, movement, and meals this week.",
    ),
];

const fn achievement_title(category: BehaviorCategory) -> &'static str {
    match category {
        BehaviorCategory::Sleep => "Great Sleep Habits",
        BehaviorCategory::Exercise => "Strong Exercise Routine",
        BehaviorCategory::Medication => "Excellent Medication Adherence",
        BehaviorCategory::Nutrition => "Balanced Nutrition",
    }
}

const fn fallback_title(category: BehaviorCategory) -> &'static str {
    match category {
        BehaviorCategory::Sleep => "Improve Your Sleep Habits",
        BehaviorCategory::Exercise => "Improve Your Exercise Habits",
        BehaviorCategory::Medication => "Improve Your Medication Routine",
        BehaviorCategory::Nutrition => "Improve Your Nutrition Habits",
    }
}

fn actionable(
    category: CoachingCategory,
    priority: Priority,
    title: &str,
    message: String,
    action: Option<String>,
) -> CoachingMessage {
    CoachingMessage {
        category,
        priority,
        title: title.to_owned(),
        message,
        actionable: true,
        suggested_action: action,
    }
}

/// Coaching message synthesizer
#[derive(Debug, Clone, Default)]
pub struct CoachingSynthesizer {
    config: CoachingConfig,
}

impl CoachingSynthesizer {
    /// Synthesizer using the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::global().coaching.clone())
    }

    /// Synthesizer using an explicit configuration
    #[must_use]
    pub const fn with_config(config: CoachingConfig) -> Self {
        Self { config }
    }

    /// Build the prioritized, deduplicated coaching list
    #[must_use]
    pub fn synthesize(
        &self,
        profile: &HealthProfile,
        risks: &[RiskAssessment],
        insights: &[BehaviorInsight],
    ) -> Vec<CoachingMessage> {
        let mut messages = Vec::new();

        for insight in insights {
            if insight.sentiment == Sentiment::Negative {
                messages.push(Self::insight_message(insight));
            }
            if let Some(message) = self.adherence_alert(insight) {
                messages.push(message);
            }
            if let Some(message) = self.achievement(insight) {
                messages.push(message);
            }
        }
        messages.extend(self.vital_alerts(profile));
        messages.extend(risks.iter().filter_map(Self::risk_follow_up));

        if messages.is_empty() {
            messages.push(Self::motivational(profile));
        }

        let mut messages = dedup_by_category_and_title(messages);
        messages.sort_by(|a, b| {
            b.priority
                .cmp(&a.priority)
                .then_with(|| a.category.as_str().cmp(b.category.as_str()))
                .then_with(|| a.title.cmp(&b.title))
        });

        debug!(
            messages = messages.len(),
            high = messages
                .iter()
                .filter(|message| message.priority == Priority::High)
                .count(),
            "Synthesized coaching messages"
        );
        messages
    }

    fn insight_message(insight: &BehaviorInsight) -> CoachingMessage {
        let priority = if insight.category == BehaviorCategory::Medication {
            Priority::High
        } else {
            Priority::Medium
        };

        let template = insight.observations.iter().find_map(|observation| {
            COACHING_TEMPLATES
                .iter()
                .find(|(category, fragment, ..)| {
                    *category == insight.category && observation.contains(fragment)
                })
        });

        match template {
            Some((_, _, title, message, action)) => actionable(
                insight.category.into(),
                priority,
                title,
                (*message).to_owned(),
                Some((*action).to_owned()),
            ),
            None => actionable(
                insight.category.into(),
                priority,
                fallback_title(insight.category),
                format!(
                    "Your recent {} habits scored {:.0} out of 100.",
                    insight.category.as_str(),
                    insight.score
                ),
                insight.suggestions.first().cloned(),
            ),
        }
    }

    fn adherence_alert(&self, insight: &BehaviorInsight) -> Option<CoachingMessage> {
        let ratio = insight.adherence_ratio?;
        if insight.category != BehaviorCategory::Medication
            || ratio >= self.config.adherence_alert_ratio
        {
            return None;
        }
        let taken_pct = ratio * 100.0;
        Some(actionable(
            CoachingCategory::Medication,
            Priority::High,
            ADHERENCE_ALERT_TITLE,
            format!("You took {taken_pct:.0}% of your scheduled doses."),
            Some("Use a pill organizer or a phone reminder tied to a daily routine".to_owned()),
        ))
    }

    fn achievement(&self, insight: &BehaviorInsight) -> Option<CoachingMessage> {
        if insight.sentiment != Sentiment::Positive
            || insight.score < self.config.achievement_min_score
        {
            return None;
        }
        Some(CoachingMessage {
            category: insight.category.into(),
            priority: Priority::Low,
            title: achievement_title(insight.category).to_owned(),
            message: format!(
                "Your {} score of {:.0} shows excellent habits. Keep it up!",
                insight.category.as_str(),
                insight.score
            ),
            actionable: false,
            suggested_action: None,
        })
    }

    fn vital_alerts(&self, profile: &HealthProfile) -> Vec<CoachingMessage> {
        let vitals = &self.config.vitals;
        let mut alerts = Vec::new();

        if let Some(bp) = profile.latest_blood_pressure() {
            let (systolic, diastolic) = (bp.systolic, bp.diastolic);
            if bp.at_or_above(vitals.systolic_crisis, vitals.diastolic_crisis) {
                alerts.push(actionable(
                    CoachingCategory::Vitals,
                    Priority::High,
                    BP_CRISIS_TITLE,
                    format!("Your latest reading of {systolic}/{diastolic} mmHg is in the crisis range."),
                    Some(
                        "Seek medical care right away, especially with chest pain or shortness of breath"
                            .to_owned(),
                    ),
                ));
            } else if bp.at_or_above(vitals.systolic_alert, vitals.diastolic_alert) {
                let (alert_systolic, alert_diastolic) =
                    (vitals.systolic_alert, vitals.diastolic_alert);
                alerts.push(actionable(
                    CoachingCategory::Vitals,
                    Priority::High,
                    BP_HIGH_TITLE,
                    format!(
                        "Your latest reading of {systolic}/{diastolic} mmHg is at or above {alert_systolic}/{alert_diastolic}."
                    ),
                    Some(
                        "Recheck after 5 minutes of rest and share the reading with your doctor"
                            .to_owned(),
                    ),
                ));
            }
        }

        if let Some(glucose) = profile.latest_blood_glucose() {
            let value = glucose.mg_dl();
            if value >= vitals.glucose_alert_mg_dl {
                let alert = vitals.glucose_alert_mg_dl;
                alerts.push(actionable(
                    CoachingCategory::Vitals,
                    Priority::High,
                    GLUCOSE_HIGH_TITLE,
                    format!(
                        "Your latest fasting glucose of {value:.0} mg/dL is at or above {alert:.0} mg/dL."
                    ),
                    Some("Schedule a follow-up test with your healthcare provider".to_owned()),
                ));
            }
        }

        if let Some(heart_rate) = profile.latest_heart_rate() {
            if heart_rate.value > vitals.resting_hr_alert {
                let (value, alert) = (heart_rate.value, vitals.resting_hr_alert);
                alerts.push(actionable(
                    CoachingCategory::Vitals,
                    Priority::Medium,
                    RESTING_HR_TITLE,
                    format!("Your latest resting heart rate of {value} bpm is above {alert} bpm."),
                    Some("Recheck at rest and mention it at your next appointment".to_owned()),
                ));
            }
        }
        alerts
    }

    fn risk_follow_up(risk: &RiskAssessment) -> Option<CoachingMessage> {
        let priority = match risk.risk_level {
            RiskLevel::VeryHigh => Priority::High,
            RiskLevel::High => Priority::Medium,
            RiskLevel::Low | RiskLevel::Moderate => return None,
        };
        let name = risk.condition.display_name();
        let factors = risk
            .increasing_factors
            .iter()
            .take(3)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        let score = risk.score;
        let message = if factors.is_empty() {
            format!("Your {name} risk score is {score} out of 100.")
        } else {
            format!("Your {name} risk score is {score} out of 100. Main factors: {factors}.")
        };
        Some(actionable(
            CoachingCategory::General,
            priority,
            &format!("Elevated {name} Risk"),
            message,
            risk.recommendations.first().cloned(),
        ))
    }

    /// Rotate by the day number of the newest reading so equal inputs pick the same message
    fn motivational(profile: &HealthProfile) -> CoachingMessage {
        let day = profile
            .newest_reading_at()
            .map_or(0, |timestamp| timestamp.date_naive().num_days_from_ce());
        let index = day.rem_euclid(MOTIVATIONAL_MESSAGES.len() as i32) as usize;
        let (title, message) = MOTIVATIONAL_MESSAGES[index];
        CoachingMessage {
            category: CoachingCategory::General,
            priority: Priority::Low,
            title: title.to_owned(),
            message: message.to_owned(),
            actionable: false,
            suggested_action: None,
        }
    }
}

/// Keep one message per (category, title): the highest priority, first seen on ties
fn dedup_by_category_and_title(messages: Vec<CoachingMessage>) -> Vec<CoachingMessage> {
    let mut kept: Vec<CoachingMessage> = Vec::with_capacity(messages.len());
    for message in messages {
        match kept
            .iter_mut()
            .find(|existing| existing.category == message.category && existing.title == message.title)
        {
            Some(existing) if message.priority > existing.priority => *existing = message,
            Some(_) => {}
            None => kept.push(message),
        }
    }
    kept
}
