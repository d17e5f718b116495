// ABOUTME: Coaching message output model
// ABOUTME: CoachingCategory, Priority, and CoachingMessage definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellpath Contributors

use super::insight::BehaviorCategory;
use serde::{Deserialize, Serialize};

/// Coaching message category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CoachingCategory {
    /// Sleep habits
    Sleep,
    /// Exercise habits
    Exercise,
    /// Medication adherence
    Medication,
    /// Nutrition habits
    Nutrition,
    /// Direct vital-sign breaches
    Vitals,
    /// Risk follow-ups and motivation
    General,
}

impl CoachingCategory {
    /// Serialized name, also the sort tie-breaker
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sleep => "sleep",
            Self::Exercise => "exercise",
            Self::Medication => "medication",
            Self::Nutrition => "nutrition",
            Self::Vitals => "vitals",
            Self::General => "general",
        }
    }
}

impl From<BehaviorCategory> for CoachingCategory {
    fn from(category: BehaviorCategory) -> Self {
        match category {
            BehaviorCategory::Sleep => Self::Sleep,
            BehaviorCategory::Exercise => Self::Exercise,
            BehaviorCategory::Medication => Self::Medication,
            BehaviorCategory::Nutrition => Self::Nutrition,
        }
    }
}

/// Message priority, ordered low to high
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Informational
    Low,
    /// Worth acting on
    Medium,
    /// Act now
    High,
}

/// One coaching message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CoachingMessage {
    /// Category
    pub category: CoachingCategory,
    /// Priority
    pub priority: Priority,
    /// Short title, unique per category within one assessment
    pub title: String,
    /// Message body
    pub message: String,
    /// Whether the message asks the user to do something
    pub actionable: bool,
    /// Concrete next step
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_action: Option<String>,
}
