// ABOUTME: Medication list model with lifecycle status
// ABOUTME: Only active medications participate in interaction checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellpath Contributors

use super::profile::normalize_label;
use serde::{Deserialize, Serialize};

/// Medication lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MedicationStatus {
    /// Currently taken
    #[default]
    Active,
    /// Course finished
    Completed,
    /// Stopped
    Discontinued,
    /// Paused
    OnHold,
}

/// A medication on the user's list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Medication {
    /// Caller-assigned identifier
    pub id: String,
    /// Drug name (generic names match the interaction table)
    pub name: String,
    /// Lifecycle status
    #[serde(default)]
    pub status: MedicationStatus,
}

impl Medication {
    /// Active medication with the given id and name
    pub fn active(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status: MedicationStatus::Active,
        }
    }

    /// Whether the medication is currently taken
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == MedicationStatus::Active
    }

    /// Identifier used for interaction table lookups
    #[must_use]
    pub fn interaction_key(&self) -> String {
        normalize_label(&self.name)
    }
}
