// ABOUTME: Medication interaction output models
// ABOUTME: Severity, InteractionFinding, and the InteractionReport with lookup coverage counts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellpath Contributors

use serde::{Deserialize, Serialize};

/// Interaction severity, ordered from least to most severe
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Checked, no clinically significant interaction
    None,
    /// Minor interaction
    Mild,
    /// Monitor or adjust
    Moderate,
    /// Avoid the combination
    Severe,
}

/// A known interaction between two medications
///
/// `medication_ids` is always sorted, so the finding for `(A, B)` equals the
/// finding for `(B, A)`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InteractionFinding {
    /// Canonical (sorted) identifier pair
    pub medication_ids: [String; 2],
    /// Severity from the reference table
    pub severity: Severity,
    /// What the interaction does
    pub description: String,
    /// What to do about it
    pub recommendation: String,
}

/// Result of checking a medication list
///
/// A pair without a finding means "no known interaction", which is not the
/// same as "checked and safe"; `unknown_pairs` counts those pairs.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct InteractionReport {
    /// Findings ordered by severity, then identifier pair
    pub findings: Vec<InteractionFinding>,
    /// Unordered pairs examined
    pub pairs_checked: usize,
    /// Pairs with no table entry
    pub unknown_pairs: usize,
}
