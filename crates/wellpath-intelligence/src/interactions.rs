// ABOUTME: Pairwise medication interaction checking against a static reference table
// ABOUTME: Canonical sorted pairs, order-independent findings, and lookup coverage counts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellpath Contributors

//! # Medication Interactions
//!
//! The reference table is built once and never mutated. A pair missing from
//! the table yields no finding: absence means "no known interaction", which is
//! not the same as "verified safe". Entries with [`Severity::None`] are the
//! "checked, no clinically significant interaction" case and are reported.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::OnceLock;
use tracing::debug;
use wellpath_core::models::{
    normalize_label, InteractionFinding, InteractionReport, Medication, Severity,
};

/// One reference table entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionEntry {
    /// Severity of the combination
    pub severity: Severity,
    /// What the combination does
    pub description: &'static str,
    /// What to do about it
    pub recommendation: &'static str,
}

type PairKey = (String, String);

static INTERACTION_TABLE: OnceLock<HashMap<PairKey, InteractionEntry>> = OnceLock::new();

const REFERENCE_ENTRIES: [(&str, &str, Severity, &str, &str); 17] = [
    (
        "warfarin",
        "aspirin",
        Severity::Severe,
        "Aspirin adds antiplatelet effects to warfarin anticoagulation and sharply raises bleeding risk",
        "Avoid the combination unless a prescriber has explicitly directed it; watch for bleeding",
    ),
    (
        "warfarin",
        "ibuprofen",
        Severity::Severe,
        "NSAIDs increase bleeding risk and can raise the anticoagulant effect of warfarin",
        "Avoid ibuprofen; ask about acetaminophen for pain relief",
    ),
    (
        "warfarin",
        "naproxen",
        Severity::Severe,
        "NSAIDs increase bleeding risk and can raise the anticoagulant effect of warfarin",
        "Avoid naproxen; ask about acetaminophen for pain relief",
    ),
    (
        "simvastatin",
        "clarithromycin",
        Severity::Severe,
        "Clarithromycin blocks simvastatin metabolism (CYP3A4), raising the risk of muscle breakdown",
        "Pause simvastatin during clarithromycin treatment or use another antibiotic",
    ),
    (
        "atorvastatin",
        "clarithromycin",
        Severity::Severe,
        "Clarithromycin raises atorvastatin levels (CYP3A4), increasing the risk of muscle toxicity",
        "Limit the atorvastatin dose or pause it during treatment, as directed by a prescriber",
    ),
    (
        "sertraline",
        "tramadol",
        Severity::Severe,
        "Both raise serotonin levels; the combination can cause serotonin syndrome and lowers the seizure threshold",
        "Avoid the combination; seek care for agitation, fever, or muscle twitching",
    ),
    (
        "lisinopril",
        "spironolactone",
        Severity::Moderate,
        "Both raise potassium; together they can cause hyperkalemia",
        "Monitor potassium and kidney function regularly",
    ),
    (
        "lisinopril",
        "ibuprofen",
        Severity::Moderate,
        "NSAIDs blunt the blood pressure effect of ACE inhibitors and can strain the kidneys",
        "Use the lowest NSAID dose for the shortest time and monitor blood pressure",
    ),
    (
        "aspirin",
        "ibuprofen",
        Severity::Moderate,
        "Ibuprofen can block the cardioprotective effect of low-dose aspirin and adds bleeding risk",
        "Take aspirin at least 30 minutes before ibuprofen, or ask about alternatives",
    ),
    (
        "simvastatin",
        "amlodipine",
        Severity::Moderate,
        "Amlodipine raises simvastatin levels, increasing the risk of muscle pain",
        "Keep simvastatin at or below 20 mg daily with amlodipine",
    ),
    (
        "sertraline",
        "ibuprofen",
        Severity::Moderate,
        "SSRIs combined with NSAIDs increase the risk of gastrointestinal bleeding",
        "Consider a stomach-protecting medication or an alternative pain reliever",
    ),
    (
        "clopidogrel",
        "omeprazole",
        Severity::Moderate,
        "Omeprazole reduces activation of clopidogrel (CYP2C19), weakening its antiplatelet effect",
        "Ask about switching to pantoprazole",
    ),
    (
        "levothyroxine",
        "calcium_carbonate",
        Severity::Moderate,
        "Calcium binds levothyroxine in the gut and reduces its absorption",
        "Separate doses by at least 4 hours",
    ),
    (
        "metformin",
        "lisinopril",
        Severity::Mild,
        "ACE inhibitors can slightly increase the glucose-lowering effect of metformin",
        "Watch for symptoms of low blood sugar when starting or adjusting either medication",
    ),
    (
        "amlodipine",
        "atorvastatin",
        Severity::Mild,
        "Amlodipine can modestly raise atorvastatin levels",
        "No change usually needed; report unexplained muscle pain",
    ),
    (
        "acetaminophen",
        "amoxicillin",
        Severity::None,
        "No clinically significant interaction is known",
        "No action needed",
    ),
    (
        "metformin",
        "atorvastatin",
        Severity::None,
        "No clinically significant interaction is known",
        "No action needed",
    ),
];

/// Sort two identifiers into a canonical pair
fn canonical_pair(first: &str, second: &str) -> PairKey {
    if first <= second {
        (first.to_owned(), second.to_owned())
    } else {
        (second.to_owned(), first.to_owned())
    }
}

fn interaction_table() -> &'static HashMap<PairKey, InteractionEntry> {
    INTERACTION_TABLE.get_or_init(|| {
        REFERENCE_ENTRIES
            .iter()
            .map(|(first, second, severity, description, recommendation)| {
                (
                    canonical_pair(first, second),
                    InteractionEntry {
                        severity: *severity,
                        description: *description,
                        recommendation: *recommendation,
                    },
                )
            })
            .collect()
    })
}

/// Look up a pair in either order
#[must_use]
pub fn lookup(first: &str, second: &str) -> Option<&'static InteractionEntry> {
    interaction_table().get(&canonical_pair(first, second))
}

/// Number of entries in the reference table
#[must_use]
pub fn table_size() -> usize {
    interaction_table().len()
}

/// Check every unordered pair of interaction keys
///
/// `keys` maps an interaction key to the identifier reported in findings.
fn check_keys(keys: &BTreeMap<String, String>) -> InteractionReport {
    let entries: Vec<(&String, &String)> = keys.iter().collect();
    let mut report = InteractionReport::default();

    for (index, (first_key, first_id)) in entries.iter().enumerate() {
        for (second_key, second_id) in &entries[index + 1..] {
            report.pairs_checked += 1;
            let Some(entry) = lookup(first_key, second_key) else {
                report.unknown_pairs += 1;
                continue;
            };
            let (low, high) = canonical_pair(first_id, second_id);
            report.findings.push(InteractionFinding {
                medication_ids: [low, high],
                severity: entry.severity,
                description: entry.description.to_owned(),
                recommendation: entry.recommendation.to_owned(),
            });
        }
    }

    report.findings.sort_by(|a, b| {
        b.severity
            .cmp(&a.severity)
            .then_with(|| a.medication_ids.cmp(&b.medication_ids))
    });
    report
}

/// Check raw medication identifiers
///
/// Identifiers are normalized, duplicates collapse, and findings report the
/// normalized identifiers.
#[must_use]
pub fn check_interactions<S: AsRef<str>>(ids: &[S]) -> Vec<InteractionFinding> {
    let keys: BTreeMap<String, String> = ids
        .iter()
        .map(|id| normalize_label(id.as_ref()))
        .filter(|key| !key.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(|key| (key.clone(), key))
        .collect();
    check_keys(&keys).findings
}

/// Check the active medications of a medication list
///
/// Findings carry medication `id`s. When several active entries share an
/// interaction key, the smallest id represents them.
#[must_use]
pub fn check_medications(medications: &[Medication]) -> InteractionReport {
    let mut keys: BTreeMap<String, String> = BTreeMap::new();
    for medication in medications.iter().filter(|m| m.is_active()) {
        let key = medication.interaction_key();
        if key.is_empty() {
            continue;
        }
        keys.entry(key)
            .and_modify(|existing| {
                if medication.id < *existing {
                    existing.clone_from(&medication.id);
                }
            })
            .or_insert_with(|| medication.id.clone());
    }

    let report = check_keys(&keys);
    debug!(
        active = keys.len(),
        pairs = report.pairs_checked,
        findings = report.findings.len(),
        unknown = report.unknown_pairs,
        "Checked medication interactions"
    );
    report
}
