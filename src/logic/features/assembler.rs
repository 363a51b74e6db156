//! Feature Assembler - Union, Zero-Fill, Project
//!
//! Combines the vectorized text block and the settings/heuristic row into
//! one row aligned to the schema column order.
//!
//! Reconciliation rules:
//! - Expected column absent from the union -> 0 (vocabulary drift is
//!   tolerated, not fatal)
//! - Union key absent from the schema -> dropped silently
//! - Name collision between a vocabulary term and a settings column ->
//!   the settings value wins

use std::collections::HashMap;

use crate::logic::posting::JobPosting;
use crate::logic::text::TfidfVectorizer;

use super::heuristics::HeuristicSignals;
use super::row::FeatureRow;
use super::schema::FeatureSchema;

/// Column names of the settings/heuristic block, as used at training time.
pub const SETTINGS_COLUMNS: &[&str] = &[
    "telecommuting",
    "has_company_logo",
    "has_questions",
    "suspicious_phrases",
    "short_description",
    "missing_logo",
    "no_questions",
];

fn flag(value: bool) -> f32 {
    if value {
        1.0
    } else {
        0.0
    }
}

/// The seven 0/1 settings values, in `SETTINGS_COLUMNS` order.
fn settings_row(posting: &JobPosting, signals: &HeuristicSignals) -> [f32; 7] {
    [
        flag(posting.telecommuting),
        flag(posting.has_company_logo),
        flag(posting.has_questions),
        flag(signals.suspicious_phrases),
        flag(signals.short_description),
        flag(signals.missing_logo),
        flag(signals.no_questions),
    ]
}

/// Assemble the classifier input row for one posting.
///
/// Never fails: an empty schema produces an empty row, an empty
/// vocabulary produces a row of settings values and zeros.
pub fn assemble(
    posting: &JobPosting,
    signals: &HeuristicSignals,
    vectorizer: &TfidfVectorizer,
    schema: &FeatureSchema,
) -> FeatureRow {
    let text_values = vectorizer.transform(&posting.combined_text());

    // Union keyed by column name. Vocabulary terms first so a colliding
    // settings column overrides them.
    let mut union: HashMap<&str, f32> =
        HashMap::with_capacity(vectorizer.vocabulary_size() + SETTINGS_COLUMNS.len());

    for (term, &index) in vectorizer.vocabulary() {
        if let Some(&value) = text_values.get(index) {
            union.insert(term.as_str(), value);
        }
    }

    for (name, value) in SETTINGS_COLUMNS.iter().copied().zip(settings_row(posting, signals)) {
        union.insert(name, value);
    }

    // Ordered projection onto the schema; missing columns zero-fill,
    // unexpected union keys drop.
    let values = schema
        .columns()
        .iter()
        .map(|column| union.get(column.as_str()).copied().unwrap_or(0.0))
        .collect();

    FeatureRow::from_values(schema, values)
}

// ============================================================================
// TESTS
// ============================================================================
