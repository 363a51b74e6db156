//! Explanation Engine - Heuristic Rationale
//!
//! Maps the heuristic signals to fixed sentences, in fixed order.
//! The sentences reflect the rules, NOT the classifier's internals - the
//! explanation stays the same whichever label the model returns. Known
//! simplification, kept deliberately.

use crate::logic::features::HeuristicSignals;

/// Sentence emitted when the posting has no company logo
pub const MISSING_LOGO_REASON: &str = "Missing company logo is suspicious.";

/// Sentence emitted when the posting has no screening questions
pub const NO_QUESTIONS_REASON: &str = "Lack of screening questions may indicate fraud.";

/// Sentence emitted when a known scam phrase was found
pub const SUSPICIOUS_PHRASES_REASON: &str =
    "Contains common scam phrases like 'quick money', 'no experience'.";

/// Sentence emitted when the description is too short
pub const SHORT_DESCRIPTION_REASON: &str = "Job description is too short for a legit job.";

/// Fallback when no signal fired
pub const STANDARD_DETAILS_REASON: &str = "Job details appear standard and professional.";

/// Build the ordered explanation lines for a set of signals.
///
/// Order is fixed: missing logo, no questions, suspicious phrases, short
/// description. All-false signals collapse to the single fallback line.
pub fn explain(signals: &HeuristicSignals) -> Vec<String> {
    let mut reasons = Vec::new();

    if signals.missing_logo {
        reasons.push(MISSING_LOGO_REASON.to_string());
    }
    if signals.no_questions {
        reasons.push(NO_QUESTIONS_REASON.to_string());
    }
    if signals.suspicious_phrases {
        reasons.push(SUSPICIOUS_PHRASES_REASON.to_string());
    }
    if signals.short_description {
        reasons.push(SHORT_DESCRIPTION_REASON.to_string());
    }

    if reasons.is_empty() {
        reasons.push(STANDARD_DETAILS_REASON.to_string());
    }

    reasons
}

// ============================================================================
// TESTS
// ============================================================================
