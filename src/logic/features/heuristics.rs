//! Heuristic Signals - Rule-Based Scam Indicators
//!
//! Trích xuất các heuristic signals từ raw posting text và settings.
//! Pure function of the posting - deterministic, no side effects.
//!
//! The signals feed both the feature row and the explanation text. They
//! are NOT the classifier's decision boundary - just simple rules.

use serde::{Deserialize, Serialize};

use crate::constants::{SHORT_DESCRIPTION_MIN_CHARS, SUSPICIOUS_PHRASES};
use crate::logic::posting::JobPosting;

/// The four rule-based booleans derived from a posting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeuristicSignals {
    /// Combined text contains a known scam phrase
    pub suspicious_phrases: bool,
    /// Trimmed description shorter than the minimum
    pub short_description: bool,
    /// Posting has no company logo
    pub missing_logo: bool,
    /// Posting has no screening questions
    pub no_questions: bool,
}

impl HeuristicSignals {
    /// True if any signal fired
    pub fn any(&self) -> bool {
        self.suspicious_phrases || self.short_description || self.missing_logo || self.no_questions
    }
}

/// Compute all four signals for a posting.
pub fn extract(posting: &JobPosting) -> HeuristicSignals {
    let combined = posting.combined_text().to_lowercase();

    HeuristicSignals {
        suspicious_phrases: SUSPICIOUS_PHRASES.iter().any(|phrase| combined.contains(phrase)),
        short_description: posting.description.trim().chars().count() < SHORT_DESCRIPTION_MIN_CHARS,
        missing_logo: !posting.has_company_logo,
        no_questions: !posting.has_questions,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn posting_with_description(description: &str) -> JobPosting {
        JobPosting {
            description: description.to_string(),
            has_company_logo: true,
            has_questions: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_suspicious_phrases_case_insensitive() {
        let posting = posting_with_description("Immediate Start, quick money guaranteed!");
        let signals = extract(&posting);
        assert!(signals.suspicious_phrases);
    }

    #[test]
    fn test_suspicious_phrases_negative() {
        let posting = JobPosting {
            title: "Senior backend engineer, 5 years experience, competitive salary".to_string(),
            company_profile: "Senior backend engineer, 5 years experience, competitive salary"
                .to_string(),
            description: "Senior backend engineer, 5 years experience, competitive salary"
                .to_string(),
            requirements: "Senior backend engineer, 5 years experience, competitive salary"
                .to_string(),
            benefits: "Senior backend engineer, 5 years experience, competitive salary".to_string(),
            has_company_logo: true,
            has_questions: true,
            ..Default::default()
        };
        assert!(!extract(&posting).suspicious_phrases);
    }

    #[test]
    fn test_suspicious_phrase_matches_across_any_field() {
        let posting = JobPosting {
            benefits: "Work From Home fridays".to_string(),
            has_company_logo: true,
            has_questions: true,
            ..Default::default()
        };
        assert!(extract(&posting).suspicious_phrases);
    }

    #[test]
    fn test_short_description_boundary() {
        // 49 characters -> flagged, 50 -> not
        let short = posting_with_description(&"x".repeat(49));
        assert!(extract(&short).short_description);

        let exact = posting_with_description(&"x".repeat(50));
        assert!(!extract(&exact).short_description);
    }

    #[test]
    fn test_short_description_trims_whitespace() {
        let padded = format!("   {}   ", "x".repeat(49));
        let posting = posting_with_description(&padded);
        assert!(extract(&posting).short_description);
    }

    #[test]
    fn test_settings_signals() {
        let posting = JobPosting {
            description: "x".repeat(60),
            has_company_logo: false,
            has_questions: false,
            ..Default::default()
        };
        let signals = extract(&posting);
        assert!(signals.missing_logo);
        assert!(signals.no_questions);
        assert!(!signals.short_description);
    }

    #[test]
    fn test_deterministic() {
        let posting = posting_with_description("Quick money, no experience needed");
        assert_eq!(extract(&posting), extract(&posting));
    }

    #[test]
    fn test_any() {
        let calm = JobPosting {
            description: "x".repeat(60),
            has_company_logo: true,
            has_questions: true,
            ..Default::default()
        };
        assert!(!extract(&calm).any());
        assert!(extract(&JobPosting::default()).any());
    }
}
