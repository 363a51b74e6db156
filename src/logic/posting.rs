//! Job Posting - Raw Submission Input
//!
//! One posting per submission, owned by the caller.
//! KHÔNG chứa logic - chỉ data structures.

use serde::{Deserialize, Serialize};

/// A single job posting as entered in the form.
///
/// All text fields default to empty; the three settings come from the
/// form toggles.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: String,
    pub company_profile: String,
    pub description: String,
    pub requirements: String,
    pub benefits: String,
    pub telecommuting: bool,
    pub has_company_logo: bool,
    pub has_questions: bool,
}

impl JobPosting {
    /// Concatenate the five text fields with single-space separators.
    ///
    /// Empty fields contribute an empty segment, so double spaces may
    /// appear - that matches the training-time concatenation.
    pub fn combined_text(&self) -> String {
        [
            self.title.as_str(),
            self.company_profile.as_str(),
            self.description.as_str(),
            self.requirements.as_str(),
            self.benefits.as_str(),
        ]
        .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combined_text_joins_with_single_space() {
        let posting = JobPosting {
            title: "Engineer".to_string(),
            company_profile: "Acme".to_string(),
            description: "Build things".to_string(),
            requirements: "Rust".to_string(),
            benefits: "Coffee".to_string(),
            ..Default::default()
        };
        assert_eq!(posting.combined_text(), "Engineer Acme Build things Rust Coffee");
    }

    #[test]
    fn test_combined_text_keeps_empty_segments() {
        let posting = JobPosting {
            title: "Engineer".to_string(),
            description: "Build things".to_string(),
            ..Default::default()
        };
        // Empty fields leave double spaces rather than collapsing
        assert_eq!(posting.combined_text(), "Engineer  Build things  ");
    }
}
