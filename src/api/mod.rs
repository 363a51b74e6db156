//! API - Boundary for the Presentation Layer
//!
//! Serde DTOs plus thin functions delegating to `logic`. The form UI
//! submits a `ClassifyRequest` and renders the `ClassifyResponse`; it
//! never touches pipeline internals.

use serde::{Deserialize, Serialize};

use crate::logic::features::schema::SchemaInfo;
use crate::logic::pipeline::{Detector, DetectorStatus, PipelineError};
use crate::logic::posting::JobPosting;

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// One form submission.
///
/// Text fields default to empty so a partially filled form stays valid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifyRequest {
    pub title: String,
    pub company_profile: String,
    pub description: String,
    pub requirements: String,
    pub benefits: String,
    pub telecommuting: bool,
    pub has_company_logo: bool,
    pub has_questions: bool,
}

impl ClassifyRequest {
    fn into_posting(self) -> JobPosting {
        JobPosting {
            title: self.title,
            company_profile: self.company_profile,
            description: self.description,
            requirements: self.requirements,
            benefits: self.benefits,
            telecommuting: self.telecommuting,
            has_company_logo: self.has_company_logo,
            has_questions: self.has_questions,
        }
    }
}

/// Label and rationale for the UI result box
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyResponse {
    pub label: String,
    pub reasons: Vec<String>,
    pub inference_time_us: u64,
}

// ============================================================================
// COMMANDS
// ============================================================================

/// Run one classification for the form.
pub fn classify(
    detector: &Detector,
    request: ClassifyRequest,
) -> Result<ClassifyResponse, PipelineError> {
    let posting = request.into_posting();
    let result = detector.classify(&posting)?;

    Ok(ClassifyResponse {
        label: result.label.as_str().to_string(),
        reasons: result.reasons,
        inference_time_us: result.inference_time_us,
    })
}

/// Detector status for the UI header.
pub fn status(detector: &Detector) -> DetectorStatus {
    detector.status()
}

/// Expected-column details for the diagnostics view.
pub fn schema(detector: &Detector) -> SchemaInfo {
    SchemaInfo::of(detector.schema())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::features::{FeatureRow, FeatureSchema};
    use crate::logic::model::{ClassifierEngine, InferenceError, Verdict};
    use crate::logic::text::TfidfVectorizer;
    use std::collections::HashMap;

    struct AlwaysScam;

    impl ClassifierEngine for AlwaysScam {
        fn predict(&self, _row: &FeatureRow) -> Result<Verdict, InferenceError> {
            Ok(Verdict::from_raw(1, 5, "stub"))
        }

        fn is_loaded(&self) -> bool {
            true
        }

        fn model_name(&self) -> String {
            "stub".to_string()
        }
    }

    fn detector() -> Detector {
        let vectorizer = TfidfVectorizer::new(HashMap::from([("money".to_string(), 0)]), vec![1.0]);
        let schema = FeatureSchema::new(vec![
            "missing_logo".to_string(),
            "no_questions".to_string(),
            "money".to_string(),
        ]);
        Detector::with_engine(vectorizer, schema, Box::new(AlwaysScam))
    }

    #[test]
    fn test_classify_roundtrip() {
        let detector = detector();
        let response = classify(&detector, ClassifyRequest::default()).unwrap();
        assert_eq!(response.label, "scam");
        assert!(!response.reasons.is_empty());
    }

    #[test]
    fn test_status_and_schema_views() {
        let detector = detector();
        assert!(status(&detector).model_loaded);

        let info = schema(&detector);
        assert_eq!(info.column_count, 3);
        assert_eq!(info.column_names[2], "money");
    }

    #[test]
    fn test_request_defaults_missing_fields() {
        let request: ClassifyRequest =
            serde_json::from_str(r#"{"title": "Engineer", "has_company_logo": true}"#).unwrap();
        assert_eq!(request.title, "Engineer");
        assert_eq!(request.description, "");
        assert!(request.has_company_logo);
        assert!(!request.telecommuting);
    }

    #[test]
    fn test_into_posting_preserves_fields() {
        let request = ClassifyRequest {
            title: "Engineer".to_string(),
            description: "Build the platform".to_string(),
            telecommuting: true,
            ..Default::default()
        };
        let posting = request.into_posting();
        assert_eq!(posting.title, "Engineer");
        assert_eq!(posting.description, "Build the platform");
        assert!(posting.telecommuting);
    }

    #[test]
    fn test_response_serializes() {
        let response = ClassifyResponse {
            label: "scam".to_string(),
            reasons: vec!["Missing company logo is suspicious.".to_string()],
            inference_time_us: 42,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["label"], "scam");
        assert_eq!(json["reasons"][0], "Missing company logo is suspicious.");
    }
}
