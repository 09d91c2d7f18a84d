//! Preference extractor — asks the LLM for a fixed-shape list of career
//! preference records found in a transcript.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::extraction::prompts::{EXTRACTION_PROMPT_TEMPLATE, EXTRACTION_SYSTEM};
use crate::llm_client::LlmClient;

/// Categories of career preference the extractor recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreferenceType {
    Role,
    Industry,
    Location,
    Availability,
    DayRate,
    Skill,
}

/// A single extracted preference with the exact quote it came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedPreference {
    #[serde(rename = "type")]
    pub kind: PreferenceType,
    pub values: Vec<String>,
    /// 0.0 - 1.0, based on how unambiguous the phrasing was.
    pub confidence: f32,
    pub raw_text: String,
    /// True for hard constraints and deal-breakers ("only", "must", ...).
    #[serde(default)]
    pub requires_hard_validation: bool,
}

/// Full structured output of preference extraction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractionResult {
    #[serde(default)]
    pub preferences: Vec<ExtractedPreference>,
    #[serde(default)]
    pub should_confirm: bool,
}

/// Extracts preferences from a transcript using the LLM.
pub async fn extract_preferences(
    transcript: &str,
    llm: &LlmClient,
) -> Result<ExtractionResult, AppError> {
    let prompt = EXTRACTION_PROMPT_TEMPLATE.replace("{transcript}", transcript);
    llm.call_json::<ExtractionResult>(&prompt, EXTRACTION_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Preference extraction failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extraction_result_deserializes() {
        let json = r#"{
            "preferences": [
                {
                    "type": "role",
                    "values": ["CMO", "CFO"],
                    "confidence": 0.9,
                    "raw_text": "I'm interested in CMO or CFO roles",
                    "requires_hard_validation": false
                },
                {
                    "type": "day_rate",
                    "values": ["800"],
                    "confidence": 0.95,
                    "raw_text": "nothing below 800 a day",
                    "requires_hard_validation": true
                }
            ],
            "should_confirm": true
        }"#;
        let result: ExtractionResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.preferences.len(), 2);
        assert_eq!(result.preferences[0].kind, PreferenceType::Role);
        assert_eq!(result.preferences[1].kind, PreferenceType::DayRate);
        assert!(result.preferences[1].requires_hard_validation);
        assert!(result.should_confirm);
    }

    #[test]
    fn test_missing_hard_validation_defaults_false() {
        let json = r#"{
            "preferences": [
                {"type": "location", "values": ["London"], "confidence": 0.7, "raw_text": "maybe London"}
            ],
            "should_confirm": false
        }"#;
        let result: ExtractionResult = serde_json::from_str(json).unwrap();
        assert!(!result.preferences[0].requires_hard_validation);
    }

    #[test]
    fn test_empty_object_deserializes_to_default() {
        let result: ExtractionResult = serde_json::from_str("{}").unwrap();
        assert!(result.preferences.is_empty());
        assert!(!result.should_confirm);
    }

    #[test]
    fn test_preference_type_serde_snake_case() {
        let kind: PreferenceType = serde_json::from_str(r#""day_rate""#).unwrap();
        assert_eq!(kind, PreferenceType::DayRate);
        assert_eq!(
            serde_json::to_string(&PreferenceType::Availability).unwrap(),
            r#""availability""#
        );
    }
}
