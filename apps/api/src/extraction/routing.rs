//! Confidence-based routing for extracted preferences.
//!
//! Routing rules: hard constraints always need confirmation; otherwise
//! ≥0.80 is accepted outright, 0.50-0.79 gets a soft confirmation prompt,
//! and anything below 0.50 is dropped.

use serde::Serialize;

use crate::extraction::extractor::ExtractedPreference;

pub const AUTO_ADD_THRESHOLD: f32 = 0.80;
pub const SOFT_CONFIRM_THRESHOLD: f32 = 0.50;

/// Phrases that mark a hard constraint even when the model missed it.
const HARD_CONSTRAINT_PHRASES: &[&str] = &[
    "only",
    "just",
    "exclusively",
    "nothing else",
    "must",
    "need to",
    "have to",
    "required",
    "relocating",
    "moving to",
    "must be in",
    "won't consider",
    "definitely not",
    "never",
];

/// What the UI should do with an extracted preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Disposition {
    /// High confidence, commit without asking.
    AutoAdd,
    /// Hard constraint, always requires explicit approval.
    ConfirmHard,
    /// Mid confidence, show a soft confirmation prompt.
    ConfirmSoft,
    /// Too uncertain to act on.
    Reject,
}

impl Disposition {
    pub fn needs_confirmation(self) -> bool {
        matches!(self, Disposition::ConfirmHard | Disposition::ConfirmSoft)
    }
}

/// Routes one preference by validation flag and confidence.
pub fn route(preference: &ExtractedPreference) -> Disposition {
    if preference.requires_hard_validation {
        return Disposition::ConfirmHard;
    }
    if preference.confidence >= AUTO_ADD_THRESHOLD {
        Disposition::AutoAdd
    } else if preference.confidence >= SOFT_CONFIRM_THRESHOLD {
        Disposition::ConfirmSoft
    } else {
        Disposition::Reject
    }
}

/// Keyword backstop for hard-constraint phrasing the model did not flag.
pub fn has_hard_constraint_phrasing(raw_text: &str) -> bool {
    let lower = raw_text.to_lowercase();
    HARD_CONSTRAINT_PHRASES
        .iter()
        .any(|phrase| lower.contains(phrase))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::extractor::PreferenceType;

    fn preference(confidence: f32, hard: bool) -> ExtractedPreference {
        ExtractedPreference {
            kind: PreferenceType::Role,
            values: vec!["CFO".to_string()],
            confidence,
            raw_text: "interested in CFO roles".to_string(),
            requires_hard_validation: hard,
        }
    }

    #[test]
    fn test_hard_validation_always_confirms() {
        assert_eq!(route(&preference(0.99, true)), Disposition::ConfirmHard);
        assert_eq!(route(&preference(0.1, true)), Disposition::ConfirmHard);
    }

    #[test]
    fn test_high_confidence_auto_adds() {
        assert_eq!(route(&preference(0.80, false)), Disposition::AutoAdd);
        assert_eq!(route(&preference(0.95, false)), Disposition::AutoAdd);
    }

    #[test]
    fn test_mid_confidence_soft_confirms() {
        assert_eq!(route(&preference(0.50, false)), Disposition::ConfirmSoft);
        assert_eq!(route(&preference(0.79, false)), Disposition::ConfirmSoft);
    }

    #[test]
    fn test_low_confidence_rejects() {
        assert_eq!(route(&preference(0.49, false)), Disposition::Reject);
        assert_eq!(route(&preference(0.0, false)), Disposition::Reject);
    }

    #[test]
    fn test_needs_confirmation() {
        assert!(Disposition::ConfirmHard.needs_confirmation());
        assert!(Disposition::ConfirmSoft.needs_confirmation());
        assert!(!Disposition::AutoAdd.needs_confirmation());
        assert!(!Disposition::Reject.needs_confirmation());
    }

    #[test]
    fn test_hard_constraint_phrasing_detection() {
        assert!(has_hard_constraint_phrasing("I ONLY want remote work"));
        assert!(has_hard_constraint_phrasing("nothing below 800, that's required"));
        assert!(has_hard_constraint_phrasing("I'm relocating to Leeds"));
        assert!(!has_hard_constraint_phrasing("I quite like marketing roles"));
    }

    #[test]
    fn test_disposition_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&Disposition::ConfirmSoft).unwrap(),
            r#""confirm_soft""#
        );
        assert_eq!(
            serde_json::to_string(&Disposition::AutoAdd).unwrap(),
            r#""auto_add""#
        );
    }
}
