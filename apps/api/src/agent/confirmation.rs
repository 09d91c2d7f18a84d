//! Confirmation detection — decides whether agent output is a HITL
//! confirmation request or ordinary conversational text.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::llm_client::strip_json_fences;

/// Marker value the agent prompt uses for confirmation payloads.
pub const CONFIRMATION_MARKER: &str = "confirmation_required";

/// The three actions that require explicit user approval before commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfirmationAction {
    SaveJob,
    UpdatePreference,
    Apply,
}

/// Payload forwarded verbatim to the UI, which renders a confirmation modal
/// and only commits the action once the user approves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmationPayload {
    #[serde(rename = "type")]
    pub kind: String,
    pub action: ConfirmationAction,
    pub message: String,
    /// Action-specific fields (job details or preference values). Kept as
    /// raw JSON — the UI owns this shape, the server just relays it.
    pub data: Value,
}

/// Tries to interpret agent output as a confirmation request.
/// Returns `None` for plain conversational text or any JSON that is not
/// a confirmation payload.
pub fn parse_confirmation(text: &str) -> Option<ConfirmationPayload> {
    let text = strip_json_fences(text);
    let payload: ConfirmationPayload = serde_json::from_str(text).ok()?;
    (payload.kind == CONFIRMATION_MARKER).then_some(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_confirmation_save_job() {
        let text = r#"{
            "type": "confirmation_required",
            "action": "save_job",
            "message": "Save your interest in CFO at Acme?",
            "data": {"job_id": "abc", "title": "CFO", "company": "Acme"}
        }"#;
        let payload = parse_confirmation(text).unwrap();
        assert_eq!(payload.action, ConfirmationAction::SaveJob);
        assert_eq!(payload.data["company"], "Acme");
    }

    #[test]
    fn test_parse_confirmation_update_preference() {
        let text = r#"{
            "type": "confirmation_required",
            "action": "update_preference",
            "message": "Update your role preferences to: CMO, CFO?",
            "data": {"preference_type": "role", "values": ["CMO", "CFO"]}
        }"#;
        let payload = parse_confirmation(text).unwrap();
        assert_eq!(payload.action, ConfirmationAction::UpdatePreference);
    }

    #[test]
    fn test_parse_confirmation_handles_fenced_json() {
        let text = "```json\n{\"type\": \"confirmation_required\", \"action\": \"apply\", \"message\": \"Apply to CFO at Acme?\", \"data\": {}}\n```";
        let payload = parse_confirmation(text).unwrap();
        assert_eq!(payload.action, ConfirmationAction::Apply);
    }

    #[test]
    fn test_plain_text_is_not_a_confirmation() {
        assert!(parse_confirmation("There are several CFO roles in London right now.").is_none());
    }

    #[test]
    fn test_other_json_is_not_a_confirmation() {
        assert!(parse_confirmation(r#"{"type": "text", "response": "hello"}"#).is_none());
    }

    #[test]
    fn test_confirmation_action_serde_snake_case() {
        let action: ConfirmationAction = serde_json::from_str(r#""save_job""#).unwrap();
        assert_eq!(action, ConfirmationAction::SaveJob);
        assert_eq!(
            serde_json::to_string(&ConfirmationAction::UpdatePreference).unwrap(),
            r#""update_preference""#
        );
    }
}
