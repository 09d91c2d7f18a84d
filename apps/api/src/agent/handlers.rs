//! Axum route handler for the voice agent endpoint.

use axum::{
    extract::State,
    http::HeaderValue,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::agent::confirmation::parse_confirmation;
use crate::agent::prompts::AGENT_SYSTEM;
use crate::errors::AppError;
use crate::state::AppState;

/// Response header set when the body is a confirmation payload, so the
/// voice widget can switch into its approval flow without sniffing JSON.
pub const CONFIRMATION_EVENT_HEADER: &str = "x-voice-event";

#[derive(Debug, Deserialize)]
pub struct AgentRequest {
    /// Missing field is treated as empty so the handler's validation error
    /// fires instead of a deserialization failure.
    #[serde(default)]
    pub transcript: String,
}

#[derive(Debug, Serialize)]
pub struct AgentTextResponse {
    pub response: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

/// POST /api/v1/voice/agent
///
/// Runs the transcript through the voice agent. Returns either a
/// confirmation payload (with the confirmation event header) when the agent
/// detects a save/preference/apply intent, or freeform assistant text.
pub async fn handle_agent(
    State(state): State<AppState>,
    Json(request): Json<AgentRequest>,
) -> Result<Response, AppError> {
    if request.transcript.trim().is_empty() {
        return Err(AppError::Validation("transcript cannot be empty".to_string()));
    }

    let prompt = format!("User said: {}", request.transcript);
    let llm_response = state.llm.call(&prompt, AGENT_SYSTEM).await?;
    let text = llm_response
        .text()
        .ok_or_else(|| AppError::Llm("agent returned empty content".to_string()))?;

    if let Some(confirmation) = parse_confirmation(text) {
        let mut response = Json(confirmation).into_response();
        response.headers_mut().insert(
            CONFIRMATION_EVENT_HEADER,
            HeaderValue::from_static("confirmation"),
        );
        return Ok(response);
    }

    Ok(Json(AgentTextResponse {
        response: text.to_string(),
        kind: "text",
    })
    .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_request_missing_transcript_is_empty() {
        let request: AgentRequest = serde_json::from_str("{}").unwrap();
        assert!(request.transcript.is_empty());
    }

    #[test]
    fn test_agent_request_with_transcript() {
        let request: AgentRequest =
            serde_json::from_str(r#"{"transcript": "save that CFO job"}"#).unwrap();
        assert_eq!(request.transcript, "save that CFO job");
    }
}
