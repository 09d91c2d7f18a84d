//! Intent classifier — maps a transcript to a `JobSearchIntent` via the LLM.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::intent::prompts::{INTENT_PROMPT_TEMPLATE, INTENT_SYSTEM};
use crate::llm_client::LlmClient;

/// Transcripts shorter than this are noise (partial utterances from the
/// speech recognizer) and never reach the model or the database.
pub const MIN_TRANSCRIPT_LEN: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentAction {
    SearchJobs,
    ConfirmPreference,
    Unknown,
}

/// Structured intent extracted from a transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobSearchIntent {
    pub action: IntentAction,
    /// Executive title like CFO, CMO, CTO.
    #[serde(default)]
    pub role_type: Option<String>,
    /// City or country like London, UK.
    #[serde(default)]
    pub location: Option<String>,
    /// Type of preference being confirmed (confirm_preference only).
    #[serde(default)]
    pub preference_type: Option<String>,
    #[serde(default)]
    pub values: Option<Vec<String>>,
    pub confidence: f32,
    pub reasoning: String,
}

impl JobSearchIntent {
    /// Fallback intent for transcripts below the length threshold.
    pub fn too_short() -> Self {
        JobSearchIntent {
            action: IntentAction::Unknown,
            role_type: None,
            location: None,
            preference_type: None,
            values: None,
            confidence: 0.0,
            reasoning: "Transcript too short".to_string(),
        }
    }
}

/// True when the transcript is long enough to be worth analyzing.
/// Counts characters, not bytes, so multibyte text is gated the same way.
pub fn is_actionable(transcript: &str) -> bool {
    transcript.trim().chars().count() >= MIN_TRANSCRIPT_LEN
}

/// Classifies a transcript using the LLM.
pub async fn classify_intent(
    transcript: &str,
    llm: &LlmClient,
) -> Result<JobSearchIntent, AppError> {
    let prompt = INTENT_PROMPT_TEMPLATE.replace("{transcript}", transcript);
    llm.call_json::<JobSearchIntent>(&prompt, INTENT_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Intent classification failed: {e}")))
}
