//! Axum route handler for the intent analysis endpoint.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::intent::classifier::{classify_intent, is_actionable, IntentAction, JobSearchIntent};
use crate::intent::search::search_jobs;
use crate::models::job::JobSummary;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub transcript: String,
    #[serde(default, rename = "userId")]
    pub user_id: Option<String>,
}

/// Branch-specific payload attached to a successful analysis.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnalyzeData {
    JobResults {
        jobs: Vec<JobSummary>,
    },
    Confirmation {
        preference_type: Option<String>,
        values: Option<Vec<String>>,
    },
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    /// "success" when the intent produced data, "no_action" otherwise.
    pub status: &'static str,
    pub intent: JobSearchIntent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<AnalyzeData>,
}

impl AnalyzeResponse {
    fn no_action(intent: JobSearchIntent) -> Self {
        AnalyzeResponse {
            status: "no_action",
            intent,
            data: None,
        }
    }

    fn success(intent: JobSearchIntent, data: AnalyzeData) -> Self {
        AnalyzeResponse {
            status: "success",
            intent,
            data: Some(data),
        }
    }
}

/// POST /api/v1/voice/analyze
///
/// Classifies the transcript, then either runs the jobs search, emits a
/// preference confirmation, or reports no_action. Transcripts below the
/// length threshold return no_action without an LLM or DB call.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    if !is_actionable(&request.transcript) {
        return Ok(Json(AnalyzeResponse::no_action(JobSearchIntent::too_short())));
    }

    info!(
        user_id = ?request.user_id,
        "analyzing transcript ({} chars)",
        request.transcript.len()
    );

    let intent = classify_intent(&request.transcript, &state.llm).await?;
    info!(
        action = ?intent.action,
        confidence = intent.confidence,
        "intent classified"
    );

    match intent.action {
        IntentAction::SearchJobs => {
            let rows = search_jobs(
                &state.db,
                intent.role_type.as_deref(),
                intent.location.as_deref(),
            )
            .await?;
            let jobs: Vec<JobSummary> = rows.into_iter().map(JobSummary::from).collect();
            info!("job search returned {} results", jobs.len());
            Ok(Json(AnalyzeResponse::success(
                intent,
                AnalyzeData::JobResults { jobs },
            )))
        }
        IntentAction::ConfirmPreference => {
            let data = AnalyzeData::Confirmation {
                preference_type: intent.preference_type.clone(),
                values: intent.values.clone(),
            };
            Ok(Json(AnalyzeResponse::success(intent, data)))
        }
        IntentAction::Unknown => Ok(Json(AnalyzeResponse::no_action(intent))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_action_response_omits_data() {
        let response = AnalyzeResponse::no_action(JobSearchIntent::too_short());
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "no_action");
        assert!(json.get("data").is_none());
        assert_eq!(json["intent"]["action"], "unknown");
    }

    #[test]
    fn test_confirmation_data_shape() {
        let intent = JobSearchIntent {
            action: IntentAction::ConfirmPreference,
            role_type: None,
            location: None,
            preference_type: Some("role".to_string()),
            values: Some(vec!["CMO".to_string()]),
            confidence: 0.8,
            reasoning: "general preference".to_string(),
        };
        let data = AnalyzeData::Confirmation {
            preference_type: intent.preference_type.clone(),
            values: intent.values.clone(),
        };
        let response = AnalyzeResponse::success(intent, data);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["data"]["type"], "confirmation");
        assert_eq!(json["data"]["preference_type"], "role");
    }

    #[test]
    fn test_job_results_data_shape() {
        let intent = JobSearchIntent {
            action: IntentAction::SearchJobs,
            role_type: Some("CFO".to_string()),
            location: Some("London".to_string()),
            preference_type: None,
            values: None,
            confidence: 0.95,
            reasoning: "specific role and location".to_string(),
        };
        let response = AnalyzeResponse::success(intent, AnalyzeData::JobResults { jobs: vec![] });
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["data"]["type"], "job_results");
        assert!(json["data"]["jobs"].as_array().unwrap().is_empty());
    }
}
