//! Axum route handler for preference extraction.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::extraction::extractor::{extract_preferences, ExtractedPreference};
use crate::extraction::routing::{has_hard_constraint_phrasing, route, Disposition};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    #[serde(default)]
    pub transcript: String,
}

/// An extracted preference plus the routing decision for it.
#[derive(Debug, Serialize)]
pub struct RoutedPreference {
    #[serde(flatten)]
    pub preference: ExtractedPreference,
    pub disposition: Disposition,
}

#[derive(Debug, Default, Serialize)]
pub struct ExtractResponse {
    pub preferences: Vec<RoutedPreference>,
    pub should_confirm: bool,
}

/// POST /api/v1/voice/extract
///
/// Extracts structured career preferences from a transcript and attaches a
/// confidence-based disposition to each. A blank transcript short-circuits
/// to an empty result without touching the model.
pub async fn handle_extract(
    State(state): State<AppState>,
    Json(request): Json<ExtractRequest>,
) -> Result<Json<ExtractResponse>, AppError> {
    if request.transcript.trim().is_empty() {
        return Ok(Json(ExtractResponse::default()));
    }

    let result = extract_preferences(&request.transcript, &state.llm).await?;
    info!("extracted {} preferences", result.preferences.len());

    let mut should_confirm = result.should_confirm;
    let preferences: Vec<RoutedPreference> = result
        .preferences
        .into_iter()
        .map(|mut preference| {
            // Backstop: treat hard-constraint phrasing as hard validation
            // even if the model left the flag unset.
            if !preference.requires_hard_validation
                && has_hard_constraint_phrasing(&preference.raw_text)
            {
                preference.requires_hard_validation = true;
            }
            let disposition = route(&preference);
            RoutedPreference {
                preference,
                disposition,
            }
        })
        .collect();

    should_confirm |= preferences
        .iter()
        .any(|p| p.disposition == Disposition::ConfirmHard);

    Ok(Json(ExtractResponse {
        preferences,
        should_confirm,
    }))
}
