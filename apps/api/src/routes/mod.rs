pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::agent;
use crate::extraction;
use crate::intent;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Voice API
        .route("/api/v1/voice/agent", post(agent::handlers::handle_agent))
        .route(
            "/api/v1/voice/extract",
            post(extraction::handlers::handle_extract),
        )
        .route(
            "/api/v1/voice/analyze",
            post(intent::handlers::handle_analyze),
        )
        .with_state(state)
}
