//! Axum route handlers for the vibe card API.

use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::Value;

use crate::card::controller::{AssessmentStatus, CardState, RefreshOutcome};
use crate::card::html::RenderedCard;
use crate::card::launcher::RetakeRequests;
use crate::errors::AppError;
use crate::state::AppState;
use crate::vibe::{infer, AssessmentRecord, VibeDescriptor};

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub outcome: RefreshOutcome,
    pub state: CardState,
}

#[derive(Debug, Serialize)]
pub struct RetakeResponse {
    pub launched: bool,
    pub requests: RetakeRequests,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: AssessmentStatus,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/vibe/infer
///
/// Runs the inference engine on an assessment supplied in the body.
/// Stateless: nothing is read from or written to the store.
pub async fn handle_infer(Json(body): Json<Value>) -> Result<Json<VibeDescriptor>, AppError> {
    if !body.is_object() {
        return Err(AppError::Validation(
            "assessment must be a JSON object".to_string(),
        ));
    }

    Ok(Json(infer(&AssessmentRecord::from_value(body))))
}

/// POST /api/v1/vibe/card/refresh
pub async fn handle_refresh(State(state): State<AppState>) -> Json<RefreshResponse> {
    let outcome = state.card.refresh().await;
    Json(RefreshResponse {
        outcome,
        state: state.card.state().await,
    })
}

/// GET /api/v1/vibe/card
///
/// Latest rendered card. 404 until the first successful refresh.
pub async fn handle_get_card(State(state): State<AppState>) -> Result<Json<RenderedCard>, AppError> {
    state
        .presenter
        .latest()
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound("vibe card has not been rendered yet".to_string()))
}

/// POST /api/v1/vibe/card/retake
pub async fn handle_retake(State(state): State<AppState>) -> Result<Json<RetakeResponse>, AppError> {
    let launched = state.card.retake().await?;
    Ok(Json(RetakeResponse {
        launched,
        requests: state.retake_signal.requests().await,
    }))
}

/// GET /api/v1/assessment/status
pub async fn handle_assessment_status(
    State(state): State<AppState>,
) -> Result<Json<StatusResponse>, AppError> {
    let status = state.card.assessment_status().await?;
    Ok(Json(StatusResponse { status }))
}
