//! Axum route handlers for the Careers API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::careers::models::CareerRecord;
use crate::careers::pipeline::{suggest_careers, Selections};
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// The client posts its category map as-is, e.g.
/// `{"Technical Skills": [...], "Interests": [...], "Hobbies": [...]}`,
/// optionally alongside a `session_id` from an earlier call.
#[derive(Debug, Deserialize)]
pub struct SuggestionsRequest {
    #[serde(default)]
    pub session_id: Option<Uuid>,
    #[serde(flatten)]
    pub selections: Selections,
}

#[derive(Debug, Serialize)]
pub struct CareersResponse {
    pub session_id: Uuid,
    pub careers: Vec<CareerRecord>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/suggestions
///
/// Generates up to 10 career suggestions and remembers them for the session.
/// A new session token is issued when the request carries none.
pub async fn handle_suggestions(
    State(state): State<AppState>,
    Json(request): Json<SuggestionsRequest>,
) -> Result<Json<CareersResponse>, AppError> {
    let careers = suggest_careers(state.llm.as_ref(), &state.tables, &request.selections).await?;

    let session_id = request.session_id.unwrap_or_else(Uuid::new_v4);
    state.sessions.put(session_id, careers.clone());

    info!(
        "Suggested {} careers for session {session_id}",
        careers.len()
    );
    debug!("{} sessions cached", state.sessions.len());

    Ok(Json(CareersResponse {
        session_id,
        careers,
    }))
}

/// GET /api/sessions/:id/careers
///
/// Returns the careers last suggested to a session.
pub async fn handle_session_careers(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<CareersResponse>, AppError> {
    let careers = state
        .sessions
        .get(&session_id)
        .ok_or_else(|| AppError::NotFound(format!("Session {session_id} not found")))?;

    Ok(Json(CareersResponse {
        session_id,
        careers,
    }))
}
