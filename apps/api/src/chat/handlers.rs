use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::careers::models::CareerRecord;
use crate::chat::reply;
use crate::errors::AppError;
use crate::llm_client::ChatMessage;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub session_id: Option<Uuid>,
    pub message: String,
    /// Prior turns as the client rendered them.
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub session_id: Option<Uuid>,
    pub response: String,
    pub careers: Vec<CareerRecord>,
}

/// POST /api/chat
///
/// Answers a follow-up question, grounded in the careers last suggested to the session.
/// An unknown or expired session simply means no grounding.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if request.message.trim().is_empty() {
        return Err(AppError::Validation("message cannot be empty".to_string()));
    }

    let careers = match request.session_id {
        Some(id) => state.sessions.get(&id).unwrap_or_else(|| {
            debug!("Session {id} unknown or expired; answering without careers");
            Vec::new()
        }),
        None => Vec::new(),
    };

    let response = reply(
        state.llm.as_ref(),
        &careers,
        &request.messages,
        &request.message,
    )
    .await?;

    Ok(Json(ChatResponse {
        session_id: request.session_id,
        response,
        careers,
    }))
}
