pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::careers::handlers as careers;
use crate::chat::handlers as chat;
use crate::roadmaps::handlers as roadmaps;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/suggestions", post(careers::handle_suggestions))
        .route(
            "/api/sessions/:id/careers",
            get(careers::handle_session_careers),
        )
        .route("/api/chat", post(chat::handle_chat))
        .route("/api/roadmaps/:career", get(roadmaps::handle_get_roadmap))
        .with_state(state)
}
