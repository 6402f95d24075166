use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::roadmaps::CareerRoadmap;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RoadmapResponse {
    pub matched_title: String,
    pub roadmap: CareerRoadmap,
}

/// GET /api/roadmaps/:career
pub async fn handle_get_roadmap(
    State(state): State<AppState>,
    Path(career): Path<String>,
) -> Result<Json<RoadmapResponse>, AppError> {
    let (matched_title, roadmap) = state
        .roadmaps
        .resolve(&career)
        .ok_or_else(|| AppError::NotFound(format!("No roadmap for '{career}'")))?;

    Ok(Json(RoadmapResponse {
        matched_title: matched_title.to_string(),
        roadmap: roadmap.clone(),
    }))
}
