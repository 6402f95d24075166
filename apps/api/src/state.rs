use std::sync::Arc;

use crate::careers::reference::ReferenceTables;
use crate::llm_client::TextGenerator;
use crate::roadmaps::RoadmapTable;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable generation backend. Production: `LlmClient`.
    pub llm: Arc<dyn TextGenerator>,
    /// Description and salary tables, read-only for the process lifetime.
    pub tables: Arc<ReferenceTables>,
    pub roadmaps: Arc<RoadmapTable>,
    pub sessions: SessionStore,
}
