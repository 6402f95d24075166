mod careers;
mod chat;
mod config;
mod errors;
mod llm_client;
mod roadmaps;
mod routes;
mod session;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::careers::reference::ReferenceTables;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::roadmaps::RoadmapTable;
use crate::routes::build_router;
use crate::session::SessionStore;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Careers API v{}", env!("CARGO_PKG_VERSION"));

    // Reference tables are loaded once and shared read-only
    let tables = ReferenceTables::load(&config.career_table_path, &config.salary_table_path)?;
    info!(
        "Reference tables loaded: {} careers, {} salary entries",
        tables.career_count(),
        tables.salary_count()
    );

    let roadmaps = RoadmapTable::load(&config.roadmap_table_path)?;
    if roadmaps.is_empty() {
        warn!("Roadmap table is empty; every roadmap lookup will return 404");
    } else {
        info!("Roadmap table loaded: {} roadmaps", roadmaps.len());
    }

    // Initialize LLM client
    let llm = LlmClient::new(
        config.groq_api_key.clone(),
        Duration::from_secs(config.llm_timeout_secs),
    )?;
    info!(
        "LLM client initialized (model: {}, timeout: {}s)",
        llm_client::MODEL,
        config.llm_timeout_secs
    );

    let sessions = SessionStore::new(
        config.session_capacity,
        Duration::from_secs(config.session_ttl_secs),
    );

    // Build app state
    let state = AppState {
        llm: Arc::new(llm),
        tables: Arc::new(tables),
        roadmaps: Arc::new(roadmaps),
        sessions,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
