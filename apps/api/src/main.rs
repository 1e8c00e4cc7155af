mod auth;
mod candidates;
mod config;
mod errors;
mod mindset;
mod models;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::auth::SessionStore;
use crate::candidates::store::CsvCandidateStore;
use crate::config::Config;
use crate::mindset::model::LinearMindsetModel;
use crate::routes::build_router;
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

    info!("Starting Talent API v{}", env!("CARGO_PKG_VERSION"));

    // Load the mindset scaler + classifier once; they are read-only from here on
    let model = LinearMindsetModel::load(&config.model_dir).with_context(|| {
        format!(
            "Failed to load mindset model from {}",
            config.model_dir.display()
        )
    })?;
    info!(
        "Mindset model loaded from {} ({} classes)",
        config.model_dir.display(),
        model.classes().len()
    );

    let store = CsvCandidateStore::new(config.candidates_csv.clone());
    info!("Candidate store: {}", store.path().display());

    anyhow::ensure!(
        config.session_ttl_minutes > 0,
        "SESSION_TTL_MINUTES must be positive"
    );
    let sessions = SessionStore::new(chrono::Duration::minutes(config.session_ttl_minutes));

    // Build app state
    let state = AppState {
        store: Arc::new(store),
        mindset: Arc::new(model),
        sessions: Arc::new(sessions),
        config: config.clone(),
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
