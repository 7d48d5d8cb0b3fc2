//! frontdesk - hospital website intake assistant
//!
//! A Rust backend implementing the CMC Vellore visitor intake dialog
//! and symptom-to-department routing.

mod api;
mod sessions;
mod state_machine;
mod text;
mod triage;

use api::{create_router, AppState};
use sessions::SessionStore;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "frontdesk=info,tower_http=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false),
        )
        .init();

    // Configuration
    let port: u16 = std::env::var("FRONTDESK_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000);

    let session_ttl: u64 = std::env::var("FRONTDESK_SESSION_TTL_SECS")
        .ok()
        .and_then(|t| t.parse().ok())
        .unwrap_or(3600);

    // interval(0) panics
    let sweep_interval: u64 = std::env::var("FRONTDESK_SWEEP_INTERVAL_SECS")
        .ok()
        .and_then(|t| t.parse().ok())
        .unwrap_or(60)
        .max(1);

    // Session store and eviction sweeper
    let sessions = Arc::new(SessionStore::new());
    sessions.clone().spawn_sweeper(
        Duration::from_secs(session_ttl),
        Duration::from_secs(sweep_interval),
    );
    tracing::info!(session_ttl, sweep_interval, "session store initialized");

    // Create application state
    let state = AppState::new(sessions);

    // Create router
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = create_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("frontdesk listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
