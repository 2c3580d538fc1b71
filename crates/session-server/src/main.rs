use anyhow::Result;
use axum::{middleware as axum_middleware, routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

use session_core::SessionService;

mod config;
mod error;
mod handlers;
mod middleware;
mod state;
mod telemetry;

#[cfg(test)]
mod test;

use crate::config::Settings;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init_telemetry();

    info!("Session server starting...");

    // Load configuration
    let settings = Settings::load()?;
    info!("Configuration loaded");

    // Session service shared by every request
    let state = AppState {
        sessions: Arc::new(SessionService::new(settings.session.ttl_seconds)),
    };

    // Build router
    let app = build_router(state);

    // Bind address
    let host: std::net::IpAddr = settings.server.host.parse()?;
    let addr = SocketAddr::from((host, settings.server.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(state: AppState) -> Router {
    // Public routes (no session handling)
    let public_routes = Router::new().route("/health", get(handlers::health::health_check));

    // Session routes - every request leaves with a session identifier
    let session_routes = Router::new()
        .route("/api/session", get(handlers::session::session_handler))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::session_middleware,
        ));

    Router::new()
        .merge(public_routes)
        .merge(session_routes)
        .with_state(state)
        // Tracing
        .layer(TraceLayer::new_for_http())
}
