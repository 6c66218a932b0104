pub mod error;
pub mod handlers;
pub mod page;
pub mod state;
pub mod types;

use anyhow::{Context, Result};
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServeConfig;
use state::AppState;

/// Routes of the interactive shell.
pub fn router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(handlers::page::index))
        .route("/health", get(|| async { "ok" }))
        .route("/api/analyze", post(handlers::analyze::analyze))
        .route("/api/schema", get(handlers::schema::chart_spec))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(config: ServeConfig) -> Result<()> {
    let addr = config.addr;
    let app = router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding to {addr}"))?;

    info!(%addr, "gamma-exposure listening");
    println!("gamma-exposure listening on http://{addr}");
    println!("  Page:     GET  http://{addr}/");
    println!("  Analyze:  POST http://{addr}/api/analyze");
    println!("  Schema:   GET  http://{addr}/api/schema");

    axum::serve(listener, app).await.context("running server")?;

    Ok(())
}
