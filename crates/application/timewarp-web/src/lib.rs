//! Timewarp multiplier analysis page
//!
//! Serves one HTML page: an SVG chart of the multiplier over tw 90..=150,
//! a breakdown table for a few hand-picked inputs, and the min, max and
//! transition observations.

pub mod chart;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod summary;
pub mod templates;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub use error::RenderError;
pub use state::{AppState, ServerConfig, DEFAULT_ADDR};

/// Create the router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the web server
pub async fn serve(state: Arc<AppState>, addr: &str) -> std::io::Result<()> {
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Timewarp analysis listening on http://{}", addr);
    routes::log_routes();

    axum::serve(listener, app).await
}
