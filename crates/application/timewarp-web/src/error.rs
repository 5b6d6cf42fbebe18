//! Render failures

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Result type for page rendering
pub type Result<T> = std::result::Result<T, RenderError>;

/// Errors that abort a page render. Nothing is emitted when one occurs.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Sweep dataset is empty")]
    EmptySweep,

    #[error("Sample dataset is empty")]
    EmptySamples,

    #[error("Non-finite value at tw = {input}")]
    NonFinite { input: f64 },

    #[error("Sweep is not ascending at index {index}")]
    Unsorted { index: usize },

    #[error("Dataset error: {0}")]
    Dataset(#[from] timewarp_core::Error),

    #[error("Figure serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl IntoResponse for RenderError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "page render failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to render page: {}", self),
        )
            .into_response()
    }
}
