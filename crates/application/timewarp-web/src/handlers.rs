//! Route handlers for the analysis page

use axum::{extract::State, response::Html};
use std::sync::Arc;

use crate::error::RenderError;
use crate::state::AppState;

/// The analysis page: chart, breakdown table and observations
pub async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, RenderError> {
    state.page().map(Html)
}
