use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    Json,
};

use crate::errors::AppError;
use crate::history::filter::{filter_history, HistoryFilter};
use crate::models::analysis::AnalysisResult;
use crate::state::AppState;

/// GET /api/v1/history
pub async fn handle_get_history(
    State(state): State<AppState>,
    query: Result<Query<HistoryFilter>, QueryRejection>,
) -> Result<Json<Vec<AnalysisResult>>, AppError> {
    let Query(filter) = query.map_err(|e| AppError::Validation(e.body_text()))?;
    let entries = state.history.load().await;
    Ok(Json(filter_history(&entries, &filter)))
}

/// DELETE /api/v1/history
pub async fn handle_clear_history(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.history.clear().await?;
    Ok(StatusCode::NO_CONTENT)
}
