use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::analysis::demo::{demo_scenarios, DemoScenario};
use crate::errors::AppError;
use crate::models::analysis::AnalysisResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
    /// Record the result in history. Defaults to true.
    #[serde(default = "default_save")]
    pub save: bool,
}

fn default_save() -> bool {
    true
}

/// POST /api/v1/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResult>, AppError> {
    if req.text.trim().is_empty() {
        return Err(AppError::Validation("Text must not be empty".to_string()));
    }

    let result = state.classifier.classify(&req.text).await;
    info!(
        "Analyzed {} chars via {}: {} (score {:.2})",
        req.text.chars().count(),
        state.classifier.backend(),
        result.classification.as_str(),
        result.score
    );

    if result.classification.is_toxic() {
        debug!("Flagged analysis {}", result.id);
    }

    if req.save {
        // The analysis is still returned when history cannot be written.
        if let Err(e) = state.history.record(result.clone()).await {
            warn!("Failed to record analysis {}: {e}", result.id);
        }
    }

    Ok(Json(result))
}

/// GET /api/v1/demo/scenarios
pub async fn handle_demo_scenarios() -> Json<Vec<DemoScenario>> {
    Json(demo_scenarios())
}
