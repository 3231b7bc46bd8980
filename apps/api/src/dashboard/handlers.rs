use axum::{extract::State, Json};

use crate::dashboard::{dashboard_stats, monthly_trend};
use crate::models::stats::{DashboardStats, TrendPoint};
use crate::state::AppState;

/// GET /api/v1/dashboard/stats
pub async fn handle_stats(State(state): State<AppState>) -> Json<DashboardStats> {
    simulate_latency(&state).await;
    Json(dashboard_stats())
}

/// GET /api/v1/dashboard/trend
pub async fn handle_trend(State(state): State<AppState>) -> Json<Vec<TrendPoint>> {
    simulate_latency(&state).await;
    Json(monthly_trend())
}

async fn simulate_latency(state: &AppState) {
    if !state.config.stats_latency.is_zero() {
        tokio::time::sleep(state.config.stats_latency).await;
    }
}
