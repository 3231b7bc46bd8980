pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::dashboard::handlers as dashboard;
use crate::history::handlers as history;
use crate::session::handlers as session;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis
        .route("/api/v1/analyze", post(analysis::handle_analyze))
        .route("/api/v1/demo/scenarios", get(analysis::handle_demo_scenarios))
        // History
        .route(
            "/api/v1/history",
            get(history::handle_get_history).delete(history::handle_clear_history),
        )
        // Dashboard
        .route("/api/v1/dashboard/stats", get(dashboard::handle_stats))
        .route("/api/v1/dashboard/trend", get(dashboard::handle_trend))
        // Session
        .route("/api/v1/auth/login", post(session::handle_login))
        .route("/api/v1/auth/signup", post(session::handle_signup))
        .route("/api/v1/auth/logout", post(session::handle_logout))
        .route("/api/v1/auth/me", get(session::handle_me))
        .with_state(state)
}
