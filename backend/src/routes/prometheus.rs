//! Prometheus metrics endpoint

use crate::services::exercise::{EXERCISES_LOGGED_METRIC, LOG_QUERIES_METRIC};
use crate::services::user::USERS_CREATED_METRIC;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode};

/// Register descriptions for the service counters
pub fn describe_metrics() {
    metrics::describe_counter!(USERS_CREATED_METRIC, "Users created since startup");
    metrics::describe_counter!(EXERCISES_LOGGED_METRIC, "Exercises logged since startup");
    metrics::describe_counter!(LOG_QUERIES_METRIC, "Exercise log queries served");
}

/// GET /metrics - Prometheus text exposition, 404 when metrics are disabled
pub async fn render_metrics(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .as_ref()
        .map(|handle| handle.render())
        .ok_or(StatusCode::NOT_FOUND)
}
