//! Route definitions for the exercise log API
//!
//! This module organizes all API routes and applies middleware. Paths that
//! match no route are served from the static files directory.

use crate::state::AppState;
use axum::{routing::get, Router};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    services::ServeDir,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

mod exercise;
mod extract;
mod health;
mod prometheus;
mod users;

pub use exercise::exercise_routes;
pub use extract::FormOrJson;
pub use prometheus::describe_metrics;
pub use users::user_routes;

/// Create the main application router with all middleware
pub fn create_router(state: AppState) -> Router {
    let timeout = Duration::from_secs(state.config().server.request_timeout_secs);
    let static_files = ServeDir::new(&state.config().static_files.dir);

    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/health/live", get(health::liveness_check))
        .route("/metrics", get(prometheus::render_metrics))
        .nest("/api/users", api_routes())
        .fallback_service(static_files)
        // Apply middleware layers
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(timeout))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// User, exercise and log routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(user_routes())
        .merge(exercise_routes())
}
