//! Exercise and log API routes

use super::extract::{FormOrJson, QueryParams};
use crate::error::ApiResult;
use crate::services::{ExerciseService, LogExerciseInput, LogFilter};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use exercise_log_shared::types::{
    CreateExerciseRequest, ExerciseLogQuery, ExerciseLogResponse, ExerciseResponse,
    LogEntryResponse,
};

/// Create exercise routes, nested under the users prefix
pub fn exercise_routes() -> Router<AppState> {
    Router::new()
        .route("/:id/exercises", post(log_exercise))
        .route("/:id/logs", get(get_exercise_log))
}

/// POST /api/users/:id/exercises - Log an exercise
///
/// The response `_id` is the owner's id.
async fn log_exercise(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    FormOrJson(req): FormOrJson<CreateExerciseRequest>,
) -> ApiResult<Json<ExerciseResponse>> {
    let input = LogExerciseInput {
        description: req.description,
        duration: req.duration,
        date: req.date,
    };

    let record = ExerciseService::log_exercise(state.store(), &user_id, input).await?;
    Ok(Json(record.into()))
}

/// GET /api/users/:id/logs - Get a user's exercise log
///
/// `from`/`to` narrow the date range first, then `limit` keeps the first
/// entries in insertion order. `count` is the length of the returned log.
/// A repeated query key reads as its values joined with `,`.
async fn get_exercise_log(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    QueryParams(query): QueryParams<ExerciseLogQuery>,
) -> ApiResult<Json<ExerciseLogResponse>> {
    let filter = LogFilter::from(&query);
    let log = ExerciseService::get_log(state.store(), &user_id, &filter).await?;

    let entries: Vec<LogEntryResponse> = log.entries.into_iter().map(Into::into).collect();

    Ok(Json(ExerciseLogResponse {
        username: log.user.username,
        count: entries.len(),
        id: log.user.id,
        log: entries,
    }))
}
