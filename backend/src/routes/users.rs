//! User API routes

use super::extract::FormOrJson;
use crate::error::ApiResult;
use crate::services::UserService;
use crate::state::AppState;
use axum::{extract::State, routing::post, Json, Router};
use exercise_log_shared::types::{CreateUserRequest, UserResponse};

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new().route("/", post(create_user).get(list_users))
}

/// POST /api/users - Create a user
async fn create_user(
    State(state): State<AppState>,
    FormOrJson(req): FormOrJson<CreateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let user = UserService::create_user(state.store(), req.username.as_ref()).await?;
    Ok(Json(user.into()))
}

/// GET /api/users - List all users in creation order
async fn list_users(State(state): State<AppState>) -> Json<Vec<UserResponse>> {
    let users = UserService::list_users(state.store()).await;
    Json(users.into_iter().map(UserResponse::from).collect())
}
