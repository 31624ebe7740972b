//! User service

use crate::error::ApiError;
use crate::repositories::{Store, UserRepository};
use exercise_log_shared::coercion::LooseField;
use exercise_log_shared::models::User;
use exercise_log_shared::validation::validate_username;
use tracing::{info, warn};

/// Counter of users created since startup
pub const USERS_CREATED_METRIC: &str = "exercise_log_users_created_total";

/// User service for account operations
pub struct UserService;

impl UserService {
    /// Create a user. Duplicate usernames are allowed.
    pub async fn create_user(store: &Store, username: Option<&LooseField>) -> Result<User, ApiError> {
        let username = validate_username(username).map_err(|msg| {
            warn!("Rejected user creation without username");
            ApiError::Validation(msg)
        })?;

        let user = UserRepository::create(store, username).await;

        metrics::counter!(USERS_CREATED_METRIC).increment(1);
        info!(user_id = %user.id, username = %user.username, "User created");

        Ok(user)
    }

    /// All users in creation order
    pub async fn list_users(store: &Store) -> Vec<User> {
        UserRepository::list(store).await
    }
}
