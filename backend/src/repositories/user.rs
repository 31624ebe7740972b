//! User repository over the in-memory store

use super::store::Store;
use exercise_log_shared::models::User;

/// User repository
pub struct UserRepository;

impl UserRepository {
    /// Create a user with the next id from the counter
    pub async fn create(store: &Store, username: String) -> User {
        let mut collections = store.write().await;

        let user = User {
            id: collections.next_user_id.to_string(),
            username,
        };
        collections.next_user_id += 1;
        collections.users.push(user.clone());

        user
    }

    /// Find a user by id
    pub async fn find_by_id(store: &Store, id: &str) -> Option<User> {
        store.read().await.user(id).cloned()
    }

    /// All users in creation order
    pub async fn list(store: &Store) -> Vec<User> {
        store.read().await.users.clone()
    }
}
