//! Exercise repository over the in-memory store

use super::store::Store;
use exercise_log_shared::models::ExerciseRecord;

/// Input for logging an exercise
#[derive(Debug, Clone)]
pub struct CreateExercise {
    pub description: String,
    pub duration: Option<i64>,
    pub date: String,
}

/// Exercise repository
pub struct ExerciseRepository;

impl ExerciseRepository {
    /// Append an exercise owned by the user with `user_id`.
    ///
    /// The owner is resolved under the same write guard as the append.
    /// Returns `None` and stores nothing when the user does not exist.
    pub async fn create(
        store: &Store,
        user_id: &str,
        input: CreateExercise,
    ) -> Option<ExerciseRecord> {
        let mut collections = store.write().await;
        let user = collections.user(user_id)?;

        let record = ExerciseRecord {
            user_id: user.id.clone(),
            username: user.username.clone(),
            description: input.description,
            duration: input.duration,
            date: input.date,
        };

        collections.exercises.push(record.clone());
        Some(record)
    }

    /// All exercises of a user in insertion order
    pub async fn list_for_user(store: &Store, user_id: &str) -> Vec<ExerciseRecord> {
        store
            .read()
            .await
            .exercises
            .iter()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect()
    }
}
