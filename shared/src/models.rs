//! Data models for the exercise log

use serde::{Deserialize, Serialize};

/// A registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Server-assigned id, a stringified counter
    pub id: String,
    pub username: String,
}

/// A logged exercise.
///
/// Records are tied to their owner through `user_id`, which doubles as the
/// `_id` reported for the exercise on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseRecord {
    pub user_id: String,
    /// Owner's username at creation time
    pub username: String,
    pub description: String,
    /// Coerced duration; `None` when the input had no leading digits
    pub duration: Option<i64>,
    /// Calendar string, e.g. `Mon Jan 01 2024`
    pub date: String,
}
