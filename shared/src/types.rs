//! API request and response types
//!
//! Field names follow the public wire contract, which reports ids as `_id`.

use crate::coercion::LooseField;
use crate::models::{ExerciseRecord, User};
use serde::{Deserialize, Serialize};

// ============================================================================
// Users
// ============================================================================

/// Create user request (form or JSON body)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub username: Option<LooseField>,
}

/// User as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub username: String,
    #[serde(rename = "_id")]
    pub id: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            id: user.id,
        }
    }
}

// ============================================================================
// Exercises
// ============================================================================

/// Log exercise request (form or JSON body)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateExerciseRequest {
    #[serde(default)]
    pub description: Option<LooseField>,
    #[serde(default)]
    pub duration: Option<LooseField>,
    #[serde(default)]
    pub date: Option<LooseField>,
}

/// Logged exercise as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseResponse {
    pub username: String,
    pub description: String,
    pub duration: Option<i64>,
    pub date: String,
    /// Owner's id; exercises have no id of their own
    #[serde(rename = "_id")]
    pub id: String,
}

impl From<ExerciseRecord> for ExerciseResponse {
    fn from(record: ExerciseRecord) -> Self {
        Self {
            username: record.username,
            description: record.description,
            duration: record.duration,
            date: record.date,
            id: record.user_id,
        }
    }
}

// ============================================================================
// Logs
// ============================================================================

/// Exercise log query parameters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExerciseLogQuery {
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
}

/// Single entry of an exercise log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntryResponse {
    pub description: String,
    pub duration: Option<i64>,
    pub date: String,
}

impl From<ExerciseRecord> for LogEntryResponse {
    fn from(record: ExerciseRecord) -> Self {
        Self {
            description: record.description,
            duration: record.duration,
            date: record.date,
        }
    }
}

/// Exercise log response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseLogResponse {
    pub username: String,
    /// Number of entries in `log`
    pub count: usize,
    #[serde(rename = "_id")]
    pub id: String,
    pub log: Vec<LogEntryResponse>,
}

// ============================================================================
// Errors
// ============================================================================

/// Error body; every failure is reported this way
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
