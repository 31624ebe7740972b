//! Business logic services
//!
//! Services validate input and coordinate the repositories.

pub mod exercise;
pub mod user;

pub use exercise::{ExerciseLog, ExerciseService, LogExerciseInput, LogFilter};
pub use user::UserService;
