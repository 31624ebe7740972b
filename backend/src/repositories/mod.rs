//! In-memory repositories
//!
//! Provides the data access layer over the shared [`Store`].

pub mod exercise;
pub mod store;
pub mod user;

pub use exercise::{CreateExercise, ExerciseRepository};
pub use store::{Store, StoreStats};
pub use user::UserRepository;
