//! Exercise Log Shared Library
//!
//! Wire types, domain models, and the coercion rules used to interpret
//! loosely typed client input.

pub mod calendar;
pub mod coercion;
pub mod models;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use coercion::{parse_int, LooseField};
pub use models::{ExerciseRecord, User};
pub use types::*;
