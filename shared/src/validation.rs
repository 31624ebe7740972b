//! Presence checks for request fields
//!
//! Only presence is validated. Values that are present but oddly typed are
//! coerced later rather than rejected.

use crate::coercion::{is_present, present, LooseField};

pub const USERNAME_REQUIRED: &str = "Username is required";
pub const DESCRIPTION_AND_DURATION_REQUIRED: &str = "Description and duration required";
pub const USER_NOT_FOUND: &str = "User not found";

/// Validate a username, returning its text
pub fn validate_username(username: Option<&LooseField>) -> Result<String, String> {
    present(username)
        .map(LooseField::as_text)
        .ok_or_else(|| USERNAME_REQUIRED.to_string())
}

/// Validate that both description and duration were supplied
pub fn validate_exercise_fields(
    description: Option<&LooseField>,
    duration: Option<&LooseField>,
) -> Result<(), String> {
    if !is_present(description) || !is_present(duration) {
        return Err(DESCRIPTION_AND_DURATION_REQUIRED.to_string());
    }
    Ok(())
}
