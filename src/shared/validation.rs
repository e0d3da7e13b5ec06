use lazy_static::lazy_static;
use regex::Regex;

use crate::core::error::{AppError, Result};
use crate::shared::constants::MAX_PROFILE_NAME_LENGTH;

lazy_static! {
    /// Regex for validating profile names
    /// Letters, digits, underscores and hyphens only
    /// - Valid: "rahim", "citizen_42", "road-watch"
    /// - Invalid: "", "john doe", "../etc", "name.json"
    pub static ref PROFILE_NAME_REGEX: Regex = Regex::new(r"^[A-Za-z0-9_-]+$").unwrap();
}

/// Ensures a profile name is safe to use as a storage key
pub fn validate_profile_name(name: &str) -> Result<()> {
    if name.len() > MAX_PROFILE_NAME_LENGTH {
        return Err(AppError::Validation(format!(
            "Profile name must not exceed {} characters",
            MAX_PROFILE_NAME_LENGTH
        )));
    }
    if !PROFILE_NAME_REGEX.is_match(name) {
        return Err(AppError::Validation(
            "Profile name may only contain letters, digits, '_' and '-'".to_string(),
        ));
    }
    Ok(())
}
