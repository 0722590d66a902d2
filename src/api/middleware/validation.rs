//! Request validation utilities
//!
//! Provides validation helpers for ensuring request data meets requirements.

use crate::api::error::{ApiError, ApiResult};

/// Validate that a required string field is not empty (after trimming)
pub fn validate_not_empty(value: &str, field_name: &str) -> ApiResult<()> {
    if value.trim().is_empty() {
        return Err(ApiError::BadRequest(format!(
            "{} cannot be empty",
            field_name
        )));
    }
    Ok(())
}

/// Validate string length constraints (counted in characters, not bytes)
pub fn validate_string_length(
    value: &str,
    field_name: &str,
    min: usize,
    max: usize,
) -> ApiResult<()> {
    let length = value.chars().count();
    if length < min || length > max {
        return Err(ApiError::ValidationError(format!(
            "{} must be between {} and {} characters",
            field_name, min, max
        )));
    }
    Ok(())
}

/// Validate a user identifier (string of 1-100 characters)
pub fn validate_user_id(user_id: &str) -> ApiResult<()> {
    if !(1..=100).contains(&user_id.chars().count()) {
        return Err(ApiError::BadRequest("Invalid user_id".to_string()));
    }
    Ok(())
}

/// Validate a path identifier (positive integer)
pub fn validate_id(id: i64, field_name: &str) -> ApiResult<()> {
    if id <= 0 {
        return Err(ApiError::BadRequest(format!(
            "{} must be a positive integer",
            field_name
        )));
    }
    Ok(())
}
