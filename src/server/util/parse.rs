use uuid::Uuid;

use crate::server::error::AppError;

/// Parses a path id into its canonical UUID string.
///
/// # Arguments
/// - `value` - The raw `{id}` path segment
///
/// # Returns
/// - `Ok(String)` - Lowercase hyphenated UUID
/// - `Err(AppError::BadRequest)` - Code `InvalidObjectId` when `value` is not a UUID
pub fn parse_id(value: &str) -> Result<String, AppError> {
    Uuid::parse_str(value.trim())
        .map(|id| id.hyphenated().to_string())
        .map_err(|_| {
            AppError::bad_request(
                "InvalidObjectId",
                format!("'{}' is not a valid identifier", value),
            )
        })
}
