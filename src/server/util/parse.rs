use crate::server::error::AppError;

/// Parses a numeric path parameter into an entity ID
///
/// # Arguments
/// - `param` - Name of the path parameter, used in the error message
/// - `value` - The raw path segment
///
/// # Returns
/// - `Ok(i32)` - Successfully parsed ID
/// - `Err(AppError::BadRequest)` - `"{param} is invalid"` when the segment is not a
///   32-bit integer
pub fn parse_id(param: &str, value: &str) -> Result<i32, AppError> {
    value
        .parse::<i32>()
        .map_err(|_| AppError::BadRequest(format!("{} is invalid", param)))
}
