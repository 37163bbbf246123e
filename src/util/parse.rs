use crate::error::{internal::InternalError, AppError};

/// Parses a stored id column into a u64.
///
/// Steam ids are persisted as text but handled as numbers everywhere else;
/// a value that fails to parse indicates corrupted data.
///
/// # Returns
/// - `Ok(u64)` - The parsed id
/// - `Err(AppError::InternalErr(ParseStringId))` - The string is not a
///   valid u64
pub fn parse_u64_from_string(value: String) -> Result<u64, AppError> {
    match value.parse::<u64>() {
        Ok(id) => Ok(id),
        Err(e) => Err(InternalError::ParseStringId { value, source: e }.into()),
    }
}
