pub mod auth;
pub mod categories;
pub mod services;
pub mod transactions;

use crate::backend::error::ApiError;

// Required text fields must be present and non-blank; `None` and "" fail
// the same way.
fn require_text<'a>(
    value: Option<&'a str>,
    field: &'static str,
) -> Result<&'a str, ApiError> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(ApiError::MissingField(field))
}
