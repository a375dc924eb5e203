//! Input validation helpers.

use regex::Regex;
use std::sync::LazyLock;

use crate::server::error::AppError;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\w.\-]+@([\w\-]+\.)+[\w\-]{2,4}$").expect("email pattern compiles")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Returns the trimmed value, or `None` when it is absent or blank.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Returns the trimmed value, or a 400 with `message` when it is absent or blank.
pub fn required(value: Option<String>, message: &str) -> Result<String, AppError> {
    non_blank(value).ok_or_else(|| AppError::BadRequest(message.to_string()))
}
