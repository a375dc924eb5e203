use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Email unknown, account inactive or password mismatch during sign-in.
    ///
    /// The three cases share one message so callers cannot tell which emails exist.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The current password supplied to a password change did not match.
    #[error("Current password is incorrect")]
    IncorrectPassword,

    /// No `Authorization: Bearer` header on a protected route.
    #[error("Missing bearer token")]
    MissingToken,

    /// Bearer token failed signature or expiry validation.
    #[error("Invalid or expired token: {0}")]
    InvalidToken(String),

    /// Valid token, but for an account other than the one addressed by the route.
    #[error("User {token_user} attempted to act on account {target_user}")]
    AccessDenied {
        token_user: String,
        target_user: String,
    },
}

/// Converts authentication errors into HTTP responses.
///
/// - `InvalidCredentials` / `IncorrectPassword` → 401 with the error message
/// - `MissingToken` / `InvalidToken` → 401 "Not authorized"
/// - `AccessDenied` → 403 "Forbidden"
///
/// Token failures are logged at debug level and access denials at warn level, while the
/// client-facing message stays generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidCredentials | Self::IncorrectPassword => {
                error_response(StatusCode::UNAUTHORIZED, self.to_string())
            }
            Self::MissingToken | Self::InvalidToken(_) => {
                tracing::debug!("{}", self);
                error_response(StatusCode::UNAUTHORIZED, "Not authorized")
            }
            Self::AccessDenied { .. } => {
                tracing::warn!("{}", self);
                error_response(StatusCode::FORBIDDEN, "Forbidden")
            }
        }
    }
}
