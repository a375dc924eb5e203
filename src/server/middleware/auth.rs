use axum::http::{header::AUTHORIZATION, HeaderMap};

use crate::server::{
    error::{auth::AuthError, AppError},
    service::auth::token::{Claims, TokenKeys},
};

/// Bearer token check for routes that act on the caller's own account.
pub struct AuthGuard<'a> {
    tokens: &'a TokenKeys,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(tokens: &'a TokenKeys, headers: &'a HeaderMap) -> Self {
        Self { tokens, headers }
    }

    /// Decodes the bearer token.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Valid, unexpired token
    /// - `Err(AuthError::MissingToken)` - No `Authorization: Bearer` header
    /// - `Err(AuthError::InvalidToken)` - Bad signature, malformed or expired token
    pub fn require(&self) -> Result<Claims, AppError> {
        let Some(token) = bearer_token(self.headers) else {
            return Err(AuthError::MissingToken.into());
        };

        Ok(self.tokens.verify(token)?)
    }

    /// Decodes the bearer token and checks it belongs to `user_id`.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token issued to `user_id`
    /// - `Err(AuthError::AccessDenied)` - Token issued to a different account
    pub fn require_account(&self, user_id: &str) -> Result<Claims, AppError> {
        let claims = self.require()?;

        if claims.user_id != user_id {
            return Err(AuthError::AccessDenied {
                token_user: claims.user_id,
                target_user: user_id.to_string(),
            }
            .into());
        }

        Ok(claims)
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
