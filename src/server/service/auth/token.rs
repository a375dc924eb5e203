use std::sync::Arc;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::{
    error::{auth::AuthError, AppError},
    model::user::User,
};

/// Lifetime of an access token.
pub const TOKEN_TTL_SECONDS: i64 = 3600;

/// Access token payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Internal numeric user id.
    pub id: i32,
    /// Public user identifier.
    #[serde(rename = "userId")]
    pub user_id: String,
    pub member: bool,
    /// Expiry as seconds since the Unix epoch.
    pub exp: i64,
}

/// HS256 signing and verification keys derived from the configured secret.
#[derive(Clone)]
pub struct TokenKeys {
    inner: Arc<(EncodingKey, DecodingKey)>,
}

impl TokenKeys {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            inner: Arc::new((
                EncodingKey::from_secret(secret),
                DecodingKey::from_secret(secret),
            )),
        }
    }

    /// Signs a one-hour token for `user`.
    pub fn sign(&self, user: &User) -> Result<String, AppError> {
        let claims = Claims {
            id: user.id,
            user_id: user.user_id.clone(),
            member: user.member,
            exp: (Utc::now() + Duration::seconds(TOKEN_TTL_SECONDS)).timestamp(),
        };

        Ok(encode(&Header::new(Algorithm::HS256), &claims, &self.inner.0)?)
    }

    /// Verifies the signature and expiry of `token`.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.inner.1, &Validation::new(Algorithm::HS256))
            .map(|data| data.claims)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }
}
