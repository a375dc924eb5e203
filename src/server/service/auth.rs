//! Sign-in and password recovery.

pub mod password;
pub mod token;

use chrono::{DateTime, Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{User, MIN_PASSWORD_LEN},
    service::auth::{password::PasswordHasher, token::TokenKeys},
    util::random::{random_otp, random_token, sha256_hex},
};

/// Validity of the OTP issued at sign-in.
pub const SIGNIN_OTP_TTL_SECONDS: i64 = 60;
/// Validity of a password reset token.
pub const RESET_TOKEN_TTL_SECONDS: i64 = 15 * 60;

/// Outcome of a successful sign-in.
#[derive(Debug, Clone)]
pub struct SignedIn {
    pub user: User,
    pub token: String,
    pub otp: String,
    pub otp_expires: DateTime<Utc>,
}

/// A freshly issued password reset token. Only its digest is stored.
#[derive(Debug, Clone)]
pub struct ResetTokenIssued {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    passwords: &'a PasswordHasher,
    tokens: &'a TokenKeys,
}

impl<'a> AuthService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        passwords: &'a PasswordHasher,
        tokens: &'a TokenKeys,
    ) -> Self {
        Self {
            db,
            passwords,
            tokens,
        }
    }

    /// Authenticates an active user by email and password.
    ///
    /// On success stores a fresh 5-digit OTP valid for one minute, stamps `last_login`
    /// and signs a one-hour access token.
    ///
    /// # Returns
    /// - `Ok(SignedIn)` - Token, OTP and the user's public record
    /// - `Err(AppError::BadRequest)` - Email or password missing
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown email, inactive account or
    ///   wrong password
    pub async fn signin(
        &self,
        email: Option<String>,
        password: Option<String>,
    ) -> Result<SignedIn, AppError> {
        let (Some(email), Some(password)) = (
            email.map(|e| e.trim().to_lowercase()).filter(|e| !e.is_empty()),
            password.filter(|p| !p.is_empty()),
        ) else {
            return Err(AppError::BadRequest("Email and password required".to_string()));
        };

        let repo = UserRepository::new(self.db);

        let Some(credentials) = repo.find_active_credentials_by_email(&email).await? else {
            tracing::warn!("Sign-in attempt for unknown or inactive email {}", email);
            return Err(AuthError::InvalidCredentials.into());
        };

        if !self
            .passwords
            .verify(password, credentials.password_hash)
            .await?
        {
            tracing::warn!("Sign-in with wrong password for user {}", credentials.user.user_id);
            return Err(AuthError::InvalidCredentials.into());
        }

        let now = Utc::now();
        let otp = random_otp();
        let otp_expires = now + Duration::seconds(SIGNIN_OTP_TTL_SECONDS);

        repo.record_login(credentials.user.id, otp.clone(), otp_expires, now)
            .await?;

        let mut user = credentials.user;
        user.last_login = Some(now);
        let token = self.tokens.sign(&user)?;

        Ok(SignedIn {
            user,
            token,
            otp,
            otp_expires,
        })
    }

    /// Issues a password reset token for the account registered under `email`.
    ///
    /// # Returns
    /// - `Ok(ResetTokenIssued)` - Plain token (to be delivered out of band) and its deadline
    /// - `Err(AppError::BadRequest)` - Email missing
    /// - `Err(AppError::NotFound)` - No account with that email
    pub async fn forgot_password(&self, email: Option<String>) -> Result<ResetTokenIssued, AppError> {
        let email = email
            .map(|e| e.trim().to_lowercase())
            .filter(|e| !e.is_empty())
            .ok_or_else(|| AppError::BadRequest("Email required".to_string()))?;

        let repo = UserRepository::new(self.db);

        let user = repo
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let token = random_token();
        let expires_at = Utc::now() + Duration::seconds(RESET_TOKEN_TTL_SECONDS);

        repo.set_reset_token(user.id, sha256_hex(&token), expires_at)
            .await?;

        Ok(ResetTokenIssued { token, expires_at })
    }

    /// Sets a new password using a reset token, then invalidates the token.
    ///
    /// # Returns
    /// - `Ok(())` - Password replaced
    /// - `Err(AppError::BadRequest)` - Missing input, short password, or unknown/expired token
    pub async fn reset_password(
        &self,
        token: Option<String>,
        new_password: Option<String>,
    ) -> Result<(), AppError> {
        let (Some(token), Some(new_password)) = (
            token.filter(|t| !t.is_empty()),
            new_password.filter(|p| !p.is_empty()),
        ) else {
            return Err(AppError::BadRequest("Token and password required".to_string()));
        };

        if new_password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AppError::BadRequest(
                "Password must be at least 6 characters".to_string(),
            ));
        }

        let repo = UserRepository::new(self.db);

        let user = repo
            .find_by_reset_digest(&sha256_hex(&token), Utc::now())
            .await?
            .ok_or_else(|| AppError::BadRequest("Token invalid or expired".to_string()))?;

        let hash = self.passwords.hash(new_password).await?;
        repo.reset_password(user.id, hash).await?;

        tracing::info!("Password reset for user {}", user.user_id);

        Ok(())
    }
}
