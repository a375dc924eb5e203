//! User account management.
//!
//! Covers self-service registration and phone verification, profile and password changes
//! by the account owner, and the admin account operations.

use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, is_unique_violation, AppError},
    model::user::{
        CreateUserParams, UpdateProfileParams, UpdateUserParams, User, MIN_PASSWORD_LEN,
    },
    service::{auth::password::PasswordHasher, identifier::IdentifierService},
    util::random::random_otp,
};

/// Validity of an OTP issued through the resend endpoint.
pub const RESEND_OTP_TTL_SECONDS: i64 = 5 * 60;

/// A newly issued OTP.
#[derive(Debug, Clone)]
pub struct OtpIssued {
    pub phone: String,
    pub otp: String,
    pub expires_in: i64,
}

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
    passwords: &'a PasswordHasher,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection, passwords: &'a PasswordHasher) -> Self {
        Self { db, passwords }
    }

    /// Registers a new account. Used by both signup and admin creation.
    ///
    /// # Returns
    /// - `Ok(User)` - Active, unverified account
    /// - `Err(AppError::Conflict)` - Email or phone already registered
    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.find_by_email(&params.email).await?.is_some() {
            return Err(AppError::Conflict("Email already registered".to_string()));
        }
        if let Some(phone) = &params.phone {
            if repo.phone_taken(phone, None).await? {
                return Err(AppError::Conflict(
                    "Phone number already registered".to_string(),
                ));
            }
        }

        let user_id = IdentifierService::new(self.db).user_id().await?;
        let hash = self.passwords.hash(params.password.clone()).await?;

        let user = repo
            .create(user_id, hash, params)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    AppError::Conflict("Email or phone already registered".to_string())
                } else {
                    e.into()
                }
            })?;

        tracing::info!("Registered user {}", user.user_id);

        Ok(user)
    }

    /// Confirms a phone number with the OTP last issued to it.
    ///
    /// # Returns
    /// - `Ok(User)` - Phone marked verified, OTP cleared
    /// - `Err(AppError::BadRequest)` - Missing input, wrong OTP, or expired OTP
    /// - `Err(AppError::NotFound)` - No active account with that phone
    pub async fn verify_otp(
        &self,
        phone: Option<String>,
        otp: Option<String>,
    ) -> Result<User, AppError> {
        let (Some(phone), Some(otp)) = (
            phone.map(|p| p.trim().to_string()).filter(|p| !p.is_empty()),
            otp.map(|o| o.trim().to_string()).filter(|o| !o.is_empty()),
        ) else {
            return Err(AppError::BadRequest("Phone and OTP are required".to_string()));
        };

        let repo = UserRepository::new(self.db);

        let (user, stored_otp, expires) = repo
            .find_active_by_phone(&phone)
            .await?
            .ok_or_else(user_not_found)?;

        if stored_otp.as_deref() != Some(otp.as_str()) {
            return Err(AppError::BadRequest("Invalid OTP".to_string()));
        }
        if expires.map_or(true, |at| at < Utc::now()) {
            return Err(AppError::BadRequest("OTP expired".to_string()));
        }

        repo.mark_phone_verified(user.id)
            .await?
            .ok_or_else(|| AppError::InternalError(format!("User {} vanished", user.user_id)))
    }

    /// Issues a new 5-minute OTP for an active account's phone.
    pub async fn resend_otp(&self, phone: Option<String>) -> Result<OtpIssued, AppError> {
        let phone = phone
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .ok_or_else(|| AppError::BadRequest("Phone number is required".to_string()))?;

        let repo = UserRepository::new(self.db);

        let (user, _, _) = repo
            .find_active_by_phone(&phone)
            .await?
            .ok_or_else(user_not_found)?;

        let otp = random_otp();
        repo.set_otp(
            user.id,
            otp.clone(),
            Utc::now() + Duration::seconds(RESEND_OTP_TTL_SECONDS),
        )
        .await?;

        tracing::debug!("Issued OTP for user {}", user.user_id);

        Ok(OtpIssued {
            phone,
            otp,
            expires_in: RESEND_OTP_TTL_SECONDS,
        })
    }

    /// Gets all users, newest first.
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_user_id(&self, user_id: &str) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(user_not_found)
    }

    /// Applies a self-service profile patch.
    ///
    /// # Returns
    /// - `Ok(User)` - Updated user
    /// - `Err(AppError::BadRequest)` - No fields to update
    /// - `Err(AppError::Conflict)` - Phone belongs to another account
    /// - `Err(AppError::NotFound)` - Unknown user
    pub async fn update_profile(&self, params: UpdateProfileParams) -> Result<User, AppError> {
        if params.is_empty() {
            return Err(AppError::BadRequest("No fields to update".to_string()));
        }

        let repo = UserRepository::new(self.db);
        let user_id = params.user_id.clone();

        if let Some(phone) = &params.phone {
            if repo.phone_taken(phone, Some(&user_id)).await? {
                return Err(AppError::Conflict("Phone number already in use".to_string()));
            }
        }

        if repo.update_profile(params).await? == 0 {
            return Err(user_not_found());
        }

        self.get_by_user_id(&user_id).await
    }

    /// Changes a password after checking the current one.
    ///
    /// # Returns
    /// - `Ok(())` - Password changed
    /// - `Err(AppError::BadRequest)` - Missing input or new password too short
    /// - `Err(AppError::NotFound)` - Unknown user
    /// - `Err(AppError::AuthErr(IncorrectPassword))` - Current password did not match
    pub async fn change_password(
        &self,
        user_id: &str,
        current_password: Option<String>,
        new_password: Option<String>,
    ) -> Result<(), AppError> {
        let (Some(current_password), Some(new_password)) = (
            current_password.filter(|p| !p.is_empty()),
            new_password.filter(|p| !p.is_empty()),
        ) else {
            return Err(AppError::BadRequest(
                "Current and new password are required".to_string(),
            ));
        };

        if new_password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AppError::BadRequest(
                "Password must be at least 6 characters".to_string(),
            ));
        }

        let repo = UserRepository::new(self.db);

        let credentials = repo
            .find_credentials_by_user_id(user_id)
            .await?
            .ok_or_else(user_not_found)?;

        if !self
            .passwords
            .verify(current_password, credentials.password_hash)
            .await?
        {
            return Err(AuthError::IncorrectPassword.into());
        }

        let hash = self.passwords.hash(new_password).await?;
        repo.set_password(user_id, hash).await?;

        tracing::info!("User {} changed their password", user_id);

        Ok(())
    }

    /// Overwrites a user's editable fields.
    pub async fn update(&self, params: UpdateUserParams) -> Result<(), AppError> {
        let repo = UserRepository::new(self.db);

        if let Some(phone) = &params.phone {
            if repo.phone_taken(phone, Some(&params.user_id)).await? {
                return Err(AppError::Conflict("Phone number already in use".to_string()));
            }
        }

        if repo.update(params).await? == 0 {
            return Err(user_not_found());
        }

        Ok(())
    }

    /// Sets a new password without checking the old one.
    pub async fn reset_password(
        &self,
        user_id: &str,
        new_password: Option<String>,
    ) -> Result<(), AppError> {
        let new_password = new_password
            .filter(|p| !p.is_empty())
            .ok_or_else(|| AppError::BadRequest("Password required".to_string()))?;

        let hash = self.passwords.hash(new_password).await?;

        if UserRepository::new(self.db)
            .set_password(user_id, hash)
            .await?
            == 0
        {
            return Err(user_not_found());
        }

        tracing::info!("Password reset by admin for user {}", user_id);

        Ok(())
    }

    pub async fn set_active(&self, user_id: &str, status: Option<bool>) -> Result<bool, AppError> {
        let status = status
            .ok_or_else(|| AppError::BadRequest("Status must be a boolean".to_string()))?;

        if UserRepository::new(self.db)
            .set_active(user_id, status)
            .await?
            == 0
        {
            return Err(user_not_found());
        }

        Ok(status)
    }

    pub async fn delete(&self, user_id: &str) -> Result<(), AppError> {
        if UserRepository::new(self.db).delete(user_id).await? == 0 {
            return Err(user_not_found());
        }

        tracing::info!("Deleted user {}", user_id);

        Ok(())
    }
}

fn user_not_found() -> AppError {
    AppError::NotFound("User not found".to_string())
}
