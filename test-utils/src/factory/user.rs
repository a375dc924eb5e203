//! User factory for creating test user entities.

use crate::factory::helpers::{next_code, next_id};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// The password column is stored verbatim, so callers that exercise sign-in must pass a
/// real bcrypt hash through `password_hash`.
///
/// Defaults:
/// - user_id: `U` followed by a zero-padded counter (10 characters)
/// - name: `"User {id}"`, email `user{id}@example.com`, phone `055{id:07}`
/// - active, not a member, unverified
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    name: String,
    email: String,
    phone: Option<String>,
    password_hash: String,
    member: bool,
    is_active: bool,
}

impl<'a> UserFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            user_id: next_code('U', 10),
            name: format!("User {}", id),
            email: format!("user{}@example.com", id),
            phone: Some(format!("055{:07}", id)),
            password_hash: "not-a-real-hash".to_string(),
            member: false,
            is_active: true,
        }
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn phone(mut self, phone: Option<&str>) -> Self {
        self.phone = phone.map(str::to_string);
        self
    }

    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    pub fn member(mut self, member: bool) -> Self {
        self.member = member;
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Builds and inserts the user entity into the database.
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            phone: ActiveValue::Set(self.phone),
            password: ActiveValue::Set(self.password_hash),
            member: ActiveValue::Set(self.member),
            country: ActiveValue::Set(None),
            area: ActiveValue::Set(None),
            district: ActiveValue::Set(None),
            local_assembly: ActiveValue::Set(None),
            profile_url: ActiveValue::Set(None),
            is_active: ActiveValue::Set(self.is_active),
            email_verified: ActiveValue::Set(false),
            phone_verified: ActiveValue::Set(false),
            otp: ActiveValue::Set(None),
            otp_expires: ActiveValue::Set(None),
            password_reset_token: ActiveValue::Set(None),
            password_reset_expires: ActiveValue::Set(None),
            last_login: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}
