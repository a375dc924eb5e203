//! User domain models and parameters.
//!
//! Password hashes, OTPs and reset digests never appear on `User`; the only type that
//! carries a hash is `UserCredentials`, which stays inside the service layer.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{CreateUserDto, SignupDto, UpdateProfileDto, UpdateUserDto, UserDto},
    server::{
        error::AppError,
        util::validate::{is_valid_email, non_blank, required},
    },
};

pub const MIN_PASSWORD_LEN: usize = 6;
pub const MIN_PHONE_LEN: usize = 10;

/// User account without any secret material.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub member: bool,
    pub country: Option<String>,
    pub area: Option<String>,
    pub district: Option<String>,
    pub local_assembly: Option<String>,
    pub profile_url: Option<String>,
    pub is_active: bool,
    pub email_verified: bool,
    pub phone_verified: bool,
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            name: entity.name,
            email: entity.email,
            phone: entity.phone,
            member: entity.member,
            country: entity.country,
            area: entity.area,
            district: entity.district,
            local_assembly: entity.local_assembly,
            profile_url: entity.profile_url,
            is_active: entity.is_active,
            email_verified: entity.email_verified,
            phone_verified: entity.phone_verified,
            last_login: entity.last_login,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            user_id: self.user_id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            member: self.member,
            country: self.country,
            area: self.area,
            district: self.district,
            local_assembly: self.local_assembly,
            profile_url: self.profile_url,
            is_active: self.is_active,
            email_verified: self.email_verified,
            phone_verified: self.phone_verified,
            last_login: self.last_login,
            created_at: self.created_at,
        }
    }
}

/// A user together with their bcrypt hash, for password checks.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: String,
}

impl UserCredentials {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        let password_hash = entity.password.clone();

        Self {
            user: User::from_entity(entity),
            password_hash,
        }
    }
}

/// Validated account creation input, shared by self-service signup and admin creation.
///
/// `password` is plaintext here; the service hashes it before it reaches the repository.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub name: String,
    /// Lower-cased and trimmed.
    pub email: String,
    pub phone: Option<String>,
    pub password: String,
    pub member: bool,
    pub country: Option<String>,
    pub area: Option<String>,
    pub district: Option<String>,
    pub local_assembly: Option<String>,
    pub profile_url: Option<String>,
}

impl CreateUserParams {
    /// Validates a signup request.
    ///
    /// Name, email, phone and password are required; the email must be well formed, the
    /// password at least 6 characters and the phone at least 10. Members must supply all
    /// church fields, non-members have them dropped.
    pub fn from_signup(dto: SignupDto) -> Result<Self, AppError> {
        const MESSAGE: &str = "Name, email, phone, and password are required";

        let name = required(dto.name, MESSAGE)?;
        let email = required(dto.email, MESSAGE)?.to_lowercase();
        let phone = required(dto.phone, MESSAGE)?;
        let password = dto
            .password
            .filter(|p| !p.is_empty())
            .ok_or_else(|| AppError::BadRequest(MESSAGE.to_string()))?;

        if !is_valid_email(&email) {
            return Err(AppError::BadRequest("Invalid email format".to_string()));
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AppError::BadRequest(
                "Password must be at least 6 characters".to_string(),
            ));
        }
        if phone.chars().count() < MIN_PHONE_LEN {
            return Err(AppError::BadRequest("Invalid phone number".to_string()));
        }

        let (country, area, district, local_assembly) = if dto.is_member {
            match (
                non_blank(dto.country),
                non_blank(dto.area),
                non_blank(dto.district),
                non_blank(dto.local),
            ) {
                (Some(country), Some(area), Some(district), Some(local)) => {
                    (Some(country), Some(area), Some(district), Some(local))
                }
                _ => {
                    return Err(AppError::BadRequest(
                        "Church information (country, area, district, local) is required for members"
                            .to_string(),
                    ))
                }
            }
        } else {
            (None, None, None, None)
        };

        Ok(Self {
            name,
            email,
            phone: Some(phone),
            password,
            member: dto.is_member,
            country,
            area,
            district,
            local_assembly,
            profile_url: None,
        })
    }

    /// Validates an admin creation request. Only name, email and password are required.
    pub fn from_admin_dto(dto: CreateUserDto) -> Result<Self, AppError> {
        const MESSAGE: &str = "Missing required fields";

        let name = required(dto.name, MESSAGE)?;
        let email = required(dto.email, MESSAGE)?.to_lowercase();
        let password = dto
            .password
            .filter(|p| !p.is_empty())
            .ok_or_else(|| AppError::BadRequest(MESSAGE.to_string()))?;

        if !is_valid_email(&email) {
            return Err(AppError::BadRequest("Invalid email format".to_string()));
        }

        Ok(Self {
            name,
            email,
            phone: non_blank(dto.phone),
            password,
            member: dto.is_member,
            country: non_blank(dto.country),
            area: non_blank(dto.area),
            district: non_blank(dto.district),
            local_assembly: non_blank(dto.local),
            profile_url: non_blank(dto.profile_url),
        })
    }
}

/// Self-service profile patch. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileParams {
    pub user_id: String,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub country: Option<String>,
    pub area: Option<String>,
    pub district: Option<String>,
    pub local_assembly: Option<String>,
    pub profile_url: Option<String>,
}

impl UpdateProfileParams {
    pub fn from_dto(user_id: String, dto: UpdateProfileDto) -> Self {
        Self {
            user_id,
            name: non_blank(dto.name),
            phone: non_blank(dto.phone),
            country: non_blank(dto.country),
            area: non_blank(dto.area),
            district: non_blank(dto.district),
            local_assembly: non_blank(dto.local_assembly),
            profile_url: dto.profile_url,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.phone.is_none()
            && self.country.is_none()
            && self.area.is_none()
            && self.district.is_none()
            && self.local_assembly.is_none()
            && self.profile_url.is_none()
    }
}

/// Admin replacement of a user's editable fields.
///
/// Optional columns are overwritten with whatever was sent, including `None`.
/// `is_active` keeps the stored value when omitted.
#[derive(Debug, Clone)]
pub struct UpdateUserParams {
    pub user_id: String,
    pub name: String,
    pub phone: Option<String>,
    pub member: bool,
    pub country: Option<String>,
    pub area: Option<String>,
    pub district: Option<String>,
    pub local_assembly: Option<String>,
    pub profile_url: Option<String>,
    pub is_active: Option<bool>,
}

impl UpdateUserParams {
    pub fn from_dto(user_id: String, dto: UpdateUserDto) -> Result<Self, AppError> {
        Ok(Self {
            user_id,
            name: required(dto.name, "Name is required")?,
            phone: non_blank(dto.phone),
            member: dto.member,
            country: non_blank(dto.country),
            area: non_blank(dto.area),
            district: non_blank(dto.district),
            local_assembly: non_blank(dto.local_assembly),
            profile_url: non_blank(dto.profile_url),
            is_active: dto.is_active,
        })
    }
}
