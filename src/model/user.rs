use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public view of a user account. Never carries password, OTP or reset token material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
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

/// Self-service registration body.
///
/// `is_member` and `local` keep the names used by the mobile client.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct SignupDto {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub password: Option<String>,
    #[serde(default, alias = "isMember")]
    pub is_member: bool,
    pub country: Option<String>,
    pub area: Option<String>,
    pub district: Option<String>,
    pub local: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignupResultDto {
    pub user: UserDto,
    pub requires_otp: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct VerifyOtpDto {
    pub phone: Option<String>,
    pub otp: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ResendOtpDto {
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OtpSentDto {
    pub phone: String,
    pub expires_in: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub otp: Option<String>,
}

/// Admin account creation body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateUserDto {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub password: Option<String>,
    #[serde(default, alias = "isMember")]
    pub is_member: bool,
    pub country: Option<String>,
    pub area: Option<String>,
    pub district: Option<String>,
    pub local: Option<String>,
    #[serde(alias = "profileUrl")]
    pub profile_url: Option<String>,
}

/// Profile fields a user may change on their own account.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileDto {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub country: Option<String>,
    pub area: Option<String>,
    pub district: Option<String>,
    pub local_assembly: Option<String>,
    pub profile_url: Option<String>,
}

/// Admin replacement of a user's editable fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserDto {
    pub name: Option<String>,
    pub phone: Option<String>,
    #[serde(default)]
    pub member: bool,
    pub country: Option<String>,
    pub area: Option<String>,
    pub district: Option<String>,
    pub local_assembly: Option<String>,
    pub profile_url: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordDto {
    pub current_password: Option<String>,
    pub new_password: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResetUserPasswordDto {
    pub new_password: Option<String>,
}
