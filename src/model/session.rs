use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Session as exposed to clients. `active` is always a JSON boolean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionDto {
    pub session_id: String,
    pub session_title: String,
    #[serde(rename = "Academicyear")]
    pub academic_year: Option<String>,
    pub year_id: Option<String>,
    pub active: bool,
    pub year_colors: Option<String>,
    pub session_color: String,
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionDto {
    pub session_title: Option<String>,
    #[serde(rename = "Academicyear")]
    pub academic_year: Option<String>,
    pub year_id: Option<String>,
    #[serde(default)]
    pub active: bool,
    pub year_colors: Option<String>,
    pub created_by: Option<String>,
}

/// Partial session update. Omitted fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSessionDto {
    pub session_id: Option<String>,
    pub session_title: Option<String>,
    #[serde(rename = "Academicyear")]
    pub academic_year: Option<String>,
    pub year_id: Option<String>,
    pub active: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActivateSessionDto {
    pub session_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionRefDto {
    pub session_id: String,
}

/// `info` payload of a session creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionCreatedDto {
    pub session_id: String,
    pub session_color: String,
}
