use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BusinessDto {
    pub business_id: String,
    pub user_id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub hours: Option<String>,
    pub address: Option<String>,
    pub country: Option<String>,
    pub region: Option<String>,
    pub gps: Option<String>,
    pub banner_url: Option<String>,
    pub logo: Option<String>,
    pub primary_contact: Option<String>,
    pub secondary_contact: Option<String>,
    pub business_email: Option<String>,
    pub verified: bool,
    pub active: bool,
    pub liked: i32,
    pub saved: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBusinessDto {
    pub user_id: Option<String>,
    pub title: Option<String>,
    #[serde(flatten)]
    pub details: BusinessDetailsDto,
}

/// Optional descriptive fields shared by business creation and update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BusinessDetailsDto {
    pub subtitle: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub hours: Option<String>,
    pub address: Option<String>,
    pub country: Option<String>,
    pub region: Option<String>,
    pub gps: Option<String>,
    pub banner_url: Option<String>,
    pub logo: Option<String>,
    pub primary_contact: Option<String>,
    pub secondary_contact: Option<String>,
    pub business_email: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBusinessDto {
    pub title: Option<String>,
    #[serde(flatten)]
    pub details: BusinessDetailsDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BusinessRefDto {
    pub business_id: String,
}
