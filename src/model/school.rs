use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SchoolDto {
    pub id: i32,
    pub name: String,
    pub address: Option<String>,
    pub contact1: Option<String>,
    pub contact2: Option<String>,
    pub email: Option<String>,
    pub logo_file: Option<String>,
    pub logo_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpsertSchoolDto {
    pub name: Option<String>,
    pub address: Option<String>,
    pub contact1: Option<String>,
    pub contact2: Option<String>,
    pub email: Option<String>,
}
