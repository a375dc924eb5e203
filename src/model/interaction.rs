use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of like, unlike, save and unsave requests.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InteractionDto {
    pub business_id: Option<String>,
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct InteractionStatusDto {
    pub liked: bool,
    pub saved: bool,
}
