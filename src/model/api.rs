use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Response envelope returned by every endpoint.
///
/// `success` is `1` for successful requests and `0` for errors. `info` carries a single
/// record or a small summary of what changed, `data` carries a record collection or the
/// primary payload. Either may be `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse {
    pub success: u8,
    pub message: String,
    #[schema(value_type = Option<Object>)]
    pub info: Value,
    #[schema(value_type = Option<Object>)]
    pub data: Value,
}

impl ApiResponse {
    /// Successful envelope with `info` and `data` set to `null`.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: 1,
            message: message.into(),
            info: Value::Null,
            data: Value::Null,
        }
    }

    /// Error envelope carrying only a message.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: 0,
            message: message.into(),
            info: Value::Null,
            data: Value::Null,
        }
    }

    pub fn with_info<T: Serialize>(mut self, info: &T) -> Result<Self, serde_json::Error> {
        self.info = serde_json::to_value(info)?;
        Ok(self)
    }

    pub fn with_data<T: Serialize>(mut self, data: &T) -> Result<Self, serde_json::Error> {
        self.data = serde_json::to_value(data)?;
        Ok(self)
    }
}

/// Body for endpoints that flip a single boolean flag.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StatusDto {
    pub status: Option<bool>,
}
