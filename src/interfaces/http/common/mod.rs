//! Shared HTTP building blocks

pub mod validated_json;

pub use validated_json::ValidatedJson;

use serde::Serialize;
use utoipa::ToSchema;

use crate::shared::errors::FieldErrors;

/// `{"error": "..."}`
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// `{"errors": {"field": ["message", ...]}}`
#[derive(Debug, Serialize, ToSchema)]
pub struct FieldErrorsResponse {
    #[schema(value_type = Object)]
    pub errors: FieldErrors,
}

/// `{"message": "..."}`
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
