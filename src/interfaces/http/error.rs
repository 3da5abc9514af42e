//! HTTP mapping for domain errors.
//!
//! Keeps `DomainError` HTTP-agnostic while giving every handler the same
//! JSON error bodies and status codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use super::common::{ErrorResponse, FieldErrorsResponse};
use crate::domain::DomainError;

/// Result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Wrapper turning a `DomainError` into a response.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

fn status_for(err: &DomainError) -> StatusCode {
    match err {
        DomainError::Validation(_) | DomainError::InvalidFields(_) => StatusCode::BAD_REQUEST,
        DomainError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        DomainError::Forbidden(_) => StatusCode::FORBIDDEN,
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Conflict(_) => StatusCode::CONFLICT,
        DomainError::Storage(_) | DomainError::Crypto(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_for(&self.0);

        match self.0 {
            DomainError::InvalidFields(errors) => {
                (status, Json(FieldErrorsResponse { errors })).into_response()
            }
            DomainError::NotFound { entity, .. } => {
                (status, Json(ErrorResponse::new(format!("{} not found", entity)))).into_response()
            }
            DomainError::Storage(detail) | DomainError::Crypto(detail) => {
                // Details stay in the logs
                error!(error = %detail, "Request failed");
                (status, Json(ErrorResponse::new("Internal server error"))).into_response()
            }
            DomainError::Validation(message)
            | DomainError::Conflict(message)
            | DomainError::Unauthorized(message)
            | DomainError::Forbidden(message) => {
                (status, Json(ErrorResponse::new(message))).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn render(err: DomainError) -> (StatusCode, Value) {
        let response = ApiError(err).into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn field_errors_render_as_errors_map() {
        let (status, body) =
            render(DomainError::invalid_field("titre", "The titre field is required.")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errors"]["titre"][0], "The titre field is required.");
    }

    #[tokio::test]
    async fn internal_details_are_redacted() {
        let (status, body) = render(DomainError::Storage("disk on fire".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal server error");
    }

    #[tokio::test]
    async fn statuses_follow_the_error_kind() {
        assert_eq!(render(DomainError::Unauthorized("x".into())).await.0, StatusCode::UNAUTHORIZED);
        assert_eq!(render(DomainError::Forbidden("x".into())).await.0, StatusCode::FORBIDDEN);
        assert_eq!(render(DomainError::Conflict("x".into())).await.0, StatusCode::CONFLICT);

        let (status, body) = render(DomainError::not_found("Itinerary", 3)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Itinerary not found");
    }
}
