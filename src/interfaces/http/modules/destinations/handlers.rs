//! Destination API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{
    CreateDestinationRequest, DestinationCreatedResponse, DestinationDto, DestinationListResponse,
    DestinationResponse,
};
use crate::application::DestinationService;
use crate::interfaces::http::common::{ErrorResponse, FieldErrorsResponse, ValidatedJson};
use crate::interfaces::http::error::ApiResult;

#[derive(Clone)]
pub struct DestinationHandlerState {
    pub service: Arc<DestinationService>,
}

#[utoipa::path(
    get,
    path = "/destinations",
    tag = "Destinations",
    responses((status = 200, description = "All destinations", body = DestinationListResponse))
)]
pub async fn list_destinations(
    State(state): State<DestinationHandlerState>,
) -> ApiResult<Json<DestinationListResponse>> {
    let destinations = state.service.list().await?;
    Ok(Json(DestinationListResponse {
        destinations: destinations.into_iter().map(DestinationDto::from).collect(),
    }))
}

#[utoipa::path(
    get,
    path = "/destinations/{id}",
    tag = "Destinations",
    params(("id" = i32, Path, description = "Destination ID")),
    responses(
        (status = 200, description = "Destination", body = DestinationResponse),
        (status = 404, description = "Unknown destination", body = ErrorResponse)
    )
)]
pub async fn get_destination(
    State(state): State<DestinationHandlerState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<DestinationResponse>> {
    let destination = state.service.get(id).await?;
    Ok(Json(DestinationResponse {
        destination: destination.into(),
    }))
}

#[utoipa::path(
    post,
    path = "/destinations",
    tag = "Destinations",
    security(("bearer_auth" = [])),
    request_body = CreateDestinationRequest,
    responses(
        (status = 201, description = "Destination created", body = DestinationCreatedResponse),
        (status = 400, description = "Validation error", body = FieldErrorsResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn create_destination(
    State(state): State<DestinationHandlerState>,
    ValidatedJson(request): ValidatedJson<CreateDestinationRequest>,
) -> ApiResult<(StatusCode, Json<DestinationCreatedResponse>)> {
    let destination = state.service.create(request.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(DestinationCreatedResponse {
            message: "Destination created".to_string(),
            destination: destination.into(),
        }),
    ))
}
