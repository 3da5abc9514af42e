//! Itinerary API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use tracing::info;

use super::dto::{
    CategoryCountDto, CategoryCountsResponse, GroupedItinerariesResponse, ItineraryMutationResponse,
    ItineraryRequest, ItinerarySummaryDto, ItinerarySummaryResponse, PopularItineraryDto,
    TopItinerariesResponse,
};
use crate::application::ItineraryService;
use crate::domain::{Caller, DomainError};
use crate::interfaces::http::common::{
    ErrorResponse, FieldErrorsResponse, MessageResponse, ValidatedJson,
};
use crate::interfaces::http::error::ApiResult;

#[derive(Clone)]
pub struct ItineraryHandlerState {
    pub service: Arc<ItineraryService>,
}

// ── Reads ───────────────────────────────────────────────────────

#[utoipa::path(
    get,
    path = "/itineraires",
    tag = "Itineraries",
    responses((status = 200, description = "All itineraries grouped with their destinations", body = GroupedItinerariesResponse))
)]
pub async fn list_itineraries(
    State(state): State<ItineraryHandlerState>,
) -> ApiResult<Json<GroupedItinerariesResponse>> {
    Ok(Json(state.service.list().await?.into()))
}

#[utoipa::path(
    get,
    path = "/itineraires/{id}",
    tag = "Itineraries",
    params(("id" = i32, Path, description = "Itinerary ID")),
    responses(
        (status = 200, description = "Itinerary with its destinations", body = ItinerarySummaryResponse),
        (status = 404, description = "Unknown itinerary", body = ErrorResponse)
    )
)]
pub async fn get_itinerary(
    State(state): State<ItineraryHandlerState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<ItinerarySummaryResponse>> {
    let itinerary = state.service.get(id).await?;
    Ok(Json(ItinerarySummaryResponse {
        itineraire: ItinerarySummaryDto::from(itinerary),
    }))
}

#[utoipa::path(
    get,
    path = "/itineraires/categorie/{id}",
    tag = "Itineraries",
    params(("id" = i32, Path, description = "Category ID")),
    responses((status = 200, description = "Itineraries of the category", body = GroupedItinerariesResponse))
)]
pub async fn itineraries_by_category(
    State(state): State<ItineraryHandlerState>,
    Path(category_id): Path<i32>,
) -> ApiResult<Json<GroupedItinerariesResponse>> {
    Ok(Json(state.service.by_category(category_id).await?.into()))
}

#[utoipa::path(
    get,
    path = "/itineraires/search/{term}",
    tag = "Itineraries",
    params(("term" = String, Path, description = "Case-insensitive title fragment")),
    responses((status = 200, description = "Matching itineraries", body = GroupedItinerariesResponse))
)]
pub async fn search_itineraries(
    State(state): State<ItineraryHandlerState>,
    Path(term): Path<String>,
) -> ApiResult<Json<GroupedItinerariesResponse>> {
    Ok(Json(state.service.search(&term).await?.into()))
}

#[utoipa::path(
    get,
    path = "/my-itineraires",
    tag = "Itineraries",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Itineraries created by the caller", body = GroupedItinerariesResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn my_itineraries(
    State(state): State<ItineraryHandlerState>,
    Extension(caller): Extension<Caller>,
) -> ApiResult<Json<GroupedItinerariesResponse>> {
    Ok(Json(state.service.owned_by(&caller).await?.into()))
}

#[utoipa::path(
    get,
    path = "/itineraires/avisiter",
    tag = "Itineraries",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Itineraries the caller wants to visit", body = GroupedItinerariesResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn to_visit(
    State(state): State<ItineraryHandlerState>,
    Extension(caller): Extension<Caller>,
) -> ApiResult<Json<GroupedItinerariesResponse>> {
    Ok(Json(state.service.to_visit(&caller).await?.into()))
}

// ── Writes ──────────────────────────────────────────────────────

#[utoipa::path(
    post,
    path = "/itineraires/add",
    tag = "Itineraries",
    security(("bearer_auth" = [])),
    request_body = ItineraryRequest,
    responses(
        (status = 200, description = "Itinerary created", body = ItineraryMutationResponse),
        (status = 400, description = "Validation error", body = FieldErrorsResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn create_itinerary(
    State(state): State<ItineraryHandlerState>,
    Extension(caller): Extension<Caller>,
    ValidatedJson(request): ValidatedJson<ItineraryRequest>,
) -> ApiResult<Json<ItineraryMutationResponse>> {
    let itinerary = state.service.create(&caller, request.into()).await?;
    info!(
        itinerary_id = itinerary.id,
        user_id = caller.user_id,
        "Itinerary created"
    );
    Ok(Json(ItineraryMutationResponse {
        message: "Itinéraire created".to_string(),
        itineraire: itinerary.into(),
    }))
}

#[utoipa::path(
    put,
    path = "/itineraires/{id}",
    tag = "Itineraries",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Itinerary ID")),
    request_body = ItineraryRequest,
    responses(
        (status = 200, description = "Itinerary replaced", body = ItineraryMutationResponse),
        (status = 400, description = "Validation error", body = FieldErrorsResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Caller does not own the itinerary", body = ErrorResponse),
        (status = 404, description = "Unknown itinerary", body = ErrorResponse)
    )
)]
pub async fn update_itinerary(
    State(state): State<ItineraryHandlerState>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<ItineraryRequest>,
) -> ApiResult<Json<ItineraryMutationResponse>> {
    let itinerary = state.service.update(&caller, id, request.into()).await?;
    Ok(Json(ItineraryMutationResponse {
        message: "Itinéraire updated".to_string(),
        itineraire: itinerary.into(),
    }))
}

#[utoipa::path(
    delete,
    path = "/itineraires/{id}",
    tag = "Itineraries",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Itinerary ID")),
    responses(
        (status = 200, description = "Itinerary deleted", body = MessageResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Caller does not own the itinerary", body = ErrorResponse),
        (status = 404, description = "Unknown itinerary", body = ErrorResponse)
    )
)]
pub async fn delete_itinerary(
    State(state): State<ItineraryHandlerState>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<i32>,
) -> ApiResult<Json<MessageResponse>> {
    state.service.delete(&caller, id).await?;
    Ok(Json(MessageResponse::new("Itinéraire deleted")))
}

// ── To-visit list ───────────────────────────────────────────────

/// Idempotent; also mounted as `GET` for older clients.
#[utoipa::path(
    post,
    path = "/itineraires/{id}/visiter",
    tag = "Itineraries",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Itinerary ID")),
    responses(
        (status = 200, description = "Itinerary is on the to-visit list", body = MessageResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "Unknown itinerary", body = ErrorResponse)
    )
)]
pub async fn add_to_visit(
    State(state): State<ItineraryHandlerState>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<i32>,
) -> ApiResult<Json<MessageResponse>> {
    let message = if state.service.bookmark(&caller, id).await? {
        "itineraires avisiter created"
    } else {
        "itineraires avisiter already exists"
    };
    Ok(Json(MessageResponse::new(message)))
}

#[utoipa::path(
    delete,
    path = "/itineraires/{id}/visiter",
    tag = "Itineraries",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Itinerary ID")),
    responses(
        (status = 200, description = "Removed from the to-visit list", body = MessageResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "Unknown itinerary or not on the list", body = ErrorResponse)
    )
)]
pub async fn remove_to_visit(
    State(state): State<ItineraryHandlerState>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<i32>,
) -> ApiResult<Json<MessageResponse>> {
    if !state.service.unbookmark(&caller, id).await? {
        return Err(DomainError::not_found("Bookmark", id).into());
    }
    Ok(Json(MessageResponse::new("itineraires avisiter removed")))
}

// ── Reports ─────────────────────────────────────────────────────

#[utoipa::path(
    get,
    path = "/itineraires/top",
    tag = "Itineraries",
    responses((status = 200, description = "Ten most bookmarked itineraries", body = TopItinerariesResponse))
)]
pub async fn top_itineraries(
    State(state): State<ItineraryHandlerState>,
) -> ApiResult<Json<TopItinerariesResponse>> {
    let top = state.service.most_bookmarked().await?;
    Ok(Json(TopItinerariesResponse {
        itineraires: top.into_iter().map(PopularItineraryDto::from).collect(),
    }))
}

#[utoipa::path(
    get,
    path = "/itineraires/categorie/count",
    tag = "Itineraries",
    responses((status = 200, description = "Itinerary count per non-empty category", body = CategoryCountsResponse))
)]
pub async fn count_by_category(
    State(state): State<ItineraryHandlerState>,
) -> ApiResult<Json<CategoryCountsResponse>> {
    let counts = state.service.category_counts().await?;
    Ok(Json(CategoryCountsResponse {
        itineraires: counts.into_iter().map(CategoryCountDto::from).collect(),
    }))
}
