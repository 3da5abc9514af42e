//! Category API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{
    CategoryDto, CategoryListResponse, CategoryMutationResponse, CategoryRequest, CategoryResponse,
};
use crate::application::CategoryService;
use crate::interfaces::http::common::{
    ErrorResponse, FieldErrorsResponse, MessageResponse, ValidatedJson,
};
use crate::interfaces::http::error::ApiResult;

#[derive(Clone)]
pub struct CategoryHandlerState {
    pub service: Arc<CategoryService>,
}

#[utoipa::path(
    get,
    path = "/categories",
    tag = "Categories",
    responses((status = 200, description = "All categories", body = CategoryListResponse))
)]
pub async fn list_categories(
    State(state): State<CategoryHandlerState>,
) -> ApiResult<Json<CategoryListResponse>> {
    let categories = state.service.list().await?;
    Ok(Json(CategoryListResponse {
        categories: categories.into_iter().map(CategoryDto::from).collect(),
    }))
}

#[utoipa::path(
    get,
    path = "/categories/{id}",
    tag = "Categories",
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category", body = CategoryResponse),
        (status = 404, description = "Unknown category", body = ErrorResponse)
    )
)]
pub async fn get_category(
    State(state): State<CategoryHandlerState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<CategoryResponse>> {
    let categorie = state.service.get(id).await?;
    Ok(Json(CategoryResponse {
        categorie: categorie.into(),
    }))
}

/// Also mounted at `POST /categorie/add`.
#[utoipa::path(
    post,
    path = "/categories",
    tag = "Categories",
    security(("bearer_auth" = [])),
    request_body = CategoryRequest,
    responses(
        (status = 201, description = "Category created", body = CategoryMutationResponse),
        (status = 400, description = "Validation error", body = FieldErrorsResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn create_category(
    State(state): State<CategoryHandlerState>,
    ValidatedJson(request): ValidatedJson<CategoryRequest>,
) -> ApiResult<(StatusCode, Json<CategoryMutationResponse>)> {
    let categorie = state.service.create(&request.titre).await?;
    Ok((
        StatusCode::CREATED,
        Json(CategoryMutationResponse {
            message: "Categorie Created Successfully".to_string(),
            categorie: categorie.into(),
        }),
    ))
}

#[utoipa::path(
    put,
    path = "/categories/{id}",
    tag = "Categories",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Category ID")),
    request_body = CategoryRequest,
    responses(
        (status = 200, description = "Category updated", body = CategoryMutationResponse),
        (status = 400, description = "Validation error", body = FieldErrorsResponse),
        (status = 404, description = "Unknown category", body = ErrorResponse)
    )
)]
pub async fn update_category(
    State(state): State<CategoryHandlerState>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<CategoryRequest>,
) -> ApiResult<Json<CategoryMutationResponse>> {
    let categorie = state.service.update(id, &request.titre).await?;
    Ok(Json(CategoryMutationResponse {
        message: "Category updated successfully".to_string(),
        categorie: categorie.into(),
    }))
}

#[utoipa::path(
    delete,
    path = "/categories/{id}",
    tag = "Categories",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category deleted", body = MessageResponse),
        (status = 404, description = "Unknown category", body = ErrorResponse),
        (status = 409, description = "Category still has itineraries", body = ErrorResponse)
    )
)]
pub async fn delete_category(
    State(state): State<CategoryHandlerState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<MessageResponse>> {
    state.service.delete(id).await?;
    Ok(Json(MessageResponse::new("Category deleted successfully")))
}
