//! Authentication API handlers

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Extension, Json};

use super::dto::{
    LoginRequest, RegisterRequest, RegisterResponse, TokenResponse, UserDto, UserResponse,
};
use crate::application::IdentityService;
use crate::domain::Caller;
use crate::interfaces::http::common::{
    ErrorResponse, FieldErrorsResponse, MessageResponse, ValidatedJson,
};
use crate::interfaces::http::error::ApiResult;

#[derive(Clone)]
pub struct AuthHandlerState {
    pub identity: Arc<IdentityService>,
}

#[utoipa::path(
    post,
    path = "/register",
    tag = "Authentication",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User created and signed in", body = RegisterResponse),
        (status = 400, description = "Validation error", body = FieldErrorsResponse)
    )
)]
pub async fn register(
    State(state): State<AuthHandlerState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<RegisterResponse>)> {
    let auth = state
        .identity
        .register(&request.name, &request.email, &request.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            user: UserDto::from(auth.user),
            token: auth.token,
        }),
    ))
}

/// Successful logins answer 203, which existing clients rely on.
#[utoipa::path(
    post,
    path = "/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 203, description = "Signed in", body = TokenResponse),
        (status = 400, description = "Validation error", body = FieldErrorsResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse)
    )
)]
pub async fn login(
    State(state): State<AuthHandlerState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<(StatusCode, Json<TokenResponse>)> {
    let auth = state
        .identity
        .authenticate(&request.email, &request.password)
        .await?;

    Ok((
        StatusCode::NON_AUTHORITATIVE_INFORMATION,
        Json(TokenResponse { token: auth.token }),
    ))
}

#[utoipa::path(
    get,
    path = "/user",
    tag = "Authentication",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user", body = UserResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "User no longer exists", body = ErrorResponse)
    )
)]
pub async fn current_user(
    State(state): State<AuthHandlerState>,
    Extension(caller): Extension<Caller>,
) -> ApiResult<Json<UserResponse>> {
    let user = state.identity.current_user(&caller).await?;
    Ok(Json(UserResponse {
        user: UserDto::from(user),
    }))
}

#[utoipa::path(
    post,
    path = "/logout",
    tag = "Authentication",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Token revoked", body = MessageResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn logout(
    State(state): State<AuthHandlerState>,
    Extension(caller): Extension<Caller>,
) -> ApiResult<Json<MessageResponse>> {
    state.identity.invalidate(&caller).await?;
    Ok(Json(MessageResponse::new("Successfully logged out")))
}
