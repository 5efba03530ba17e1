use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use brevity_core::AppError;
use tracing::{info, instrument};

use super::model::{LoginRequest, MessageResponse, RegisterRequest, TokenResponse};
use super::service::AuthService;
use crate::docs::ErrorResponse;
use crate::middleware::auth::{AuthUser, BearerToken};
use crate::modules::users::model::UserProfile;
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Register a new user and receive an access token
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered successfully", body = TokenResponse),
        (status = 400, description = "Bad request - username or email already registered", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state))]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<TokenResponse>), AppError> {
    let response = AuthService::register_user(
        state.users.as_ref(),
        &state.authenticator,
        &state.password_config,
        dto,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Login and receive a bearer token
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 401, description = "Incorrect username or password", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state))]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let response = AuthService::login_user(state.users.as_ref(), &state.authenticator, dto).await?;
    Ok(Json(response))
}

/// Exchange a valid token for a new one with a fresh expiry
#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    responses(
        (status = 200, description = "New access token", body = TokenResponse),
        (status = 401, description = "Could not validate credentials", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn refresh(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
) -> Result<Json<TokenResponse>, AppError> {
    let response = AuthService::refresh_token(&state.authenticator, &token)?;
    Ok(Json(response))
}

/// Logout. Tokens are stateless, so the client simply discards its token.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 200, description = "Logged out", body = MessageResponse),
        (status = 401, description = "Could not validate credentials", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn logout(auth_user: AuthUser) -> Json<MessageResponse> {
    info!(sub = ?auth_user.claims().subject(), "User logged out");
    Json(MessageResponse::new("Successfully logged out"))
}

/// Get the authenticated user
#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Current user", body = UserProfile),
        (status = 401, description = "Could not validate credentials", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Authentication"
)]
#[instrument(skip(state))]
pub async fn me(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<UserProfile>, AppError> {
    let user = UserService::current_user(state.users.as_ref(), auth_user.user_id()?).await?;
    Ok(Json(user.into()))
}
