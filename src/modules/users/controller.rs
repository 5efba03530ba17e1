use axum::{Json, extract::State};
use brevity_core::AppError;
use tracing::instrument;

use crate::docs::ErrorResponse;
use crate::middleware::auth::AuthUser;
use crate::modules::auth::model::MessageResponse;
use crate::modules::users::model::{ChangePasswordRequest, UpdateProfileRequest, UserProfile};
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Get the current user's profile
#[utoipa::path(
    get,
    path = "/api/users/profile",
    responses(
        (status = 200, description = "User profile", body = UserProfile),
        (status = 401, description = "Could not validate credentials", body = ErrorResponse),
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<UserProfile>, AppError> {
    let user = UserService::current_user(state.users.as_ref(), auth_user.user_id()?).await?;
    Ok(Json(user.into()))
}

/// Update full name and/or email
#[utoipa::path(
    put,
    path = "/api/users/profile",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Updated profile", body = UserProfile),
        (status = 400, description = "Email already registered", body = ErrorResponse),
        (status = 401, description = "Could not validate credentials", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn update_profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<UpdateProfileRequest>,
) -> Result<Json<UserProfile>, AppError> {
    let user =
        UserService::update_profile(state.users.as_ref(), auth_user.user_id()?, dto).await?;
    Ok(Json(user.into()))
}

/// Change password
#[utoipa::path(
    put,
    path = "/api/users/password",
    request_body = ChangePasswordRequest,
    responses(
        (status = 200, description = "Password changed", body = MessageResponse),
        (status = 400, description = "Incorrect current password", body = ErrorResponse),
        (status = 401, description = "Could not validate credentials", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn change_password(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<ChangePasswordRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    UserService::change_password(
        state.users.as_ref(),
        &state.password_config,
        auth_user.user_id()?,
        dto,
    )
    .await?;
    Ok(Json(MessageResponse::new("Password updated successfully")))
}
