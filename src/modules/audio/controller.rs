use axum::Json;
use brevity_core::AppError;
use tracing::instrument;

use super::model::{DEFAULT_VOICE_MODEL, GenerateAudioRequest, VoicesResponse};
use crate::docs::ErrorResponse;
use crate::middleware::auth::AuthUser;
use crate::modules::auth::model::MessageResponse;
use crate::validator::{ValidatedJson, ValidatedPath};

/// Convert transcript text to speech
#[utoipa::path(
    post,
    path = "/api/audio/generate",
    request_body = GenerateAudioRequest,
    responses(
        (status = 200, description = "Generation accepted", body = MessageResponse),
        (status = 401, description = "Could not validate credentials", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Audio"
)]
#[instrument(skip(_auth_user))]
pub async fn generate_audio(
    _auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<GenerateAudioRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    Ok(Json(MessageResponse::new(format!(
        "Audio generation endpoint for transcript ID {} with {} voice",
        dto.transcript_id, dto.voice_model
    ))))
}

/// Available voice models
#[utoipa::path(
    get,
    path = "/api/audio/voices",
    responses(
        (status = 200, description = "Voice models", body = VoicesResponse),
        (status = 401, description = "Could not validate credentials", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Audio"
)]
#[instrument(skip(_auth_user))]
pub async fn get_voices(_auth_user: AuthUser) -> Json<VoicesResponse> {
    Json(VoicesResponse {
        message: "Get available voice models endpoint".to_string(),
        voices: vec![DEFAULT_VOICE_MODEL.to_string()],
    })
}

#[utoipa::path(
    get,
    path = "/api/audio/{id}",
    params(
        ("id" = i64, Path, description = "Audio file ID")
    ),
    responses(
        (status = 200, description = "Audio file", body = MessageResponse),
        (status = 400, description = "Invalid audio file ID", body = ErrorResponse),
        (status = 401, description = "Could not validate credentials", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Audio"
)]
#[instrument(skip(_auth_user))]
pub async fn get_audio(
    _auth_user: AuthUser,
    ValidatedPath(id): ValidatedPath<i64>,
) -> Json<MessageResponse> {
    Json(MessageResponse::new(format!("Get audio endpoint for ID {}", id)))
}

#[utoipa::path(
    delete,
    path = "/api/audio/{id}",
    params(
        ("id" = i64, Path, description = "Audio file ID")
    ),
    responses(
        (status = 200, description = "Audio file deleted", body = MessageResponse),
        (status = 400, description = "Invalid audio file ID", body = ErrorResponse),
        (status = 401, description = "Could not validate credentials", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Audio"
)]
#[instrument(skip(_auth_user))]
pub async fn delete_audio(
    _auth_user: AuthUser,
    ValidatedPath(id): ValidatedPath<i64>,
) -> Json<MessageResponse> {
    Json(MessageResponse::new(format!(
        "Delete audio endpoint for ID {}",
        id
    )))
}
