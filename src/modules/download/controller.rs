use axum::Json;
use tracing::instrument;

use super::model::DownloadTranscriptQuery;
use crate::docs::ErrorResponse;
use crate::middleware::auth::AuthUser;
use crate::modules::auth::model::MessageResponse;
use crate::validator::{ValidatedPath, ValidatedQuery};

/// Download a transcript rendition as a file
#[utoipa::path(
    get,
    path = "/api/download/transcript/{id}",
    params(
        ("id" = i64, Path, description = "Transcript ID"),
        DownloadTranscriptQuery
    ),
    responses(
        (status = 200, description = "Transcript file", body = MessageResponse),
        (status = 400, description = "Unknown text type or format", body = ErrorResponse),
        (status = 401, description = "Could not validate credentials", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Download"
)]
#[instrument(skip(_auth_user))]
pub async fn download_transcript(
    _auth_user: AuthUser,
    ValidatedPath(id): ValidatedPath<i64>,
    ValidatedQuery(params): ValidatedQuery<DownloadTranscriptQuery>,
) -> Json<MessageResponse> {
    Json(MessageResponse::new(format!(
        "Download transcript endpoint for ID {}, type: {}, format: {}",
        id, params.text_type, params.format
    )))
}

/// Download a generated audio file
#[utoipa::path(
    get,
    path = "/api/download/audio/{id}",
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
    tag = "Download"
)]
#[instrument(skip(_auth_user))]
pub async fn download_audio(
    _auth_user: AuthUser,
    ValidatedPath(id): ValidatedPath<i64>,
) -> Json<MessageResponse> {
    Json(MessageResponse::new(format!(
        "Download audio endpoint for ID {}",
        id
    )))
}
