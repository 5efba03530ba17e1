use axum::Json;
use brevity_core::AppError;
use tracing::instrument;

use super::model::{
    ExtractRequest, ExtractResponse, ListTranscriptsQuery, ListTranscriptsResponse,
    RewriteRequest, SummaryRequest,
};
use crate::docs::ErrorResponse;
use crate::middleware::auth::AuthUser;
use crate::modules::auth::model::MessageResponse;
use crate::validator::{ValidatedJson, ValidatedPath, ValidatedQuery};

/// Extract the transcript of a YouTube video
#[utoipa::path(
    post,
    path = "/api/transcript/extract",
    request_body = ExtractRequest,
    responses(
        (status = 200, description = "Extraction accepted", body = ExtractResponse),
        (status = 401, description = "Could not validate credentials", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Transcript"
)]
#[instrument(skip(_auth_user))]
pub async fn extract_transcript(
    _auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<ExtractRequest>,
) -> Result<Json<ExtractResponse>, AppError> {
    Ok(Json(ExtractResponse {
        message: "Transcript extraction endpoint".to_string(),
        url: dto.youtube_url,
    }))
}

/// Rewrite a transcript in the requested tone
#[utoipa::path(
    post,
    path = "/api/transcript/rewrite",
    request_body = RewriteRequest,
    responses(
        (status = 200, description = "Rewrite accepted", body = MessageResponse),
        (status = 401, description = "Could not validate credentials", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Transcript"
)]
#[instrument(skip(_auth_user))]
pub async fn rewrite_transcript(
    _auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<RewriteRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    Ok(Json(MessageResponse::new(format!(
        "Transcript rewriting endpoint for ID {}, tone: {}",
        dto.transcript_id, dto.tone
    ))))
}

/// Summarize a transcript
#[utoipa::path(
    post,
    path = "/api/transcript/summary",
    request_body = SummaryRequest,
    responses(
        (status = 200, description = "Summary accepted", body = MessageResponse),
        (status = 401, description = "Could not validate credentials", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Transcript"
)]
#[instrument(skip(_auth_user))]
pub async fn generate_summary(
    _auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<SummaryRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    Ok(Json(MessageResponse::new(format!(
        "Summary generation endpoint for ID {}",
        dto.transcript_id
    ))))
}

/// List the caller's transcripts
#[utoipa::path(
    get,
    path = "/api/transcript/list",
    params(
        ListTranscriptsQuery
    ),
    responses(
        (status = 200, description = "Transcript listing", body = ListTranscriptsResponse),
        (status = 401, description = "Could not validate credentials", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Transcript"
)]
#[instrument(skip(_auth_user))]
pub async fn list_transcripts(
    _auth_user: AuthUser,
    ValidatedQuery(params): ValidatedQuery<ListTranscriptsQuery>,
) -> Json<ListTranscriptsResponse> {
    Json(ListTranscriptsResponse {
        message: "List transcripts endpoint".to_string(),
        skip: params.skip,
        limit: params.limit,
    })
}

#[utoipa::path(
    get,
    path = "/api/transcript/{id}",
    params(
        ("id" = i64, Path, description = "Transcript ID")
    ),
    responses(
        (status = 200, description = "Transcript", body = MessageResponse),
        (status = 400, description = "Invalid transcript ID", body = ErrorResponse),
        (status = 401, description = "Could not validate credentials", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Transcript"
)]
#[instrument(skip(_auth_user))]
pub async fn get_transcript(
    _auth_user: AuthUser,
    ValidatedPath(id): ValidatedPath<i64>,
) -> Json<MessageResponse> {
    Json(MessageResponse::new(format!(
        "Get transcript endpoint for ID {}",
        id
    )))
}

#[utoipa::path(
    delete,
    path = "/api/transcript/{id}",
    params(
        ("id" = i64, Path, description = "Transcript ID")
    ),
    responses(
        (status = 200, description = "Transcript deleted", body = MessageResponse),
        (status = 400, description = "Invalid transcript ID", body = ErrorResponse),
        (status = 401, description = "Could not validate credentials", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Transcript"
)]
#[instrument(skip(_auth_user))]
pub async fn delete_transcript(
    _auth_user: AuthUser,
    ValidatedPath(id): ValidatedPath<i64>,
) -> Json<MessageResponse> {
    Json(MessageResponse::new(format!(
        "Delete transcript endpoint for ID {}",
        id
    )))
}
