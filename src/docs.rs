use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi, ToSchema};

use crate::health::HealthResponse;
use crate::modules::audio::model::{GenerateAudioRequest, VoicesResponse};
use crate::modules::auth::model::{LoginRequest, MessageResponse, RegisterRequest, TokenResponse};
use crate::modules::download::model::DownloadFormat;
use crate::modules::transcript::model::{
    ExtractRequest, ExtractResponse, ListTranscriptsResponse, RewriteRequest, SummaryLength,
    SummaryRequest, TextType,
};
use crate::modules::users::model::{ChangePasswordRequest, UpdateProfileRequest, UserProfile};

/// Body of every error response, as rendered by `AppError`.
#[derive(ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::health::root,
        crate::health::health_check,
        crate::modules::auth::controller::register,
        crate::modules::auth::controller::login,
        crate::modules::auth::controller::refresh,
        crate::modules::auth::controller::logout,
        crate::modules::auth::controller::me,
        crate::modules::users::controller::get_profile,
        crate::modules::users::controller::update_profile,
        crate::modules::users::controller::change_password,
        crate::modules::transcript::controller::extract_transcript,
        crate::modules::transcript::controller::rewrite_transcript,
        crate::modules::transcript::controller::generate_summary,
        crate::modules::transcript::controller::list_transcripts,
        crate::modules::transcript::controller::get_transcript,
        crate::modules::transcript::controller::delete_transcript,
        crate::modules::audio::controller::generate_audio,
        crate::modules::audio::controller::get_voices,
        crate::modules::audio::controller::get_audio,
        crate::modules::audio::controller::delete_audio,
        crate::modules::download::controller::download_transcript,
        crate::modules::download::controller::download_audio,
    ),
    components(
        schemas(
            HealthResponse,
            RegisterRequest,
            LoginRequest,
            TokenResponse,
            MessageResponse,
            ErrorResponse,
            UserProfile,
            UpdateProfileRequest,
            ChangePasswordRequest,
            TextType,
            SummaryLength,
            ExtractRequest,
            ExtractResponse,
            RewriteRequest,
            SummaryRequest,
            ListTranscriptsResponse,
            GenerateAudioRequest,
            VoicesResponse,
            DownloadFormat,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Service status"),
        (name = "Authentication", description = "Registration, login and token refresh"),
        (name = "Users", description = "Profile management for the current user"),
        (name = "Transcript", description = "Transcript extraction, rewriting and summaries"),
        (name = "Audio", description = "Text-to-speech generation"),
        (name = "Download", description = "Transcript and audio downloads")
    ),
    info(
        title = "Brevity AI API",
        version = "0.1.0",
        description = "API for transforming YouTube videos into clear, concise content.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
