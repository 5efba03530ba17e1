use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::modules::transcript::model::TextType;

pub const DEFAULT_VOICE_MODEL: &str = "default";

fn default_voice_model() -> String {
    DEFAULT_VOICE_MODEL.to_string()
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct GenerateAudioRequest {
    pub transcript_id: i64,
    /// Rendition to synthesize; `original` unless specified
    #[serde(default)]
    pub text_type: TextType,
    #[serde(default = "default_voice_model")]
    #[validate(length(min = 1, max = 100, message = "voice_model must be 1-100 characters"))]
    pub voice_model: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VoicesResponse {
    pub message: String,
    pub voices: Vec<String>,
}
