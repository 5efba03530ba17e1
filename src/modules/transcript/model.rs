use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Which rendition of a transcript an operation works on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TextType {
    #[default]
    Original,
    Rewritten,
    Summary,
}

impl fmt::Display for TextType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TextType::Original => "original",
            TextType::Rewritten => "rewritten",
            TextType::Summary => "summary",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SummaryLength {
    Short,
    #[default]
    Medium,
    Long,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ExtractRequest {
    #[validate(url(message = "youtube_url must be a valid URL"))]
    pub youtube_url: String,
}

fn default_tone() -> String {
    "professional".to_string()
}

fn default_clarity_level() -> u8 {
    1
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RewriteRequest {
    pub transcript_id: i64,
    #[serde(default = "default_tone")]
    #[validate(length(min = 1, max = 50, message = "tone must be 1-50 characters"))]
    pub tone: String,
    #[serde(default = "default_clarity_level")]
    #[validate(range(min = 1, max = 5, message = "clarity_level must be between 1 and 5"))]
    pub clarity_level: u8,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SummaryRequest {
    pub transcript_id: i64,
    #[serde(default)]
    pub length: SummaryLength,
}

fn default_limit() -> u32 {
    10
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListTranscriptsQuery {
    /// Number of transcripts to skip
    #[serde(default)]
    pub skip: u32,
    /// Maximum number of transcripts to return
    #[serde(default = "default_limit")]
    pub limit: u32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ExtractResponse {
    pub message: String,
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListTranscriptsResponse {
    pub message: String,
    pub skip: u32,
    pub limit: u32,
}
