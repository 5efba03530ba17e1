use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::modules::transcript::model::TextType;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DownloadFormat {
    #[default]
    Txt,
    Pdf,
}

impl fmt::Display for DownloadFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DownloadFormat::Txt => f.write_str("txt"),
            DownloadFormat::Pdf => f.write_str("pdf"),
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DownloadTranscriptQuery {
    #[serde(default)]
    #[param(inline)]
    pub text_type: TextType,
    #[serde(default)]
    #[param(inline)]
    pub format: DownloadFormat,
}
