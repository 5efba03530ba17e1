use axum::{Router, routing::get};

use super::controller::{download_audio, download_transcript};
use crate::state::AppState;

pub fn init_download_router() -> Router<AppState> {
    Router::new()
        .route("/transcript/{id}", get(download_transcript))
        .route("/audio/{id}", get(download_audio))
}
