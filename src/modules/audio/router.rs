use axum::{
    Router,
    routing::{get, post},
};

use super::controller::{delete_audio, generate_audio, get_audio, get_voices};
use crate::state::AppState;

pub fn init_audio_router() -> Router<AppState> {
    Router::new()
        .route("/generate", post(generate_audio))
        .route("/voices", get(get_voices))
        .route("/{id}", get(get_audio).delete(delete_audio))
}
