use axum::{
    Router,
    routing::{get, post},
};

use super::controller::{
    delete_transcript, extract_transcript, generate_summary, get_transcript, list_transcripts,
    rewrite_transcript,
};
use crate::state::AppState;

pub fn init_transcript_router() -> Router<AppState> {
    Router::new()
        .route("/extract", post(extract_transcript))
        .route("/rewrite", post(rewrite_transcript))
        .route("/summary", post(generate_summary))
        // Static segments win over `{id}`, so `/list` never parses as an id.
        .route("/list", get(list_transcripts))
        .route("/{id}", get(get_transcript).delete(delete_transcript))
}
