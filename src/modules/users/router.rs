use axum::{
    Router,
    routing::{get, put},
};

use crate::modules::users::controller::{change_password, get_profile, update_profile};
use crate::state::AppState;

pub fn init_users_router() -> Router<AppState> {
    Router::new()
        .route("/profile", get(get_profile).put(update_profile))
        .route("/password", put(change_password))
}
