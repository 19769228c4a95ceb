use axum::{
    Router,
    routing::{delete, get, post},
};

use super::handlers::{
    available_partners, create_registration, delete_all, register_events, update_ranking,
    update_relationship,
};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_registration))
        .route("/available/:event_name/:player_id", get(available_partners))
        .route("/update-relationship", post(update_relationship))
        .route("/register-events", post(register_events))
        .route("/update-ranking", post(update_ranking))
        .route("/delete-all/:player_id", delete(delete_all))
}
