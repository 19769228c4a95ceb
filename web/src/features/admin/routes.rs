use axum::{Router, middleware, routing::get};

use super::handlers::{event_statistics, list_registrations};
use crate::middleware::auth::{AuthState, require_auth};
use crate::state::AppState;

pub fn routes(auth: AuthState) -> Router<AppState> {
    Router::new()
        .route("/registrations", get(list_registrations))
        .route("/statistics", get(event_statistics))
        .route_layer(middleware::from_fn_with_state(auth, require_auth))
}
