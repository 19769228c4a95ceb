use axum::{
    Router, middleware,
    routing::{get, post},
};

use super::handlers::{create_event, list_events};
use crate::middleware::auth::{AuthState, require_auth};
use crate::state::AppState;

pub fn routes(auth: AuthState) -> Router<AppState> {
    let protected = Router::new()
        .route("/", post(create_event))
        .route_layer(middleware::from_fn_with_state(auth, require_auth));

    Router::new().route("/", get(list_events)).merge(protected)
}
