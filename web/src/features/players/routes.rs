use axum::{
    Router, middleware,
    routing::{get, post, put},
};

use super::handlers::{create_player, list_players, player_dashboard, update_player};
use crate::middleware::auth::{AuthState, require_auth};
use crate::state::AppState;

pub fn routes(auth: AuthState) -> Router<AppState> {
    let protected = Router::new()
        .route("/", get(list_players))
        .route_layer(middleware::from_fn_with_state(auth, require_auth));

    Router::new()
        .route("/", post(create_player))
        .route("/:id", put(update_player))
        .route("/dashboard/:id", get(player_dashboard))
        .merge(protected)
}
