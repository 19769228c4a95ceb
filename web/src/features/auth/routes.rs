use axum::{Router, routing::post};

use super::handlers::{login, user_login};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/user-login", post(user_login))
}
