use axum::extract::FromRef;
use storage::Database;

use crate::middleware::auth::AuthState;

/// Top-level application state; handlers extract the substate they need.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub auth: AuthState,
}

impl FromRef<AppState> for Database {
    fn from_ref(state: &AppState) -> Database {
        state.db.clone()
    }
}

impl FromRef<AppState> for AuthState {
    fn from_ref(state: &AppState) -> AuthState {
        state.auth.clone()
    }
}
