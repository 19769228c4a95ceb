use axum::{Json, extract::State};
use storage::{Database, dto::admin::RegistrationRecord, models::EventStatistics};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/admin/registrations",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Every registration with player and partner details", body = Vec<RegistrationRecord>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "admin"
)]
pub async fn list_registrations(
    State(db): State<Database>,
) -> Result<Json<Vec<RegistrationRecord>>, WebError> {
    let registrations = services::list_registrations(db.pool()).await?;

    Ok(Json(registrations))
}

#[utoipa::path(
    get,
    path = "/api/admin/statistics",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Per-event registration counts", body = Vec<EventStatistics>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "admin"
)]
pub async fn event_statistics(
    State(db): State<Database>,
) -> Result<Json<Vec<EventStatistics>>, WebError> {
    let statistics = services::event_statistics(db.pool()).await?;

    Ok(Json(statistics))
}
