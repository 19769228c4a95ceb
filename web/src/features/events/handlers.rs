use axum::{Json, extract::State};
use storage::{
    Database,
    dto::common::CreatedResponse,
    dto::event::{CreateEventRequest, EventResponse},
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/events",
    responses(
        (status = 200, description = "All events ordered by name", body = Vec<EventResponse>)
    ),
    tag = "events"
)]
pub async fn list_events(State(db): State<Database>) -> Result<Json<Vec<EventResponse>>, WebError> {
    let events = services::list_events(db.pool()).await?;

    let response: Vec<EventResponse> = events.into_iter().map(EventResponse::from).collect();

    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/api/events",
    request_body = CreateEventRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Event created", body = CreatedResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Event already exists")
    ),
    tag = "events"
)]
pub async fn create_event(
    State(db): State<Database>,
    Json(req): Json<CreateEventRequest>,
) -> Result<Json<CreatedResponse>, WebError> {
    req.validate()?;

    let event = services::create_event(db.pool(), &req).await?;

    Ok(Json(CreatedResponse::new(
        "Event created successfully",
        event.id,
    )))
}
