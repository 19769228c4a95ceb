use axum::{
    Json,
    extract::{Path, State},
};
use storage::{
    Database,
    dto::common::{CreatedResponse, DeletedResponse, MessageResponse},
    dto::partner::{
        AvailablePartner, CreateRegistrationRequest, RegisterEventsRequest,
        UpdateRankingRequest, UpdateRelationshipRequest,
    },
    error::StorageError,
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/api/partners",
    request_body = CreateRegistrationRequest,
    responses(
        (status = 200, description = "Registration row created", body = CreatedResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Unknown player or event"),
        (status = 409, description = "Player already registered for the event")
    ),
    tag = "partners"
)]
pub async fn create_registration(
    State(db): State<Database>,
    Json(req): Json<CreateRegistrationRequest>,
) -> Result<Json<CreatedResponse>, WebError> {
    req.validate()?;

    let id = services::create_registration(db.pool(), &req).await?;

    Ok(Json(CreatedResponse::new(
        "Partner entry created successfully",
        id,
    )))
}

#[utoipa::path(
    get,
    path = "/api/partners/available/{event_name}/{player_id}",
    params(
        ("event_name" = String, Path, description = "Event name"),
        ("player_id" = i32, Path, description = "Requesting player id")
    ),
    responses(
        (status = 200, description = "Players registered for the event, excluding the requester", body = Vec<AvailablePartner>)
    ),
    tag = "partners"
)]
pub async fn available_partners(
    State(db): State<Database>,
    Path((event_name, player_id)): Path<(String, i32)>,
) -> Result<Json<Vec<AvailablePartner>>, WebError> {
    let partners = services::available_partners(db.pool(), &event_name, player_id).await?;

    Ok(Json(partners))
}

#[utoipa::path(
    post,
    path = "/api/partners/update-relationship",
    request_body = UpdateRelationshipRequest,
    responses(
        (status = 200, description = "Both sides of the pairing written", body = MessageResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Unknown player or event")
    ),
    tag = "partners"
)]
pub async fn update_relationship(
    State(db): State<Database>,
    Json(req): Json<UpdateRelationshipRequest>,
) -> Result<Json<MessageResponse>, WebError> {
    req.validate()?;

    if req.user1_id == req.user2_id {
        return Err(WebError::BadRequest(
            "A player cannot partner with themselves".to_string(),
        ));
    }

    services::update_relationship(db.pool(), &req).await?;

    Ok(Json(MessageResponse::new(
        "Partner relationship updated successfully",
    )))
}

#[utoipa::path(
    post,
    path = "/api/partners/register-events",
    request_body = RegisterEventsRequest,
    responses(
        (status = 200, description = "Player registered for the supplied events", body = MessageResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Unknown player or event")
    ),
    tag = "partners"
)]
pub async fn register_events(
    State(db): State<Database>,
    Json(req): Json<RegisterEventsRequest>,
) -> Result<Json<MessageResponse>, WebError> {
    req.validate()?;

    if req.slots().is_empty() {
        return Err(WebError::BadRequest(
            "At least one event is required".to_string(),
        ));
    }

    services::register_events(db.pool(), &req).await?;

    Ok(Json(MessageResponse::new(
        "Player registered for events successfully",
    )))
}

#[utoipa::path(
    post,
    path = "/api/partners/update-ranking",
    request_body = UpdateRankingRequest,
    responses(
        (status = 200, description = "Rank written to the whole team", body = MessageResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Player is not registered for the event"),
        (status = 409, description = "Another team already holds the rank")
    ),
    tag = "partners"
)]
pub async fn update_ranking(
    State(db): State<Database>,
    Json(req): Json<UpdateRankingRequest>,
) -> Result<Json<MessageResponse>, WebError> {
    req.validate()?;

    services::update_ranking(db.pool(), &req)
        .await
        .map_err(|e| match e {
            StorageError::NotFound => {
                WebError::NotFound("No matching registration found to update".to_string())
            }
            e => WebError::Storage(e),
        })?;

    Ok(Json(MessageResponse::new("Ranking updated successfully")))
}

#[utoipa::path(
    delete,
    path = "/api/partners/delete-all/{player_id}",
    params(
        ("player_id" = i32, Path, description = "Player id")
    ),
    responses(
        (status = 200, description = "All of the player's registrations removed", body = DeletedResponse)
    ),
    tag = "partners"
)]
pub async fn delete_all(
    State(db): State<Database>,
    Path(player_id): Path<i32>,
) -> Result<Json<DeletedResponse>, WebError> {
    let deleted = services::delete_all(db.pool(), player_id).await?;

    Ok(Json(DeletedResponse {
        message: "All registrations deleted successfully".to_string(),
        deleted,
    }))
}
