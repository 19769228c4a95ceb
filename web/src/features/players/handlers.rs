use axum::{
    Json,
    extract::{Path, State},
};
use storage::{
    Database,
    dto::common::{CreatedResponse, MessageResponse},
    dto::player::{
        CreatePlayerRequest, DashboardResponse, PlayerResponse, UpdatePlayerRequest,
    },
    services::phone::normalize_whatsapp,
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/api/players",
    request_body = CreatePlayerRequest,
    responses(
        (status = 200, description = "Player created", body = CreatedResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "WhatsApp number already registered")
    ),
    tag = "players"
)]
pub async fn create_player(
    State(db): State<Database>,
    Json(mut req): Json<CreatePlayerRequest>,
) -> Result<Json<CreatedResponse>, WebError> {
    req.validate()?;
    req.whatsapp_number = normalize_whatsapp(&req.whatsapp_number)
        .ok_or_else(|| WebError::BadRequest("Invalid WhatsApp number".to_string()))?;

    let id = services::create_player(db.pool(), &req).await?;

    Ok(Json(CreatedResponse::new("Player created successfully", id)))
}

#[utoipa::path(
    get,
    path = "/api/players",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "All players, newest first", body = Vec<PlayerResponse>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "players"
)]
pub async fn list_players(
    State(db): State<Database>,
) -> Result<Json<Vec<PlayerResponse>>, WebError> {
    let players = services::list_players(db.pool()).await?;

    let response: Vec<PlayerResponse> = players.into_iter().map(PlayerResponse::from).collect();

    Ok(Json(response))
}

#[utoipa::path(
    put,
    path = "/api/players/{id}",
    params(
        ("id" = i32, Path, description = "Player id")
    ),
    request_body = UpdatePlayerRequest,
    responses(
        (status = 200, description = "Player updated", body = MessageResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Player not found"),
        (status = 409, description = "WhatsApp number already registered to another player")
    ),
    tag = "players"
)]
pub async fn update_player(
    State(db): State<Database>,
    Path(id): Path<i32>,
    Json(mut req): Json<UpdatePlayerRequest>,
) -> Result<Json<MessageResponse>, WebError> {
    req.validate()?;
    req.whatsapp_number = normalize_whatsapp(&req.whatsapp_number)
        .ok_or_else(|| WebError::BadRequest("Invalid WhatsApp number".to_string()))?;

    services::update_player(db.pool(), id, &req).await?;

    Ok(Json(MessageResponse::new("Player updated successfully")))
}

#[utoipa::path(
    get,
    path = "/api/players/dashboard/{id}",
    params(
        ("id" = i32, Path, description = "Player id")
    ),
    responses(
        (status = 200, description = "Player record with their event registrations", body = DashboardResponse),
        (status = 404, description = "Player not found")
    ),
    tag = "players"
)]
pub async fn player_dashboard(
    State(db): State<Database>,
    Path(id): Path<i32>,
) -> Result<Json<DashboardResponse>, WebError> {
    let dashboard = services::player_dashboard(db.pool(), id).await?;

    Ok(Json(dashboard))
}
