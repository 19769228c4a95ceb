use sqlx::PgPool;
use storage::{
    dto::player::{
        CreatePlayerRequest, DashboardResponse, PlayerResponse, UpdatePlayerRequest,
    },
    error::Result,
    models::Player,
    repository::{player::PlayerRepository, registration::RegistrationRepository},
};

/// Register a new player
pub async fn create_player(pool: &PgPool, request: &CreatePlayerRequest) -> Result<i32> {
    let repo = PlayerRepository::new(pool);
    repo.create(request).await
}

/// List all players
pub async fn list_players(pool: &PgPool) -> Result<Vec<Player>> {
    let repo = PlayerRepository::new(pool);
    repo.list().await
}

/// Update a player's record
pub async fn update_player(pool: &PgPool, id: i32, request: &UpdatePlayerRequest) -> Result<Player> {
    let repo = PlayerRepository::new(pool);
    repo.update(id, request).await
}

/// Player record plus their event registrations
pub async fn player_dashboard(pool: &PgPool, id: i32) -> Result<DashboardResponse> {
    let player = PlayerRepository::new(pool).find_by_id(id).await?;
    let events = RegistrationRepository::new(pool)
        .events_for_player(player.id)
        .await?;

    Ok(DashboardResponse {
        player: PlayerResponse::from(player),
        events,
    })
}
