use sqlx::PgPool;
use storage::{
    dto::partner::{
        AvailablePartner, CreateRegistrationRequest, RegisterEventsRequest,
        UpdateRankingRequest, UpdateRelationshipRequest,
    },
    error::Result,
    repository::registration::RegistrationRepository,
};

/// Insert a raw registration row
pub async fn create_registration(
    pool: &PgPool,
    request: &CreateRegistrationRequest,
) -> Result<i32> {
    let repo = RegistrationRepository::new(pool);
    repo.create(request).await
}

/// Players available as partners for an event
pub async fn available_partners(
    pool: &PgPool,
    event_name: &str,
    player_id: i32,
) -> Result<Vec<AvailablePartner>> {
    let repo = RegistrationRepository::new(pool);
    repo.available_partners(event_name, player_id).await
}

/// Pair two players for an event, both directions at once
pub async fn update_relationship(
    pool: &PgPool,
    request: &UpdateRelationshipRequest,
) -> Result<()> {
    let repo = RegistrationRepository::new(pool);
    repo.set_relationship(&request.event_name, request.user1_id, request.user2_id)
        .await
}

/// Register a player for up to two events in one shot
pub async fn register_events(pool: &PgPool, request: &RegisterEventsRequest) -> Result<()> {
    let repo = RegistrationRepository::new(pool);
    repo.register_for_events(request).await
}

/// Assign a rank to the player's team for an event
pub async fn update_ranking(pool: &PgPool, request: &UpdateRankingRequest) -> Result<()> {
    let repo = RegistrationRepository::new(pool);
    repo.assign_ranking(request.player_id, &request.event_name, request.ranking)
        .await
}

/// Withdraw a player from everything
pub async fn delete_all(pool: &PgPool, player_id: i32) -> Result<u64> {
    let repo = RegistrationRepository::new(pool);
    repo.delete_all_for_player(player_id).await
}
