use chrono::NaiveDate;
use sqlx::PgPool;
use storage::{
    dto::player::{DashboardResponse, PlayerResponse},
    error::Result,
    repository::{player::PlayerRepository, registration::RegistrationRepository},
    services::phone::normalize_whatsapp,
};

/// Look up a player by whatsapp number and date of birth; a hit returns the
/// same payload as their dashboard.
pub async fn user_login(
    pool: &PgPool,
    whatsapp: &str,
    date_of_birth: NaiveDate,
) -> Result<Option<DashboardResponse>> {
    let Some(whatsapp) = normalize_whatsapp(whatsapp) else {
        return Ok(None);
    };

    let repo = PlayerRepository::new(pool);
    let Some(player) = repo.find_by_login(&whatsapp, date_of_birth).await? else {
        return Ok(None);
    };

    let events = RegistrationRepository::new(pool)
        .events_for_player(player.id)
        .await?;

    Ok(Some(DashboardResponse {
        player: PlayerResponse::from(player),
        events,
    }))
}
