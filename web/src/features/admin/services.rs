use sqlx::PgPool;
use storage::{
    dto::admin::RegistrationRecord, error::Result, models::EventStatistics,
    repository::registration::RegistrationRepository,
};

/// Every registration joined with player and partner names
pub async fn list_registrations(pool: &PgPool) -> Result<Vec<RegistrationRecord>> {
    let repo = RegistrationRepository::new(pool);
    repo.list_all().await
}

/// Per-event aggregate counts
pub async fn event_statistics(pool: &PgPool) -> Result<Vec<EventStatistics>> {
    let repo = RegistrationRepository::new(pool);
    repo.event_statistics().await
}
