use sqlx::PgPool;
use storage::{
    dto::event::CreateEventRequest, error::Result, models::Event,
    repository::event::EventRepository,
};

/// List all events
pub async fn list_events(pool: &PgPool) -> Result<Vec<Event>> {
    let repo = EventRepository::new(pool);
    repo.list().await
}

/// Create a new event
pub async fn create_event(pool: &PgPool, request: &CreateEventRequest) -> Result<Event> {
    let repo = EventRepository::new(pool);
    repo.create(request).await
}
