use sqlx::PgPool;

use crate::dto::event::CreateEventRequest;
use crate::error::{Result, StorageError};
use crate::models::Event;

pub struct EventRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> EventRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all events ordered by name
    pub async fn list(&self) -> Result<Vec<Event>> {
        let events =
            sqlx::query_as::<_, Event>("SELECT id, event_name FROM events ORDER BY event_name")
                .fetch_all(self.pool)
                .await?;

        Ok(events)
    }

    /// Create a new event
    pub async fn create(&self, req: &CreateEventRequest) -> Result<Event> {
        let event = sqlx::query_as::<_, Event>(
            "INSERT INTO events (event_name) VALUES ($1) RETURNING id, event_name",
        )
        .bind(&req.event_name)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            let err = StorageError::from(e);
            if err.is_unique_violation() {
                StorageError::ConstraintViolation("Event already exists".to_string())
            } else {
                err
            }
        })?;

        Ok(event)
    }
}
