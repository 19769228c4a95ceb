use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request payload for creating an event
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateEventRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Event name must be between 1 and 255 characters"
    ))]
    pub event_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventResponse {
    pub id: i32,
    pub event_name: String,
}

impl From<crate::models::Event> for EventResponse {
    fn from(event: crate::models::Event) -> Self {
        Self {
            id: event.id,
            event_name: event.event_name,
        }
    }
}
