use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Request payload for creating a raw registration row.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateRegistrationRequest {
    #[validate(length(min = 1, max = 255, message = "Event name is required"))]
    pub event_name: String,

    #[validate(range(min = 1))]
    pub user_id: i32,

    pub partner_id: Option<i32>,
}

/// Request payload for pairing two players for an event.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateRelationshipRequest {
    #[validate(length(min = 1, max = 255, message = "Event name is required"))]
    pub event_name: String,

    #[validate(range(min = 1))]
    pub user1_id: i32,

    #[validate(range(min = 1))]
    pub user2_id: i32,
}

/// Request payload for registering a player for up to two events at once,
/// each with an optional partner.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterEventsRequest {
    #[validate(range(min = 1))]
    pub player_id: i32,

    #[validate(length(min = 1, max = 255))]
    pub event1_name: Option<String>,

    pub partner1_id: Option<i32>,

    #[validate(length(min = 1, max = 255))]
    pub event2_name: Option<String>,

    pub partner2_id: Option<i32>,
}

impl RegisterEventsRequest {
    /// The (event, partner) slots that were actually supplied.
    pub fn slots(&self) -> Vec<(&str, Option<i32>)> {
        let mut slots = Vec::new();
        if let Some(event) = self.event1_name.as_deref() {
            slots.push((event, self.partner1_id));
        }
        if let Some(event) = self.event2_name.as_deref() {
            slots.push((event, self.partner2_id));
        }
        slots
    }
}

/// Request payload for assigning a rank to a team.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateRankingRequest {
    #[validate(range(min = 1))]
    pub player_id: i32,

    #[validate(length(min = 1, max = 255, message = "Event name is required"))]
    pub event_name: String,

    #[validate(range(min = 1, max = 1000, message = "Ranking must be between 1 and 1000"))]
    pub ranking: i32,
}

/// A player another registrant could pair with.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct AvailablePartner {
    pub user_id: i32,
    pub player_name: String,
    pub has_partner: bool,
}
