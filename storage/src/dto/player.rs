use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::services::phone::validate_whatsapp;

/// Request payload for registering a new player
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreatePlayerRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[validate(custom(function = "validate_whatsapp"))]
    pub whatsapp_number: String,

    pub date_of_birth: NaiveDate,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(max = 255))]
    pub city: Option<String>,

    #[validate(length(max = 10))]
    pub shirt_size: Option<String>,

    #[validate(length(max = 10))]
    pub short_size: Option<String>,

    #[validate(length(max = 50))]
    pub food_pref: Option<String>,

    #[serde(default)]
    pub stay_y_or_n: bool,

    #[serde(default)]
    pub fee_paid: bool,
}

/// Request payload for editing an existing player. The original form always
/// submits the full record, so every field is required except the optional
/// contact/kit details.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdatePlayerRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[validate(custom(function = "validate_whatsapp"))]
    pub whatsapp_number: String,

    pub date_of_birth: NaiveDate,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(max = 255))]
    pub city: Option<String>,

    #[validate(length(max = 10))]
    pub shirt_size: Option<String>,

    #[validate(length(max = 10))]
    pub short_size: Option<String>,

    #[validate(length(max = 50))]
    pub food_pref: Option<String>,

    #[serde(default)]
    pub stay_y_or_n: bool,

    #[serde(default)]
    pub fee_paid: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PlayerResponse {
    pub id: i32,
    pub name: String,
    pub whatsapp_number: String,
    pub date_of_birth: NaiveDate,
    pub email: Option<String>,
    pub city: Option<String>,
    pub shirt_size: Option<String>,
    pub short_size: Option<String>,
    pub food_pref: Option<String>,
    pub stay_y_or_n: bool,
    pub fee_paid: bool,
    pub created_at: chrono::NaiveDateTime,
}

impl From<crate::models::Player> for PlayerResponse {
    fn from(player: crate::models::Player) -> Self {
        Self {
            id: player.id,
            name: player.name,
            whatsapp_number: player.whatsapp_number,
            date_of_birth: player.date_of_birth,
            email: player.email,
            city: player.city,
            shirt_size: player.shirt_size,
            short_size: player.short_size,
            food_pref: player.food_pref,
            stay_y_or_n: player.stay_y_or_n,
            fee_paid: player.fee_paid,
            created_at: player.created_at,
        }
    }
}

/// One event line on a player's dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct PlayerEventRow {
    pub event_name: String,
    pub partner_id: Option<i32>,
    pub partner_name: String,
    pub ranking: Option<i32>,
}

/// Player record plus their event registrations.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DashboardResponse {
    pub player: PlayerResponse,
    pub events: Vec<PlayerEventRow>,
}
