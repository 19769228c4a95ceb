use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// One registration joined with player and partner details, as shown on the
/// admin dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct RegistrationRecord {
    pub player_id: i32,
    pub player_name: String,
    pub whatsapp_number: String,
    pub email: Option<String>,
    pub city: Option<String>,
    pub event_name: String,
    pub partner_id: Option<i32>,
    pub partner_name: Option<String>,
    pub ranking: Option<i32>,
}
