use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// One player's entry for one event. Doubles pairings are stored as two rows,
/// each side naming the other through `partner_id`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Registration {
    pub id: i32,
    pub event_name: String,
    pub player_id: i32,
    pub partner_id: Option<i32>,
    pub ranking: Option<i32>,
    pub created_at: chrono::NaiveDateTime,
}
