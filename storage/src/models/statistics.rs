use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Row of the `event_statistics` view.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct EventStatistics {
    pub event_name: String,
    pub total_registrations: i64,
    pub paired_registrations: i64,
    pub ranked_registrations: i64,
}
