use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Player {
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
