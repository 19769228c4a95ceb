use chrono::NaiveDate;
use sqlx::PgPool;

use crate::dto::player::{CreatePlayerRequest, UpdatePlayerRequest};
use crate::error::{Result, StorageError};
use crate::models::Player;

const PLAYER_COLUMNS: &str = "id, name, whatsapp_number, date_of_birth, email, city, \
     shirt_size, short_size, food_pref, stay_y_or_n, fee_paid, created_at";

pub struct PlayerRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PlayerRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new player. The whatsapp number must already be normalized.
    pub async fn create(&self, req: &CreatePlayerRequest) -> Result<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO players (name, whatsapp_number, date_of_birth, email, city,
                                 shirt_size, short_size, food_pref, stay_y_or_n, fee_paid)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id
            "#,
        )
        .bind(&req.name)
        .bind(&req.whatsapp_number)
        .bind(req.date_of_birth)
        .bind(&req.email)
        .bind(&req.city)
        .bind(&req.shirt_size)
        .bind(&req.short_size)
        .bind(&req.food_pref)
        .bind(req.stay_y_or_n)
        .bind(req.fee_paid)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            let err = StorageError::from(e);
            if err.is_unique_violation() {
                StorageError::ConstraintViolation(
                    "WhatsApp number is already registered".to_string(),
                )
            } else {
                err
            }
        })?;

        Ok(id)
    }

    /// List all players, newest first
    pub async fn list(&self) -> Result<Vec<Player>> {
        let players = sqlx::query_as::<_, Player>(&format!(
            "SELECT {PLAYER_COLUMNS} FROM players ORDER BY created_at DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(players)
    }

    /// Find a player by id
    pub async fn find_by_id(&self, id: i32) -> Result<Player> {
        let player = sqlx::query_as::<_, Player>(&format!(
            "SELECT {PLAYER_COLUMNS} FROM players WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(player)
    }

    /// Full-record update. Rejects a whatsapp number already owned by a
    /// different player before touching the row.
    pub async fn update(&self, id: i32, req: &UpdatePlayerRequest) -> Result<Player> {
        let taken = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM players WHERE whatsapp_number = $1 AND id <> $2)",
        )
        .bind(&req.whatsapp_number)
        .bind(id)
        .fetch_one(self.pool)
        .await?;

        if taken {
            return Err(StorageError::ConstraintViolation(
                "WhatsApp number is already registered to another player".to_string(),
            ));
        }

        let player = sqlx::query_as::<_, Player>(&format!(
            r#"
            UPDATE players
            SET name = $2,
                whatsapp_number = $3,
                date_of_birth = $4,
                email = $5,
                city = $6,
                shirt_size = $7,
                short_size = $8,
                food_pref = $9,
                stay_y_or_n = $10,
                fee_paid = $11
            WHERE id = $1
            RETURNING {PLAYER_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&req.name)
        .bind(&req.whatsapp_number)
        .bind(req.date_of_birth)
        .bind(&req.email)
        .bind(&req.city)
        .bind(&req.shirt_size)
        .bind(&req.short_size)
        .bind(&req.food_pref)
        .bind(req.stay_y_or_n)
        .bind(req.fee_paid)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(player)
    }

    /// Look up a player by normalized whatsapp number and date of birth.
    /// Used by the player self-login; a miss is not an error here.
    pub async fn find_by_login(
        &self,
        whatsapp_number: &str,
        date_of_birth: NaiveDate,
    ) -> Result<Option<Player>> {
        let player = sqlx::query_as::<_, Player>(&format!(
            "SELECT {PLAYER_COLUMNS} FROM players \
             WHERE whatsapp_number = $1 AND date_of_birth = $2"
        ))
        .bind(whatsapp_number)
        .bind(date_of_birth)
        .fetch_optional(self.pool)
        .await?;

        Ok(player)
    }
}
