use sqlx::{PgPool, Postgres, Transaction};

use crate::dto::admin::RegistrationRecord;
use crate::dto::partner::{AvailablePartner, CreateRegistrationRequest, RegisterEventsRequest};
use crate::dto::player::PlayerEventRow;
use crate::error::{Result, StorageError};
use crate::models::{EventStatistics, Registration};

const REGISTRATION_COLUMNS: &str =
    "id, event_name, player_id, partner_id, ranking, created_at";

/// Repository for registration rows: event entries, partner pairings and
/// team rankings.
pub struct RegistrationRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RegistrationRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a raw registration row.
    pub async fn create(&self, req: &CreateRegistrationRequest) -> Result<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO registrations (event_name, player_id, partner_id)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&req.event_name)
        .bind(req.user_id)
        .bind(req.partner_id)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            let err = StorageError::from(e);
            if err.is_unique_violation() {
                StorageError::ConstraintViolation(
                    "Player is already registered for this event".to_string(),
                )
            } else if err.is_foreign_key_violation() {
                StorageError::NotFound
            } else {
                err
            }
        })?;

        Ok(id)
    }

    /// Players registered for an event, excluding the requester.
    pub async fn available_partners(
        &self,
        event_name: &str,
        player_id: i32,
    ) -> Result<Vec<AvailablePartner>> {
        let partners = sqlx::query_as::<_, AvailablePartner>(
            r#"
            SELECT p.id AS user_id,
                   p.name AS player_name,
                   (r.partner_id IS NOT NULL) AS has_partner
            FROM registrations r
            JOIN players p ON p.id = r.player_id
            WHERE r.event_name = $1 AND r.player_id <> $2
            ORDER BY p.name
            "#,
        )
        .bind(event_name)
        .bind(player_id)
        .fetch_all(self.pool)
        .await?;

        Ok(partners)
    }

    /// Pair two players for an event. Both directions are written in one
    /// transaction so a lookup from either side returns the pairing.
    pub async fn set_relationship(
        &self,
        event_name: &str,
        user1_id: i32,
        user2_id: i32,
    ) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        upsert_partner(&mut tx, event_name, user1_id, Some(user2_id)).await?;
        upsert_partner(&mut tx, event_name, user2_id, Some(user1_id)).await?;

        tx.commit().await?;
        Ok(())
    }

    /// Register a player for each supplied event slot, writing the inverse
    /// row whenever a partner is named. All slots commit together.
    pub async fn register_for_events(&self, req: &RegisterEventsRequest) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        for (event_name, partner_id) in req.slots() {
            upsert_partner(&mut tx, event_name, req.player_id, partner_id).await?;
            if let Some(partner_id) = partner_id {
                upsert_partner(&mut tx, event_name, partner_id, Some(req.player_id)).await?;
            }
        }

        tx.commit().await?;
        Ok(())
    }

    /// Assign a rank to the team the player belongs to in an event.
    ///
    /// Runs in one transaction that locks the event's rows, so concurrent
    /// assignments for the same event serialize and the duplicate check is
    /// authoritative. For a doubles pairing both members' rows receive the
    /// rank.
    pub async fn assign_ranking(
        &self,
        player_id: i32,
        event_name: &str,
        ranking: i32,
    ) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("SELECT id FROM registrations WHERE event_name = $1 FOR UPDATE")
            .bind(event_name)
            .fetch_all(&mut *tx)
            .await?;

        let registration = sqlx::query_as::<_, Registration>(&format!(
            "SELECT {REGISTRATION_COLUMNS} FROM registrations \
             WHERE event_name = $1 AND player_id = $2"
        ))
        .bind(event_name)
        .bind(player_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(StorageError::NotFound)?;

        let mut team = vec![registration.player_id];
        if let Some(partner_id) = registration.partner_id {
            team.push(partner_id);
        }

        let taken = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM registrations
                WHERE event_name = $1 AND ranking = $2 AND player_id <> ALL($3)
            )
            "#,
        )
        .bind(event_name)
        .bind(ranking)
        .bind(&team)
        .fetch_one(&mut *tx)
        .await?;

        if taken {
            return Err(StorageError::ConstraintViolation(format!(
                "Ranking {ranking} is already assigned to another team in {event_name}"
            )));
        }

        sqlx::query(
            "UPDATE registrations SET ranking = $1 \
             WHERE event_name = $2 AND player_id = ANY($3)",
        )
        .bind(ranking)
        .bind(event_name)
        .bind(&team)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(())
    }

    /// Withdraw a player: delete every row they own and clear partner/rank
    /// on rows that referenced them, leaving the counterpart as a single
    /// entry. Returns the number of deleted rows.
    pub async fn delete_all_for_player(&self, player_id: i32) -> Result<u64> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "UPDATE registrations SET partner_id = NULL, ranking = NULL WHERE partner_id = $1",
        )
        .bind(player_id)
        .execute(&mut *tx)
        .await?;

        let deleted = sqlx::query("DELETE FROM registrations WHERE player_id = $1")
            .bind(player_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        tx.commit().await?;
        Ok(deleted)
    }

    /// Event rows for one player's dashboard, ordered by event name.
    pub async fn events_for_player(&self, player_id: i32) -> Result<Vec<PlayerEventRow>> {
        let events = sqlx::query_as::<_, PlayerEventRow>(
            r#"
            SELECT r.event_name,
                   r.partner_id,
                   COALESCE(p.name, 'No partner assigned') AS partner_name,
                   r.ranking
            FROM registrations r
            LEFT JOIN players p ON p.id = r.partner_id
            WHERE r.player_id = $1
            ORDER BY r.event_name
            "#,
        )
        .bind(player_id)
        .fetch_all(self.pool)
        .await?;

        Ok(events)
    }

    /// Every registration joined with player and partner names, for the
    /// admin dashboard.
    pub async fn list_all(&self) -> Result<Vec<RegistrationRecord>> {
        let records = sqlx::query_as::<_, RegistrationRecord>(
            r#"
            SELECT p.id AS player_id,
                   p.name AS player_name,
                   p.whatsapp_number,
                   p.email,
                   p.city,
                   r.event_name,
                   r.partner_id,
                   partner.name AS partner_name,
                   r.ranking
            FROM players p
            INNER JOIN registrations r ON p.id = r.player_id
            LEFT JOIN players partner ON r.partner_id = partner.id
            ORDER BY p.name, r.event_name
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(records)
    }

    /// Per-event aggregate counts.
    pub async fn event_statistics(&self) -> Result<Vec<EventStatistics>> {
        let statistics = sqlx::query_as::<_, EventStatistics>(
            "SELECT event_name, total_registrations, paired_registrations, ranked_registrations \
             FROM event_statistics ORDER BY event_name",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(statistics)
    }
}

/// Insert or update one side of a pairing within an open transaction.
async fn upsert_partner(
    tx: &mut Transaction<'_, Postgres>,
    event_name: &str,
    player_id: i32,
    partner_id: Option<i32>,
) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO registrations (event_name, player_id, partner_id)
        VALUES ($1, $2, $3)
        ON CONFLICT (event_name, player_id)
        DO UPDATE SET partner_id = EXCLUDED.partner_id
        "#,
    )
    .bind(event_name)
    .bind(player_id)
    .bind(partner_id)
    .execute(&mut **tx)
    .await
    .map_err(|e| {
        let err = StorageError::from(e);
        if err.is_foreign_key_violation() {
            StorageError::NotFound
        } else {
            err
        }
    })?;

    Ok(())
}
