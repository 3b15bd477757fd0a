//! Repository for the `stati_partecipazione` table.
//!
//! Join and ban-reversal are read-modify-write sequences; each runs in
//! one transaction so concurrent requests for the same room serialize
//! on the stanza row instead of interleaving.

use metaclass_core::admission::{
    decide_access, decide_cancel_ban, AccessDecision, CancelBanDecision,
};
use metaclass_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::stato_partecipazione::StatoPartecipazione;

/// Column list for stati_partecipazione queries.
const COLUMNS: &str = "id, utente_id, stanza_id, in_stanza, bannato, created_at, updated_at";

/// Provides participation-state persistence and the atomic admission
/// workflows.
pub struct StatoPartecipazioneRepo;

impl StatoPartecipazioneRepo {
    /// Find the participation row for a `(utente, stanza)` pair.
    pub async fn find_by_utente_and_stanza(
        pool: &PgPool,
        utente_id: DbId,
        stanza_id: DbId,
    ) -> Result<Option<StatoPartecipazione>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM stati_partecipazione WHERE utente_id = $1 AND stanza_id = $2"
        );
        sqlx::query_as::<_, StatoPartecipazione>(&query)
            .bind(utente_id)
            .bind(stanza_id)
            .fetch_optional(pool)
            .await
    }

    /// Process a room-access request for the room with the given access
    /// code.
    ///
    /// Returns `Ok(None)` when no room has that code. Locks the stanza
    /// row so capacity checks of concurrent joins serialize, then loads
    /// the caller's participation row, asks the admission rules for a
    /// decision, and applies it. Refusals leave all state untouched.
    pub async fn request_access(
        pool: &PgPool,
        codice: &str,
        utente_id: DbId,
    ) -> Result<Option<AccessDecision>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let stanza: Option<(DbId, i32)> = sqlx::query_as(
            "SELECT id, max_posti FROM stanze WHERE codice_stanza = $1 FOR UPDATE",
        )
        .bind(codice)
        .fetch_optional(&mut *tx)
        .await?;

        let Some((stanza_id, max_posti)) = stanza else {
            return Ok(None);
        };

        let existing = Self::find_in_tx(&mut tx, utente_id, stanza_id).await?;
        let occupancy = Self::count_presenti(&mut tx, stanza_id).await?;

        let decision = decide_access(existing.as_ref().map(StatoPartecipazione::flags), occupancy, max_posti);

        match decision {
            AccessDecision::JoinNew => {
                sqlx::query(
                    "INSERT INTO stati_partecipazione (utente_id, stanza_id, in_stanza)
                     VALUES ($1, $2, TRUE)",
                )
                .bind(utente_id)
                .bind(stanza_id)
                .execute(&mut *tx)
                .await?;
            }
            AccessDecision::JoinExisting => {
                sqlx::query(
                    "UPDATE stati_partecipazione
                     SET in_stanza = TRUE, updated_at = now()
                     WHERE utente_id = $1 AND stanza_id = $2",
                )
                .bind(utente_id)
                .bind(stanza_id)
                .execute(&mut *tx)
                .await?;
            }
            AccessDecision::AlreadyPresent
            | AccessDecision::Banned
            | AccessDecision::Full => {}
        }

        tx.commit().await?;
        Ok(Some(decision))
    }

    /// Revert a ban on a `(utente, stanza)` pair.
    ///
    /// The participation row is locked for the duration of the
    /// transaction; only an actually-banned row is mutated.
    pub async fn annulla_ban(
        pool: &PgPool,
        utente_id: DbId,
        stanza_id: DbId,
    ) -> Result<CancelBanDecision, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "SELECT {COLUMNS} FROM stati_partecipazione \
             WHERE utente_id = $1 AND stanza_id = $2 FOR UPDATE"
        );
        let existing = sqlx::query_as::<_, StatoPartecipazione>(&query)
            .bind(utente_id)
            .bind(stanza_id)
            .fetch_optional(&mut *tx)
            .await?;

        let decision = decide_cancel_ban(existing.as_ref().map(StatoPartecipazione::flags));

        if decision == CancelBanDecision::Revoke {
            sqlx::query(
                "UPDATE stati_partecipazione
                 SET bannato = FALSE, updated_at = now()
                 WHERE utente_id = $1 AND stanza_id = $2",
            )
            .bind(utente_id)
            .bind(stanza_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(decision)
    }

    /// Ban a user from a room.
    ///
    /// Only mutates an existing participation row (a banned user must
    /// have requested access at some point); returns false when no row
    /// matched. The user is also removed from the room.
    pub async fn ban(
        pool: &PgPool,
        utente_id: DbId,
        stanza_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE stati_partecipazione
             SET bannato = TRUE, in_stanza = FALSE, updated_at = now()
             WHERE utente_id = $1 AND stanza_id = $2",
        )
        .bind(utente_id)
        .bind(stanza_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn find_in_tx(
        tx: &mut Transaction<'_, Postgres>,
        utente_id: DbId,
        stanza_id: DbId,
    ) -> Result<Option<StatoPartecipazione>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM stati_partecipazione WHERE utente_id = $1 AND stanza_id = $2"
        );
        sqlx::query_as::<_, StatoPartecipazione>(&query)
            .bind(utente_id)
            .bind(stanza_id)
            .fetch_optional(&mut **tx)
            .await
    }

    async fn count_presenti(
        tx: &mut Transaction<'_, Postgres>,
        stanza_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM stati_partecipazione WHERE stanza_id = $1 AND in_stanza = TRUE",
        )
        .bind(stanza_id)
        .fetch_one(&mut **tx)
        .await?;
        Ok(count)
    }
}
