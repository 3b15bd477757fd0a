//! Repository for the `utenti` table.

use sqlx::PgPool;

use crate::models::utente::{UpdateUtente, UpsertUtente, Utente};

/// Column list for utenti queries.
const COLUMNS: &str = "id, meta_id, nome, cognome, email, eta, sesso, token_auth, \
    is_admin, created_at, updated_at";

/// Provides user persistence keyed by the external meta-id.
pub struct UtenteRepo;

impl UtenteRepo {
    /// Login upsert: insert the user, or refresh the stored auth token
    /// and admin flag of the existing row with the same meta-id.
    pub async fn upsert_login(pool: &PgPool, input: &UpsertUtente) -> Result<Utente, sqlx::Error> {
        let query = format!(
            "INSERT INTO utenti (meta_id, nome, cognome, email, eta, sesso, token_auth, is_admin)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             ON CONFLICT (meta_id) DO UPDATE
                SET token_auth = EXCLUDED.token_auth,
                    is_admin = EXCLUDED.is_admin,
                    updated_at = now()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Utente>(&query)
            .bind(&input.meta_id)
            .bind(&input.nome)
            .bind(&input.cognome)
            .bind(&input.email)
            .bind(input.eta)
            .bind(&input.sesso)
            .bind(&input.token_auth)
            .bind(input.is_admin)
            .fetch_one(pool)
            .await
    }

    /// Find a user by meta-id.
    pub async fn find_by_meta_id(
        pool: &PgPool,
        meta_id: &str,
    ) -> Result<Option<Utente>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM utenti WHERE meta_id = $1");
        sqlx::query_as::<_, Utente>(&query)
            .bind(meta_id)
            .fetch_optional(pool)
            .await
    }

    /// Update profile fields of an existing user, returning the updated
    /// row. `None` fields are left unchanged.
    pub async fn update_profile(
        pool: &PgPool,
        meta_id: &str,
        input: &UpdateUtente,
    ) -> Result<Option<Utente>, sqlx::Error> {
        let query = format!(
            "UPDATE utenti
             SET nome = COALESCE($2, nome),
                 cognome = COALESCE($3, cognome),
                 email = COALESCE($4, email),
                 eta = COALESCE($5, eta),
                 sesso = COALESCE($6, sesso),
                 updated_at = now()
             WHERE meta_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Utente>(&query)
            .bind(meta_id)
            .bind(&input.nome)
            .bind(&input.cognome)
            .bind(&input.email)
            .bind(input.eta)
            .bind(&input.sesso)
            .fetch_optional(pool)
            .await
    }

    /// Replace the stored auth token; returns false when no row matched.
    pub async fn set_token(pool: &PgPool, meta_id: &str, token: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE utenti SET token_auth = $2, updated_at = now() WHERE meta_id = $1",
        )
        .bind(meta_id)
        .bind(token)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
