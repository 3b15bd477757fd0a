//! Repository for the `stanze` table.

use metaclass_core::stanza::NuovaStanza;
use metaclass_core::types::DbId;
use sqlx::PgPool;

use crate::models::stanza::Stanza;

/// Column list for stanze queries.
const COLUMNS: &str =
    "id, nome, codice_stanza, descrizione, tipo_accesso, max_posti, created_at, updated_at";

/// Provides room persistence.
pub struct StanzaRepo;

impl StanzaRepo {
    /// Insert a new room from validated fields, returning the created row.
    pub async fn create(pool: &PgPool, input: &NuovaStanza) -> Result<Stanza, sqlx::Error> {
        let query = format!(
            "INSERT INTO stanze (nome, codice_stanza, descrizione, tipo_accesso, max_posti)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Stanza>(&query)
            .bind(&input.nome)
            .bind(&input.codice_stanza)
            .bind(&input.descrizione)
            .bind(input.tipo_accesso)
            .bind(input.max_posti)
            .fetch_one(pool)
            .await
    }

    /// Find a room by internal id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Stanza>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM stanze WHERE id = $1");
        sqlx::query_as::<_, Stanza>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a room by its six-digit access code.
    pub async fn find_by_codice(
        pool: &PgPool,
        codice: &str,
    ) -> Result<Option<Stanza>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM stanze WHERE codice_stanza = $1");
        sqlx::query_as::<_, Stanza>(&query)
            .bind(codice)
            .fetch_optional(pool)
            .await
    }

    /// List every room, oldest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Stanza>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM stanze ORDER BY id");
        sqlx::query_as::<_, Stanza>(&query).fetch_all(pool).await
    }

    /// List the rooms a user participates in, oldest first.
    pub async fn list_by_utente(
        pool: &PgPool,
        utente_id: DbId,
    ) -> Result<Vec<Stanza>, sqlx::Error> {
        let query = "SELECT s.id, s.nome, s.codice_stanza, s.descrizione, s.tipo_accesso, \
                    s.max_posti, s.created_at, s.updated_at
             FROM stanze s
             JOIN stati_partecipazione sp ON sp.stanza_id = s.id
             WHERE sp.utente_id = $1
             ORDER BY s.id";
        sqlx::query_as::<_, Stanza>(query)
            .bind(utente_id)
            .fetch_all(pool)
            .await
    }
}
