//! Repository for the `scenari` table.

use metaclass_core::content::ScenarioInput;
use sqlx::PgPool;

use crate::models::scenario::Scenario;

/// Column list for scenari queries.
const COLUMNS: &str = "id, nome, descrizione, url_immagine, categoria_id, created_at, updated_at";

/// Provides Scenario persistence.
pub struct ScenarioRepo;

impl ScenarioRepo {
    /// Insert a new Scenario or update an existing one (when `id` is
    /// set). A dangling `categoria` reference surfaces as a database
    /// error from the foreign-key constraint. Returns `None` when an
    /// update matched no row.
    pub async fn upsert(
        pool: &PgPool,
        input: &ScenarioInput,
    ) -> Result<Option<Scenario>, sqlx::Error> {
        match input.id {
            None => {
                let query = format!(
                    "INSERT INTO scenari (nome, descrizione, url_immagine, categoria_id)
                     VALUES ($1, $2, $3, $4)
                     RETURNING {COLUMNS}"
                );
                let row = sqlx::query_as::<_, Scenario>(&query)
                    .bind(&input.nome)
                    .bind(&input.descrizione)
                    .bind(&input.url_immagine)
                    .bind(input.categoria.id)
                    .fetch_one(pool)
                    .await?;
                Ok(Some(row))
            }
            Some(id) => {
                let query = format!(
                    "UPDATE scenari
                     SET nome = $2, descrizione = $3, url_immagine = $4, categoria_id = $5,
                         updated_at = now()
                     WHERE id = $1
                     RETURNING {COLUMNS}"
                );
                sqlx::query_as::<_, Scenario>(&query)
                    .bind(id)
                    .bind(&input.nome)
                    .bind(&input.descrizione)
                    .bind(&input.url_immagine)
                    .bind(input.categoria.id)
                    .fetch_optional(pool)
                    .await
            }
        }
    }
}
