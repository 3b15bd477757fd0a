//! Repository for the `categorie` table.

use metaclass_core::content::CategoriaInput;
use sqlx::PgPool;

use crate::models::categoria::Categoria;

/// Column list for categorie queries.
const COLUMNS: &str = "id, nome, created_at, updated_at";

/// Provides Categoria persistence.
pub struct CategoriaRepo;

impl CategoriaRepo {
    /// Insert a new Categoria or update an existing one (when `id` is
    /// set). Returns `None` when an update matched no row.
    pub async fn upsert(
        pool: &PgPool,
        input: &CategoriaInput,
    ) -> Result<Option<Categoria>, sqlx::Error> {
        match input.id {
            None => {
                let query =
                    format!("INSERT INTO categorie (nome) VALUES ($1) RETURNING {COLUMNS}");
                let row = sqlx::query_as::<_, Categoria>(&query)
                    .bind(&input.nome)
                    .fetch_one(pool)
                    .await?;
                Ok(Some(row))
            }
            Some(id) => {
                let query = format!(
                    "UPDATE categorie SET nome = $2, updated_at = now()
                     WHERE id = $1
                     RETURNING {COLUMNS}"
                );
                sqlx::query_as::<_, Categoria>(&query)
                    .bind(id)
                    .bind(&input.nome)
                    .fetch_optional(pool)
                    .await
            }
        }
    }
}
