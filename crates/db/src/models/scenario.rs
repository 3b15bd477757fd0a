//! Scenario model. Each Scenario belongs to exactly one Categoria.

use metaclass_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `scenari` table.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub id: DbId,
    pub nome: String,
    pub descrizione: String,
    pub url_immagine: String,
    pub categoria_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
