//! Room model.

use metaclass_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `stanze` table.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Stanza {
    pub id: DbId,
    pub nome: String,
    pub codice_stanza: String,
    pub descrizione: String,
    pub tipo_accesso: bool,
    pub max_posti: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
