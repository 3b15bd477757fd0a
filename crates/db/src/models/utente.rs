//! User model.

use metaclass_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `utenti` table.
///
/// `token_auth` never leaves the server; it is skipped on
/// serialization.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Utente {
    pub id: DbId,
    pub meta_id: String,
    pub nome: String,
    pub cognome: String,
    pub email: String,
    pub eta: Option<i32>,
    pub sesso: Option<String>,
    #[serde(skip_serializing)]
    pub token_auth: String,
    pub is_admin: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Utente {
    /// Sentinel stored in `token_auth` after logout.
    pub const DEFAULT_TOKEN: &'static str = "revoked";
}

/// DTO for the login upsert.
#[derive(Debug, Clone)]
pub struct UpsertUtente {
    pub meta_id: String,
    pub nome: String,
    pub cognome: String,
    pub email: String,
    pub eta: Option<i32>,
    pub sesso: Option<String>,
    pub token_auth: String,
    pub is_admin: bool,
}

/// DTO for profile edits; `None` leaves the column unchanged.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUtente {
    pub nome: Option<String>,
    pub cognome: Option<String>,
    pub email: Option<String>,
    pub eta: Option<i32>,
    pub sesso: Option<String>,
}
