//! Participation-state model: the join/ban relationship between one
//! user and one room. One row per `(utente, stanza)` pair, enforced by
//! a unique constraint.

use metaclass_core::admission::PartecipazioneFlags;
use metaclass_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `stati_partecipazione` table.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct StatoPartecipazione {
    pub id: DbId,
    pub utente_id: DbId,
    pub stanza_id: DbId,
    pub in_stanza: bool,
    pub bannato: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl StatoPartecipazione {
    /// The flags the admission rules decide over.
    pub fn flags(&self) -> PartecipazioneFlags {
        PartecipazioneFlags {
            in_stanza: self.in_stanza,
            bannato: self.bannato,
        }
    }
}
