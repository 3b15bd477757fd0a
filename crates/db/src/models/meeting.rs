//! Meeting and meeting-feedback models.

use metaclass_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `meetings` table.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    pub id: DbId,
    pub nome: String,
    pub stanza_id: DbId,
    pub inizio: Timestamp,
    pub fine: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// One user's questionnaire for one meeting.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackMeeting {
    pub id: DbId,
    pub utente_id: DbId,
    pub meeting_id: DbId,
    pub valutazione: i32,
    pub commento: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
