//! Repository for the `feedback_meeting` table.

use metaclass_core::types::DbId;
use sqlx::PgPool;

use crate::models::meeting::FeedbackMeeting;

/// Column list for feedback_meeting queries.
const COLUMNS: &str =
    "id, utente_id, meeting_id, valutazione, commento, created_at, updated_at";

/// Provides meeting-feedback persistence.
pub struct FeedbackMeetingRepo;

impl FeedbackMeetingRepo {
    /// Find the questionnaire one user submitted for one meeting.
    pub async fn find_by_utente_and_meeting(
        pool: &PgPool,
        utente_id: DbId,
        meeting_id: DbId,
    ) -> Result<Option<FeedbackMeeting>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM feedback_meeting WHERE utente_id = $1 AND meeting_id = $2"
        );
        sqlx::query_as::<_, FeedbackMeeting>(&query)
            .bind(utente_id)
            .bind(meeting_id)
            .fetch_optional(pool)
            .await
    }

    /// Record a questionnaire, returning the created row.
    pub async fn create(
        pool: &PgPool,
        utente_id: DbId,
        meeting_id: DbId,
        valutazione: i32,
        commento: Option<&str>,
    ) -> Result<FeedbackMeeting, sqlx::Error> {
        let query = format!(
            "INSERT INTO feedback_meeting (utente_id, meeting_id, valutazione, commento)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FeedbackMeeting>(&query)
            .bind(utente_id)
            .bind(meeting_id)
            .bind(valutazione)
            .bind(commento)
            .fetch_one(pool)
            .await
    }
}
