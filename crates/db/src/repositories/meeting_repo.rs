//! Repository for the `meetings` table.
//!
//! Meeting scheduling is out of scope; meetings are reference data for
//! feedback submission, so this repository only reads.

use metaclass_core::types::DbId;
use sqlx::PgPool;

use crate::models::meeting::Meeting;

/// Column list for meetings queries.
const COLUMNS: &str = "id, nome, stanza_id, inizio, fine, created_at, updated_at";

/// Provides Meeting lookups.
pub struct MeetingRepo;

impl MeetingRepo {
    /// Find a meeting by internal id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Meeting>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM meetings WHERE id = $1");
        sqlx::query_as::<_, Meeting>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
