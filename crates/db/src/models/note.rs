//! Row model for the `notes` table.

use minutes_core::notes::Note;
use minutes_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A live row from the `notes` table.
///
/// The tombstone columns are never selected: every query filters on
/// `is_deleted = FALSE`, so they would always read the same.
#[derive(Debug, Clone, FromRow)]
pub struct NoteRow {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub category: Option<String>,
    pub meeting_date: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<NoteRow> for Note {
    fn from(row: NoteRow) -> Self {
        Note {
            id: row.id,
            title: row.title,
            content: row.content,
            category: row.category,
            meeting_date: row.meeting_date,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
