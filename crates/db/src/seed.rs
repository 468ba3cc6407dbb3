//! Demo data for local development.

use chrono::{TimeZone, Utc};
use minutes_core::notes::CreateNote;
use minutes_core::repository::NoteRepository;
use minutes_core::types::Timestamp;

use crate::repositories::NoteRepo;

fn meeting_at(year: i32, month: u32, day: u32, hour: u32, min: u32) -> Timestamp {
    Utc.with_ymd_and_hms(year, month, day, hour, min, 0)
        .single()
        .expect("valid seed date")
}

/// The notes inserted by [`seed_notes`].
pub fn demo_notes() -> Vec<CreateNote> {
    vec![
        CreateNote {
            title: "Performance Review".to_string(),
            content: "Went over my performance over the year with my boss".to_string(),
            category: Some("1:1".to_string()),
            meeting_date: meeting_at(2025, 4, 1, 13, 30),
        },
        CreateNote {
            title: "Team Standup".to_string(),
            content: "Went over items in the current sprint".to_string(),
            category: Some("Standup".to_string()),
            meeting_date: meeting_at(2025, 5, 10, 14, 30),
        },
        CreateNote {
            title: "All-Hands Meeting".to_string(),
            content: "Quarterly meeting covering recent company news or updates".to_string(),
            category: Some("Company-wide".to_string()),
            meeting_date: meeting_at(2025, 6, 15, 10, 30),
        },
    ]
}

/// Insert [`demo_notes`] unless the table already holds live notes.
///
/// Returns the number of notes inserted.
pub async fn seed_notes(repo: &NoteRepo) -> Result<usize, sqlx::Error> {
    let existing = repo.count().await?;
    if existing > 0 {
        tracing::info!(existing, "Notes table not empty, skipping seed");
        return Ok(0);
    }

    let notes = demo_notes();
    for note in &notes {
        if let Err(e) = repo.create(note).await {
            tracing::error!(error = %e, title = %note.title, "Failed to seed note");
            return Err(e);
        }
    }

    tracing::info!(count = notes.len(), "Seeded demo notes");
    Ok(notes.len())
}
