//! Meeting note types, validation and ordering rules.
//!
//! Everything here is pure: the repository port and the service build on
//! these functions, and the HTTP layer reuses the DTOs directly.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::NoteError;
use crate::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A live (not soft-deleted) meeting note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub category: Option<String>,
    pub meeting_date: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new note.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNote {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub category: Option<String>,
    pub meeting_date: Timestamp,
}

/// DTO for replacing the mutable fields of an existing note.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNote {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub category: Option<String>,
    pub meeting_date: Timestamp,
}

/// Conjunctive query descriptor. Every `None` field imposes no constraint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoteFilter {
    /// Case-insensitive substring matched against title or content.
    pub keyword: Option<String>,
    /// Exact category match.
    pub category: Option<String>,
    /// Inclusive lower bound on the meeting date.
    pub from_date: Option<Timestamp>,
    /// Inclusive upper bound on the meeting date.
    pub to_date: Option<Timestamp>,
}

impl NoteFilter {
    /// Trim the text fields, dropping any that end up empty.
    pub fn normalized(self) -> Self {
        Self {
            keyword: trim_to_option(self.keyword),
            category: trim_to_option(self.category),
            from_date: self.from_date,
            to_date: self.to_date,
        }
    }
}

fn trim_to_option(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Title and content must be non-empty strings. Whitespace is NOT trimmed:
/// a title of `" "` is accepted.
pub fn validate_note_fields(title: &str, content: &str) -> Result<(), NoteError> {
    if title.is_empty() {
        return Err(NoteError::EmptyTitle);
    }
    if content.is_empty() {
        return Err(NoteError::EmptyContent);
    }
    Ok(())
}

/// Trim a search keyword, rejecting it if nothing is left.
pub fn normalize_keyword(keyword: &str) -> Result<&str, NoteError> {
    let trimmed = keyword.trim();
    if trimmed.is_empty() {
        Err(NoteError::EmptyKeyword)
    } else {
        Ok(trimmed)
    }
}

/// Reject a range whose lower bound is strictly after its upper bound.
///
/// Equal bounds are a valid single-instant range.
pub fn validate_date_range(
    from_date: Option<Timestamp>,
    to_date: Option<Timestamp>,
) -> Result<(), NoteError> {
    match (from_date, to_date) {
        (Some(from), Some(to)) if from > to => Err(NoteError::InvalidDateRange),
        _ => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------------

/// Most recent meeting first; identical meeting dates fall back to the
/// higher id first.
pub fn meeting_date_desc(a: &Note, b: &Note) -> Ordering {
    b.meeting_date
        .cmp(&a.meeting_date)
        .then_with(|| b.id.cmp(&a.id))
}

/// Sort notes in place by [`meeting_date_desc`].
pub fn sort_by_meeting_date_desc(notes: &mut [Note]) {
    notes.sort_by(meeting_date_desc);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::{TimeZone, Utc};

    use super::*;

    fn ts(y: i32, m: u32, d: u32, h: u32) -> Timestamp {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    fn note(id: DbId, meeting_date: Timestamp) -> Note {
        Note {
            id,
            title: format!("Note {id}"),
            content: "content".to_string(),
            category: None,
            meeting_date,
            created_at: ts(2025, 1, 1, 0),
            updated_at: ts(2025, 1, 1, 0),
        }
    }

    // -- validate_note_fields ------------------------------------------------

    #[test]
    fn empty_title_is_rejected_before_content() {
        assert_matches!(validate_note_fields("", ""), Err(NoteError::EmptyTitle));
    }

    #[test]
    fn empty_content_is_rejected() {
        assert_matches!(
            validate_note_fields("Standup", ""),
            Err(NoteError::EmptyContent)
        );
    }

    #[test]
    fn whitespace_title_is_not_trimmed() {
        assert!(validate_note_fields(" ", "sync").is_ok());
    }

    // -- normalize_keyword ---------------------------------------------------

    #[test]
    fn keyword_is_trimmed() {
        assert_eq!(normalize_keyword("  sprint ").unwrap(), "sprint");
    }

    #[test]
    fn blank_keyword_is_rejected() {
        assert_matches!(normalize_keyword(""), Err(NoteError::EmptyKeyword));
        assert_matches!(normalize_keyword(" \t\n"), Err(NoteError::EmptyKeyword));
    }

    // -- validate_date_range -------------------------------------------------

    #[test]
    fn from_after_to_is_invalid() {
        assert_matches!(
            validate_date_range(Some(ts(2025, 6, 1, 0)), Some(ts(2025, 5, 1, 0))),
            Err(NoteError::InvalidDateRange)
        );
    }

    #[test]
    fn equal_bounds_are_valid() {
        let t = ts(2025, 6, 1, 0);
        assert!(validate_date_range(Some(t), Some(t)).is_ok());
    }

    #[test]
    fn open_ranges_are_valid() {
        assert!(validate_date_range(Some(ts(2025, 6, 1, 0)), None).is_ok());
        assert!(validate_date_range(None, Some(ts(2025, 6, 1, 0))).is_ok());
        assert!(validate_date_range(None, None).is_ok());
    }

    // -- NoteFilter::normalized ----------------------------------------------

    #[test]
    fn normalized_trims_and_drops_blank_fields() {
        let filter = NoteFilter {
            keyword: Some("  team ".to_string()),
            category: Some("   ".to_string()),
            from_date: None,
            to_date: None,
        }
        .normalized();

        assert_eq!(filter.keyword.as_deref(), Some("team"));
        assert_eq!(filter.category, None);
    }

    // -- sort_by_meeting_date_desc -------------------------------------------

    #[test]
    fn sorts_most_recent_meeting_first() {
        let mut notes = vec![
            note(1, ts(2025, 4, 1, 13)),
            note(2, ts(2025, 6, 15, 10)),
            note(3, ts(2025, 5, 10, 14)),
        ];
        sort_by_meeting_date_desc(&mut notes);
        let ids: Vec<DbId> = notes.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn ties_break_by_id_descending() {
        let same = ts(2025, 5, 10, 14);
        let mut notes = vec![note(4, same), note(9, same), note(6, same)];
        sort_by_meeting_date_desc(&mut notes);
        let ids: Vec<DbId> = notes.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![9, 6, 4]);
    }

    // -- serde ---------------------------------------------------------------

    #[test]
    fn create_note_reads_camel_case_json() {
        let input: CreateNote = serde_json::from_value(serde_json::json!({
            "title": "Standup",
            "content": "sync",
            "category": "Standup",
            "meetingDate": "2025-05-10T14:30:00Z"
        }))
        .unwrap();

        assert_eq!(input.category.as_deref(), Some("Standup"));
        assert_eq!(
            input.meeting_date,
            Utc.with_ymd_and_hms(2025, 5, 10, 14, 30, 0).unwrap()
        );
    }

    #[test]
    fn category_may_be_omitted() {
        let input: CreateNote = serde_json::from_value(serde_json::json!({
            "title": "Retro",
            "content": "went well",
            "meetingDate": "2025-05-10T14:30:00Z"
        }))
        .unwrap();
        assert_eq!(input.category, None);
    }

    #[test]
    fn note_serializes_meeting_date_in_camel_case() {
        let json = serde_json::to_value(note(5, ts(2025, 5, 10, 14))).unwrap();
        assert_eq!(json["id"], 5);
        assert!(json["meetingDate"].is_string());
        assert!(json["category"].is_null());
    }
}
