//! Query-string and path parsing for the note handlers.
//!
//! Parameters arrive as raw strings so a malformed value produces our own
//! JSON 400 instead of the framework's plain-text rejection.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use minutes_core::notes::NoteFilter;
use minutes_core::types::{DbId, Timestamp};
use serde::Deserialize;

use crate::error::AppError;

/// Page size used when `?limit=` is absent.
pub const DEFAULT_PAGE_LIMIT: i64 = 10;

/// Pagination parameters (`?limit=&offset=`).
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl PaginationParams {
    /// Parse into `(limit, offset)`. Both must be non-negative integers.
    pub fn parse(&self) -> Result<(i64, i64), AppError> {
        let limit = parse_non_negative(self.limit.as_deref(), DEFAULT_PAGE_LIMIT, "Invalid limit")?;
        let offset = parse_non_negative(self.offset.as_deref(), 0, "Invalid offset")?;
        Ok((limit, offset))
    }
}

fn parse_non_negative(
    raw: Option<&str>,
    default: i64,
    message: &'static str,
) -> Result<i64, AppError> {
    match raw {
        None => Ok(default),
        Some(s) => match s.trim().parse::<i64>() {
            Ok(n) if n >= 0 => Ok(n),
            _ => Err(AppError::BadRequest(message.to_string())),
        },
    }
}

/// Keyword search parameters (`?keyword=`).
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub keyword: String,
}

/// Composite filter parameters (`?keyword=&category=&fromDate=&toDate=`).
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterParams {
    pub keyword: Option<String>,
    pub category: Option<String>,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
}

impl FilterParams {
    /// Parse the date bounds and build a [`NoteFilter`]. Blank dates count
    /// as absent. Text fields are passed through untrimmed; the service
    /// normalises them.
    pub fn into_filter(self) -> Result<NoteFilter, AppError> {
        let from_date = self
            .from_date
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(|s| {
                parse_date_bound(s, DayEdge::Start)
                    .ok_or_else(|| AppError::BadRequest("Invalid fromDate".to_string()))
            })
            .transpose()?;
        let to_date = self
            .to_date
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(|s| {
                parse_date_bound(s, DayEdge::End)
                    .ok_or_else(|| AppError::BadRequest("Invalid toDate".to_string()))
            })
            .transpose()?;

        Ok(NoteFilter {
            keyword: self.keyword,
            category: self.category,
            from_date,
            to_date,
        })
    }
}

/// Which instant a bare `YYYY-MM-DD` date stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayEdge {
    /// `00:00:00` UTC.
    Start,
    /// The last microsecond of the day, UTC.
    End,
}

/// Parse an RFC 3339 timestamp, or a plain `YYYY-MM-DD` date expanded to
/// the given edge of that day. Blank or out-of-range input yields `None`.
pub fn parse_date_bound(raw: &str, edge: DayEdge) -> Option<Timestamp> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    let at = match edge {
        DayEdge::Start => date.and_hms_opt(0, 0, 0)?,
        DayEdge::End => date.and_hms_micro_opt(23, 59, 59, 999_999)?,
    };
    Some(Utc.from_utc_datetime(&at))
}

/// Parse the `{id}` path segment. Ids are positive integers.
pub fn parse_note_id(raw: &str) -> Result<DbId, AppError> {
    match raw.parse::<DbId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::BadRequest("Invalid note ID".to_string())),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
