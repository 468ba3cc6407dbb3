//! Repository for the `notes` table.

use async_trait::async_trait;
use minutes_core::notes::{CreateNote, Note, NoteFilter};
use minutes_core::repository::NoteRepository;
use minutes_core::types::DbId;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::models::note::NoteRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, content, category, meeting_date, created_at, updated_at";

/// Newest meeting first, id as the tie-break.
const ORDER_BY: &str = "ORDER BY meeting_date DESC, id DESC";

/// PostgreSQL implementation of [`NoteRepository`].
#[derive(Debug, Clone)]
pub struct NoteRepo {
    pool: PgPool,
}

impl NoteRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Number of live notes. Used by the seeder to skip populated tables.
    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM notes WHERE is_deleted = FALSE")
            .fetch_one(&self.pool)
            .await
    }
}

#[async_trait]
impl NoteRepository for NoteRepo {
    type Error = sqlx::Error;

    async fn create(&self, input: &CreateNote) -> Result<Note, sqlx::Error> {
        let query = format!(
            "INSERT INTO notes (title, content, category, meeting_date)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, NoteRow>(&query)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.category)
            .bind(input.meeting_date)
            .fetch_one(&self.pool)
            .await
            .map(Note::from)
    }

    async fn list(&self) -> Result<Vec<Note>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notes WHERE is_deleted = FALSE {ORDER_BY}");
        let rows = sqlx::query_as::<_, NoteRow>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Note::from).collect())
    }

    async fn list_paginated(&self, limit: i64, offset: i64) -> Result<Vec<Note>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notes WHERE is_deleted = FALSE {ORDER_BY}
             LIMIT $1 OFFSET $2"
        );
        let rows = sqlx::query_as::<_, NoteRow>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Note::from).collect())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Note>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notes WHERE id = $1 AND is_deleted = FALSE");
        sqlx::query_as::<_, NoteRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map(|row| row.map(Note::from))
    }

    async fn update(&self, note: &Note) -> Result<Option<Note>, sqlx::Error> {
        let query = format!(
            "UPDATE notes SET
                title = $2,
                content = $3,
                category = $4,
                meeting_date = $5
             WHERE id = $1 AND is_deleted = FALSE
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, NoteRow>(&query)
            .bind(note.id)
            .bind(&note.title)
            .bind(&note.content)
            .bind(&note.category)
            .bind(note.meeting_date)
            .fetch_optional(&self.pool)
            .await
            .map(|row| row.map(Note::from))
    }

    async fn soft_delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE notes SET is_deleted = TRUE, deleted_at = NOW()
             WHERE id = $1 AND is_deleted = FALSE",
        )
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn search(&self, keyword: &str) -> Result<Vec<Note>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notes
             WHERE is_deleted = FALSE AND (title ILIKE $1 OR content ILIKE $1)
             {ORDER_BY}"
        );
        let rows = sqlx::query_as::<_, NoteRow>(&query)
            .bind(contains_pattern(keyword))
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Note::from).collect())
    }

    async fn filter(&self, filter: &NoteFilter) -> Result<Vec<Note>, sqlx::Error> {
        let mut qb = build_filter_query(filter);
        let rows = qb
            .build_query_as::<NoteRow>()
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Note::from).collect())
    }
}

/// Start from every live note and AND in one predicate per populated field.
fn build_filter_query(filter: &NoteFilter) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(format!(
        "SELECT {COLUMNS} FROM notes WHERE is_deleted = FALSE"
    ));

    if let Some(keyword) = &filter.keyword {
        let pattern = contains_pattern(keyword);
        qb.push(" AND (title ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR content ILIKE ")
            .push_bind(pattern)
            .push(")");
    }

    if let Some(category) = &filter.category {
        qb.push(" AND category = ").push_bind(category.clone());
    }

    if let Some(from_date) = filter.from_date {
        qb.push(" AND meeting_date >= ").push_bind(from_date);
    }

    if let Some(to_date) = filter.to_date {
        qb.push(" AND meeting_date <= ").push_bind(to_date);
    }

    qb.push(" ").push(ORDER_BY);
    qb
}

/// Wrap `keyword` in `%` for a substring `ILIKE`, escaping the characters
/// `LIKE` would otherwise treat as wildcards.
fn contains_pattern(keyword: &str) -> String {
    let mut pattern = String::with_capacity(keyword.len() + 2);
    pattern.push('%');
    for ch in keyword.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
