//! Storage port for notes.
//!
//! Implementations translate each call into a datastore query and return the
//! storage error untouched. They never validate input and never retry.

use async_trait::async_trait;

use crate::notes::{CreateNote, Note, NoteFilter};
use crate::types::DbId;

#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Raw error type of the backing store.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Insert a note, returning the stored row with its assigned id.
    async fn create(&self, input: &CreateNote) -> Result<Note, Self::Error>;

    /// All live notes.
    async fn list(&self) -> Result<Vec<Note>, Self::Error>;

    /// A `limit`/`offset` window over the live notes.
    async fn list_paginated(&self, limit: i64, offset: i64) -> Result<Vec<Note>, Self::Error>;

    /// `Ok(None)` when no live note has this id.
    async fn find_by_id(&self, id: DbId) -> Result<Option<Note>, Self::Error>;

    /// Overwrite title, content, category and meeting date of the note with
    /// `note.id`. `Ok(None)` when that note is gone.
    async fn update(&self, note: &Note) -> Result<Option<Note>, Self::Error>;

    /// Set the tombstone. `Ok(false)` when no live note had this id.
    async fn soft_delete(&self, id: DbId) -> Result<bool, Self::Error>;

    /// Case-insensitive substring match on title or content.
    async fn search(&self, keyword: &str) -> Result<Vec<Note>, Self::Error>;

    /// AND together every populated field of `filter`.
    async fn filter(&self, filter: &NoteFilter) -> Result<Vec<Note>, Self::Error>;
}
