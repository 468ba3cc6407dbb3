//! Note use-cases.
//!
//! [`NoteService`] is the only place that turns storage errors into
//! [`NoteError`] variants. Every list it returns is ordered by
//! [`sort_by_meeting_date_desc`].

use crate::error::{NoteError, StorageError};
use crate::notes::{
    normalize_keyword, sort_by_meeting_date_desc, validate_date_range, validate_note_fields,
    CreateNote, Note, NoteFilter, UpdateNote,
};
use crate::repository::NoteRepository;
use crate::types::DbId;

/// Validates note requests and delegates to a [`NoteRepository`].
#[derive(Debug, Clone)]
pub struct NoteService<R> {
    repo: R,
}

impl<R: NoteRepository> NoteService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Validate and store a new note.
    pub async fn create_note(&self, input: CreateNote) -> Result<Note, NoteError> {
        validate_note_fields(&input.title, &input.content)?;

        let note = self.repo.create(&input).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to create note");
            NoteError::CreateFailed(boxed(e))
        })?;

        tracing::info!(note_id = note.id, "Note created");
        Ok(note)
    }

    /// Every live note, most recent meeting first.
    pub async fn get_all_notes(&self) -> Result<Vec<Note>, NoteError> {
        let mut notes = self.repo.list().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to list notes");
            NoteError::ListFailed(boxed(e))
        })?;

        sort_by_meeting_date_desc(&mut notes);
        tracing::debug!(count = notes.len(), "Listed notes");
        Ok(notes)
    }

    /// A window of live notes, most recent meeting first.
    ///
    /// `limit` and `offset` are passed to the repository as given.
    pub async fn get_paginated_notes(
        &self,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Note>, NoteError> {
        let mut notes = self
            .repo
            .list_paginated(limit, offset)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, limit, offset, "Failed to list paginated notes");
                NoteError::ListFailed(boxed(e))
            })?;

        sort_by_meeting_date_desc(&mut notes);
        tracing::debug!(count = notes.len(), limit, offset, "Listed paginated notes");
        Ok(notes)
    }

    /// Fetch one live note.
    pub async fn get_note_by_id(&self, id: DbId) -> Result<Note, NoteError> {
        match self.repo.find_by_id(id).await {
            Ok(Some(note)) => Ok(note),
            Ok(None) => {
                tracing::warn!(note_id = id, "Note not found");
                Err(NoteError::NotFound { id })
            }
            Err(e) => {
                tracing::error!(error = %e, note_id = id, "Failed to retrieve note");
                Err(NoteError::RetrieveFailed(boxed(e)))
            }
        }
    }

    /// Replace title, content, category and meeting date of an existing
    /// note. The id and creation timestamp are never touched.
    pub async fn update_note(&self, id: DbId, input: UpdateNote) -> Result<Note, NoteError> {
        let mut existing = self.get_note_by_id(id).await?;

        validate_note_fields(&input.title, &input.content)?;

        existing.title = input.title;
        existing.content = input.content;
        existing.category = input.category;
        existing.meeting_date = input.meeting_date;

        let updated = self
            .repo
            .update(&existing)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, note_id = id, "Failed to update note");
                NoteError::UpdateFailed(boxed(e))
            })?
            .ok_or(NoteError::NotFound { id })?;

        tracing::info!(note_id = id, "Note updated");
        Ok(updated)
    }

    /// Soft-delete a live note.
    pub async fn delete_note(&self, id: DbId) -> Result<(), NoteError> {
        self.get_note_by_id(id).await?;

        let deleted = self.repo.soft_delete(id).await.map_err(|e| {
            tracing::error!(error = %e, note_id = id, "Failed to delete note");
            NoteError::DeleteFailed(boxed(e))
        })?;

        // Lost a race with another delete.
        if !deleted {
            return Err(NoteError::NotFound { id });
        }

        tracing::info!(note_id = id, "Note deleted");
        Ok(())
    }

    /// Notes whose title or content contains `keyword`, ignoring case.
    pub async fn search_notes(&self, keyword: &str) -> Result<Vec<Note>, NoteError> {
        let keyword = normalize_keyword(keyword)?;

        let mut notes = self.repo.search(keyword).await.map_err(|e| {
            tracing::error!(error = %e, keyword, "Failed to search notes");
            NoteError::SearchFailed(boxed(e))
        })?;

        sort_by_meeting_date_desc(&mut notes);
        tracing::info!(keyword, count = notes.len(), "Searched notes");
        Ok(notes)
    }

    /// Notes matching every populated field of `filter`.
    ///
    /// An inverted date range is rejected before the repository is called.
    pub async fn filter_notes(&self, filter: NoteFilter) -> Result<Vec<Note>, NoteError> {
        let filter = filter.normalized();
        validate_date_range(filter.from_date, filter.to_date)?;

        let mut notes = self.repo.filter(&filter).await.map_err(|e| {
            tracing::error!(error = %e, ?filter, "Failed to filter notes");
            NoteError::FilterFailed(boxed(e))
        })?;

        sort_by_meeting_date_desc(&mut notes);
        tracing::info!(?filter, count = notes.len(), "Filtered notes");
        Ok(notes)
    }
}

fn boxed<E: std::error::Error + Send + Sync + 'static>(err: E) -> StorageError {
    Box::new(err)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
