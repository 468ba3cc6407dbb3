use crate::types::DbId;

/// Boxed storage error carried as the source of every `*Failed` variant.
pub type StorageError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The closed set of failures a note operation can produce.
///
/// The first five variants are caller mistakes or lookups that came back
/// empty. The `*Failed` variants wrap whatever the storage layer returned
/// and must never be shown to a client verbatim.
#[derive(Debug, thiserror::Error)]
pub enum NoteError {
    #[error("note title cannot be empty")]
    EmptyTitle,

    #[error("note content cannot be empty")]
    EmptyContent,

    #[error("search keyword cannot be empty")]
    EmptyKeyword,

    #[error("fromDate must be before toDate")]
    InvalidDateRange,

    #[error("note with id {id} not found")]
    NotFound { id: DbId },

    #[error("failed to create note")]
    CreateFailed(#[source] StorageError),

    #[error("failed to get notes")]
    ListFailed(#[source] StorageError),

    #[error("failed to retrieve note")]
    RetrieveFailed(#[source] StorageError),

    #[error("failed to update note")]
    UpdateFailed(#[source] StorageError),

    #[error("failed to delete note")]
    DeleteFailed(#[source] StorageError),

    #[error("failed to find notes")]
    SearchFailed(#[source] StorageError),

    #[error("failed to filter notes")]
    FilterFailed(#[source] StorageError),
}

impl NoteError {
    /// Whether the error was caused by the caller's input rather than by
    /// the storage layer.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            NoteError::EmptyTitle
                | NoteError::EmptyContent
                | NoteError::EmptyKeyword
                | NoteError::InvalidDateRange
                | NoteError::NotFound { .. }
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
