//! Handlers for meeting notes.
//!
//! Each handler decodes the request, calls one [`crate::state::Notes`]
//! use-case, and wraps the result in a response envelope. Error
//! classification happens in the service; these only translate.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use minutes_core::notes::{CreateNote, UpdateNote};

use crate::error::{AppError, AppResult};
use crate::query::{parse_note_id, FilterParams, PaginationParams, SearchParams};
use crate::response::{DataResponse, ListResponse, MessageResponse};
use crate::state::AppState;

const NO_NOTES: &str = "No notes found";
const NO_SEARCH_MATCHES: &str = "No notes match search criteria";
const NO_FILTER_MATCHES: &str = "No notes match filter criteria";

/// POST /notes
///
/// Create a new note.
pub async fn create_note(
    State(state): State<AppState>,
    payload: Result<Json<CreateNote>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload.map_err(|e| {
        tracing::warn!(error = %e, "Rejected create note body");
        AppError::BadRequest("Invalid input to create note".to_string())
    })?;

    let note = state.notes.create_note(input).await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: note })))
}

/// GET /notes
///
/// List every note, most recent meeting first.
pub async fn list_notes(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let notes = state.notes.get_all_notes().await?;
    Ok(Json(ListResponse::new(notes, NO_NOTES)))
}

/// GET /notes/paginated?limit=&offset=
///
/// List a window of notes. `limit` defaults to 10 and `offset` to 0.
pub async fn list_notes_paginated(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<impl IntoResponse> {
    let (limit, offset) = params.parse()?;
    let notes = state.notes.get_paginated_notes(limit, offset).await?;
    Ok(Json(ListResponse::new(notes, NO_NOTES)))
}

/// GET /notes/{id}
///
/// Get a single note by ID.
pub async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_note_id(&id)?;
    let note = state.notes.get_note_by_id(id).await?;
    Ok(Json(DataResponse { data: note }))
}

/// PUT /notes/{id}
///
/// Replace the title, content, category and meeting date of a note.
pub async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateNote>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let id = parse_note_id(&id)?;
    let Json(input) = payload.map_err(|e| {
        tracing::warn!(error = %e, note_id = id, "Rejected update note body");
        AppError::BadRequest("Invalid input to update note".to_string())
    })?;

    let note = state.notes.update_note(id, input).await?;

    Ok(Json(DataResponse { data: note }))
}

/// DELETE /notes/{id}
///
/// Soft-delete a note.
pub async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_note_id(&id)?;
    state.notes.delete_note(id).await?;
    Ok(Json(MessageResponse {
        message: "Note deleted",
    }))
}

/// GET /notes/search?keyword=
///
/// Case-insensitive substring search over title and content.
pub async fn search_notes(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<impl IntoResponse> {
    let notes = state.notes.search_notes(&params.keyword).await?;
    Ok(Json(ListResponse::new(notes, NO_SEARCH_MATCHES)))
}

/// GET /notes/filter?keyword=&category=&fromDate=&toDate=
///
/// Notes matching every supplied criterion.
pub async fn filter_notes(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> AppResult<impl IntoResponse> {
    let filter = params.into_filter()?;
    let notes = state.notes.filter_notes(filter).await?;
    Ok(Json(ListResponse::new(notes, NO_FILTER_MATCHES)))
}
