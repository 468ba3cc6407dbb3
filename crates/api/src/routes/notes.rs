//! Route definitions for meeting notes.
//!
//! Mounted at `/notes` by [`crate::router::build_app_router`].

use axum::routing::get;
use axum::Router;

use crate::handlers::notes;
use crate::state::AppState;

/// Note routes.
///
/// ```text
/// GET    /                   -> list_notes
/// POST   /                   -> create_note
/// GET    /paginated          -> list_notes_paginated (?limit, offset)
/// GET    /search             -> search_notes (?keyword)
/// GET    /filter             -> filter_notes (?keyword, category, fromDate, toDate)
/// GET    /{id}               -> get_note
/// PUT    /{id}               -> update_note
/// DELETE /{id}               -> delete_note
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(notes::list_notes).post(notes::create_note))
        .route("/paginated", get(notes::list_notes_paginated))
        .route("/search", get(notes::search_notes))
        .route("/filter", get(notes::filter_notes))
        .route(
            "/{id}",
            get(notes::get_note)
                .put(notes::update_note)
                .delete(notes::delete_note),
        )
}
