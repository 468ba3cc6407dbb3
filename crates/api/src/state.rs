use std::sync::Arc;

use minutes_core::service::NoteService;
use minutes_db::repositories::NoteRepo;

use crate::config::ServerConfig;

/// The note use-cases as wired for PostgreSQL.
pub type Notes = NoteService<NoteRepo>;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: minutes_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Note use-cases, backed by a repository over `pool`.
    pub notes: Notes,
}

impl AppState {
    pub fn new(pool: minutes_db::DbPool, config: ServerConfig) -> Self {
        let notes = NoteService::new(NoteRepo::new(pool.clone()));
        Self {
            pool,
            config: Arc::new(config),
            notes,
        }
    }
}
