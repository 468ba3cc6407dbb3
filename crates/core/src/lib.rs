//! Domain layer for the meeting notes service.
//!
//! Holds the note types, the error taxonomy, the repository port and the
//! use-case service. Nothing in here knows about HTTP or PostgreSQL.

pub mod error;
pub mod notes;
pub mod repository;
pub mod service;
pub mod types;
