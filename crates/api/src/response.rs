//! Shared response envelope types for API handlers.
//!
//! Single resources use a `{ "data": ... }` envelope. Lists use the same
//! envelope and add a `message` when they come back empty.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// `{ "data": [...] }`, or `{ "data": [], "message": "..." }` when empty.
#[derive(Debug, Serialize)]
pub struct ListResponse<T: Serialize> {
    pub data: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

impl<T: Serialize> ListResponse<T> {
    /// Wrap `data`, attaching `empty_message` only if there is nothing in it.
    pub fn new(data: Vec<T>, empty_message: &'static str) -> Self {
        let message = data.is_empty().then_some(empty_message);
        Self { data, message }
    }
}

/// `{ "message": "..." }` for operations with nothing else to return.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
