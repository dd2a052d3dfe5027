//! Axum handlers for the `/api` surface.
//!
//! Handlers validate input, push queries onto the database executor, and
//! wrap payloads in the `{success, data}` envelope. Failures become
//! [`crate::error::ApiError`] and render the matching error envelope.

pub mod admin;
pub mod assistant;
pub mod content;
pub mod guides;
pub mod quiz;
pub mod speech;

use axum::Json;
use serde::Serialize;

/// The success envelope every JSON endpoint uses.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    pub data: T,
}

pub(crate) fn ok<T: Serialize>(data: T) -> Json<Envelope<T>> {
    Json(Envelope {
        success: true,
        data,
    })
}
