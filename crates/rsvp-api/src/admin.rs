//! Admin endpoint handlers.
//!
//! Attendees are addressed by name. When several attendees share a name,
//! these endpoints act on the earliest RSVP.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `PUT` | `/admin/attendees/{name}/status` | Confirm or waitlist |
//! | `DELETE` | `/admin/attendees/{name}` | Remove from list and queue |

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use tracing::debug;

use crate::error::ApiError;
use crate::handlers::MessageResponse;
use crate::payload::Payload;
use crate::state::AppState;

/// Request body for `PUT /admin/attendees/{name}/status`.
#[derive(Debug, Default, serde::Deserialize)]
pub struct StatusUpdateRequest {
    /// `Confirmed` or `Waitlisted`.
    pub status: Option<String>,
}

// ---------------------------------------------------------------------------
// PUT /admin/attendees/{name}/status
// ---------------------------------------------------------------------------

/// Set an attendee's status to `Confirmed` or `Waitlisted`.
///
/// The status is validated before the name is looked up, so an invalid
/// status yields `400` even for unknown names.
pub async fn update_status(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Payload(body): Payload<StatusUpdateRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let raw_status = body.status.unwrap_or_default();

    let attendee = state
        .registry
        .write()
        .await
        .update_status(&name, &raw_status)?;

    Ok(Json(MessageResponse::new(format!(
        "Attendee {name} marked as {}",
        attendee.status
    ))))
}

// ---------------------------------------------------------------------------
// DELETE /admin/attendees/{name}
// ---------------------------------------------------------------------------

/// Remove an attendee from the list and drop every queue entry carrying the
/// same name.
pub async fn remove_attendee(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let removal = state.registry.write().await.remove(&name)?;
    debug!(id = %removal.attendee.id, "Removal committed");

    Ok(Json(MessageResponse::new(format!(
        "Attendee {name} has been removed."
    ))))
}
