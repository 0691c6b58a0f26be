//! Public endpoint handlers.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Welcome page |
//! | `POST` | `/rsvp` | Submit an RSVP |
//! | `GET` | `/attendees` | All attendees by preference |
//! | `GET` | `/attendees-priority` | All attendees by role priority |
//! | `GET` | `/rsvp-queue` | Queued attendees in arrival order |

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use rsvp_core::RegistryError;
use rsvp_types::Attendee;

use crate::error::ApiError;
use crate::payload::Payload;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /rsvp`.
///
/// Every field is optional at the decoding stage so that absent fields
/// produce a validation message rather than a decoder error.
#[derive(Debug, Default, serde::Deserialize)]
pub struct RsvpRequest {
    /// Attendee name.
    pub name: Option<String>,
    /// Free-form preference, e.g. dietary.
    pub preference: Option<String>,
    /// Attendee role, e.g. `Speaker`.
    pub role: Option<String>,
}

/// Plain `{"message": ...}` acknowledgement.
#[derive(Debug, serde::Serialize)]
pub struct MessageResponse {
    /// Human-readable message.
    pub message: String,
}

impl MessageResponse {
    /// Build a response carrying `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// GET /
// ---------------------------------------------------------------------------

/// Serve the welcome page with current attendee and queue counts.
pub async fn index(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let registry = state.registry.read().await;
    let attendee_count = registry.store().len();
    let queue_count = registry.queue().len();

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Event Management System</title>
    <style>
        body {{ font-family: sans-serif; padding: 2rem; max-width: 720px; margin: 0 auto; }}
        .metric {{ display: inline-block; padding: 0.75rem 1.25rem; margin-right: 0.5rem; border: 1px solid #ccc; border-radius: 6px; }}
        .metric .value {{ font-size: 1.5rem; font-weight: bold; }}
    </style>
</head>
<body>
    <h1>Welcome to the Event Management System</h1>

    <div>
        <div class="metric"><div>Attendees</div><div class="value">{attendee_count}</div></div>
        <div class="metric"><div>In queue</div><div class="value">{queue_count}</div></div>
    </div>

    <h2>Endpoints</h2>
    <ul>
        <li><code>POST /rsvp</code> -- Submit an RSVP (name, preference, role)</li>
        <li><a href="/attendees">GET /attendees</a> -- Attendees by preference</li>
        <li><a href="/attendees-priority">GET /attendees-priority</a> -- Attendees by role priority</li>
        <li><a href="/rsvp-queue">GET /rsvp-queue</a> -- Arrival order</li>
        <li><code>PUT /admin/attendees/:name/status</code> -- Confirm or waitlist</li>
        <li><code>DELETE /admin/attendees/:name</code> -- Remove an attendee</li>
    </ul>
</body>
</html>"#
    ))
}

// ---------------------------------------------------------------------------
// POST /rsvp
// ---------------------------------------------------------------------------

/// Record an RSVP. `name`, `preference`, and `role` are all required.
pub async fn submit_rsvp(
    State(state): State<Arc<AppState>>,
    Payload(body): Payload<RsvpRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (Some(name), Some(preference), Some(role)) = (body.name, body.preference, body.role)
    else {
        return Err(RegistryError::MissingDetails.into());
    };

    state
        .registry
        .write()
        .await
        .submit_rsvp(&name, &preference, &role)?;

    Ok(Json(MessageResponse::new("RSVP successfully added!")))
}

// ---------------------------------------------------------------------------
// GET /attendees
// ---------------------------------------------------------------------------

/// List every attendee ordered by preference.
pub async fn list_attendees(State(state): State<Arc<AppState>>) -> Json<Vec<Attendee>> {
    Json(state.registry.read().await.attendees_by_preference())
}

// ---------------------------------------------------------------------------
// GET /attendees-priority
// ---------------------------------------------------------------------------

/// List every attendee ordered by role priority (Speaker, Listener, Dancer,
/// then per the configured policy for other roles).
pub async fn list_attendees_by_priority(
    State(state): State<Arc<AppState>>,
) -> Json<Vec<Attendee>> {
    Json(state.registry.read().await.attendees_by_priority())
}

// ---------------------------------------------------------------------------
// GET /rsvp-queue
// ---------------------------------------------------------------------------

/// List queued attendees in the order they RSVP'd.
pub async fn rsvp_queue(State(state): State<Arc<AppState>>) -> Json<Vec<Attendee>> {
    Json(state.registry.read().await.rsvp_queue())
}
