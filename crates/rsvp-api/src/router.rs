//! Axum router construction for the RSVP API.
//!
//! Assembles all routes into a single [`Router`] with CORS and request
//! tracing enabled.

use std::sync::Arc;

use axum::Router;
use axum::routing::{delete, get, post, put};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::admin;
use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router.
///
/// The router includes:
/// - `GET /` -- welcome page
/// - `POST /rsvp` -- submit an RSVP
/// - `GET /attendees` -- attendees by preference
/// - `GET /attendees-priority` -- attendees by role priority
/// - `GET /rsvp-queue` -- attendees in arrival order
/// - `PUT /admin/attendees/{name}/status` -- confirm or waitlist
/// - `DELETE /admin/attendees/{name}` -- remove an attendee
///
/// CORS allows any origin, method, and header.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Welcome page
        .route("/", get(handlers::index))
        // Public API
        .route("/rsvp", post(handlers::submit_rsvp))
        .route("/attendees", get(handlers::list_attendees))
        .route("/attendees-priority", get(handlers::list_attendees_by_priority))
        .route("/rsvp-queue", get(handlers::rsvp_queue))
        // Admin API
        .route("/admin/attendees/{name}/status", put(admin::update_status))
        .route("/admin/attendees/{name}", delete(admin::remove_attendee))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
