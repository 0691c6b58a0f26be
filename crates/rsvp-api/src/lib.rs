//! HTTP API for the RSVP registry.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **Public endpoints** for submitting RSVPs and listing attendees in
//!   preference, priority, or arrival order
//! - **Admin endpoints** for changing an attendee's status and removing
//!   attendees
//! - **Welcome page** (`GET /`) with live counts and links
//!
//! # Architecture
//!
//! All handlers share one [`AppState`], constructed once at startup and
//! injected through Axum's `State` extractor. The attendee store and the
//! admission queue live together inside a single
//! [`Registry`](rsvp_core::Registry) behind one lock, so deletes update both
//! collections atomically.

pub mod admin;
pub mod error;
pub mod handlers;
pub mod payload;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use router::build_router;
pub use server::{ServerConfig, ServerError, start_server};
pub use state::AppState;
