//! Shared type definitions for the RSVP registry.
//!
//! Every crate in the workspace speaks in terms of these types. They are
//! serialized verbatim by the HTTP API and exported to `TypeScript` via
//! `ts-rs` for dashboard clients.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrapper for attendee identity
//! - [`attendee`] -- The attendee record and its status enumeration

pub mod attendee;
pub mod ids;

pub use attendee::{Attendee, AttendeeStatus};
pub use ids::AttendeeId;
