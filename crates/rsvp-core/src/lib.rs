//! Attendee bookkeeping for the RSVP registry.
//!
//! This crate owns the only designed behavior in the system: a
//! first-come-first-served admission queue kept consistent with the
//! authoritative attendee store, plus a derived priority ordering computed
//! from attendee role.
//!
//! # Modules
//!
//! - [`store`] -- [`AttendeeStore`], the authoritative record list.
//! - [`queue`] -- [`AdmissionQueue`], a FIFO of admission tickets.
//! - [`priority`] -- Role to priority-key mapping and [`UnrankedPolicy`].
//! - [`registry`] -- [`Registry`], which owns one store and one queue and
//!   keeps them consistent.
//! - [`config`] -- Configuration loading from `rsvp-config.yaml`.
//! - [`error`] -- [`RegistryError`].
//!
//! [`AttendeeStore`]: store::AttendeeStore
//! [`AdmissionQueue`]: queue::AdmissionQueue
//! [`UnrankedPolicy`]: priority::UnrankedPolicy
//! [`Registry`]: registry::Registry
//! [`RegistryError`]: error::RegistryError

pub mod config;
pub mod error;
pub mod priority;
pub mod queue;
pub mod registry;
pub mod store;

pub use error::RegistryError;
pub use priority::UnrankedPolicy;
pub use queue::{AdmissionQueue, AdmissionTicket};
pub use registry::{Registry, Removal};
pub use store::AttendeeStore;
