//! Shared application state for the API server.

use std::sync::Arc;

use rsvp_core::{Registry, UnrankedPolicy};
use tokio::sync::RwLock;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] and injected via Axum's `State` extractor. The store
/// and the admission queue sit inside one [`Registry`] behind one lock;
/// listings take the read side and mutations the write side.
#[derive(Clone, Default)]
pub struct AppState {
    /// The attendee registry.
    pub registry: Arc<RwLock<Registry>>,
}

impl AppState {
    /// Create an empty state whose priority listing ranks unrecognized roles
    /// per `policy`.
    pub fn new(policy: UnrankedPolicy) -> Self {
        Self::with_registry(Registry::new(policy))
    }

    /// Wrap an existing registry, e.g. one pre-seeded in tests.
    pub fn with_registry(registry: Registry) -> Self {
        Self {
            registry: Arc::new(RwLock::new(registry)),
        }
    }
}
