//! Error types for registry operations.
//!
//! The display strings double as the client-facing messages returned by the
//! HTTP layer, so they are phrased for end users.

/// Errors produced by the attendee store and registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// An RSVP was missing `name`, `preference`, or `role` (or one was empty).
    #[error("Please provide all required details.")]
    MissingDetails,

    /// A status update named something other than `Confirmed` or `Waitlisted`.
    #[error("Invalid status. Choose either \"Confirmed\" or \"Waitlisted\".")]
    InvalidStatus {
        /// The rejected status value as received.
        value: String,
    },

    /// No attendee with the given name exists.
    #[error("Attendee not found.")]
    NotFound {
        /// The name that was looked up.
        name: String,
    },
}

impl RegistryError {
    /// Whether this error is caused by bad client input (as opposed to a
    /// missing attendee).
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::MissingDetails | Self::InvalidStatus { .. })
    }
}
