//! Type-safe identifier wrapper around [`Uuid`].
//!
//! Attendees are addressed by `name` at the API boundary, but names are not
//! unique. The admission queue therefore references store records by
//! [`AttendeeId`], which is assigned once at RSVP time and never reused.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Unique identifier for an attendee record.
///
/// Uses UUID v7 so identifiers sort in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct AttendeeId(pub Uuid);

impl AttendeeId {
    /// Create a new identifier using UUID v7 (time-ordered).
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Return the inner [`Uuid`] value.
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for AttendeeId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for AttendeeId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for AttendeeId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<AttendeeId> for Uuid {
    fn from(id: AttendeeId) -> Self {
        id.0
    }
}
