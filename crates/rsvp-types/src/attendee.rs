//! The attendee record and its lifecycle status.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ids::AttendeeId;

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Where an attendee stands in the admission process.
///
/// Every attendee starts as [`Pending`](Self::Pending). Administrators may
/// move an attendee to [`Confirmed`](Self::Confirmed) or
/// [`Waitlisted`](Self::Waitlisted); nothing moves an attendee back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum AttendeeStatus {
    /// RSVP received, no admin decision yet.
    #[default]
    Pending,
    /// Admitted to the event.
    Confirmed,
    /// Held on the waitlist.
    Waitlisted,
}

impl AttendeeStatus {
    /// Look up a status by its exact wire name (`"Pending"`, `"Confirmed"`,
    /// `"Waitlisted"`). Matching is case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Pending" => Some(Self::Pending),
            "Confirmed" => Some(Self::Confirmed),
            "Waitlisted" => Some(Self::Waitlisted),
            _ => None,
        }
    }

    /// The wire name of this status.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Confirmed => "Confirmed",
            Self::Waitlisted => "Waitlisted",
        }
    }

    /// Whether an administrator may set this status explicitly.
    pub const fn is_admin_assignable(self) -> bool {
        matches!(self, Self::Confirmed | Self::Waitlisted)
    }
}

impl core::fmt::Display for AttendeeStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Attendee
// ---------------------------------------------------------------------------

/// A single RSVP.
///
/// `name` is the key every endpoint uses to address an attendee, although
/// uniqueness is not enforced. `preference` is a free-form category (for
/// example a dietary preference) used only for ordering, and `role` feeds the
/// priority ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Attendee {
    /// Internal identity, assigned at RSVP time.
    pub id: AttendeeId,
    /// Display name, used as the lookup key.
    pub name: String,
    /// Free-form category used as a sort key.
    pub preference: String,
    /// Role used to compute admission priority.
    pub role: String,
    /// Current admission status.
    pub status: AttendeeStatus,
    /// When the RSVP was submitted.
    pub rsvp_at: DateTime<Utc>,
}

impl Attendee {
    /// Create a fresh [`Pending`](AttendeeStatus::Pending) attendee stamped
    /// with the current time.
    pub fn new(
        name: impl Into<String>,
        preference: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id: AttendeeId::new(),
            name: name.into(),
            preference: preference.into(),
            role: role.into(),
            status: AttendeeStatus::Pending,
            rsvp_at: Utc::now(),
        }
    }
}
