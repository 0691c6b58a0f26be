//! Role-based priority ranking.
//!
//! Lower keys sort first. The three recognized roles have fixed ranks:
//!
//! | Role | Key |
//! |------|-----|
//! | `Speaker` | 1 |
//! | `Listener` | 2 |
//! | `Dancer` | 3 |
//!
//! Every other role is handled by the configured [`UnrankedPolicy`].
//! Matching is exact and case-sensitive.

use rand::Rng;
use rsvp_types::Attendee;
use serde::Deserialize;

/// Key assigned to unrecognized roles under [`UnrankedPolicy::Trailing`].
pub const TRAILING_PRIORITY: f64 = 4.0;

/// How roles outside the ranking table are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnrankedPolicy {
    /// Draw a fresh key uniformly from `[0, 1)` every time a role is ranked.
    ///
    /// Unrecognized roles therefore sort ahead of `Speaker`, and their order
    /// relative to each other changes between listings.
    Random,
    /// Give every unrecognized role [`TRAILING_PRIORITY`], placing them after
    /// `Dancer` in insertion order.
    #[default]
    Trailing,
}

/// Fixed rank of a recognized role, or `None` for anything else.
pub fn known_rank(role: &str) -> Option<u8> {
    match role {
        "Speaker" => Some(1),
        "Listener" => Some(2),
        "Dancer" => Some(3),
        _ => None,
    }
}

/// Compute the priority key for `role`.
///
/// With [`UnrankedPolicy::Random`] each call for an unrecognized role draws
/// a new value from `rng`.
pub fn priority(role: &str, policy: UnrankedPolicy, rng: &mut impl Rng) -> f64 {
    known_rank(role).map_or_else(
        || match policy {
            UnrankedPolicy::Random => rng.random::<f64>(),
            UnrankedPolicy::Trailing => TRAILING_PRIORITY,
        },
        f64::from,
    )
}

/// Order `attendees` ascending by role priority.
///
/// Keys are computed exactly once per attendee, so the comparison is a total
/// order even when keys are random. The sort is stable: attendees with equal
/// keys keep their input order.
pub fn rank<'a, I>(attendees: I, policy: UnrankedPolicy, rng: &mut impl Rng) -> Vec<&'a Attendee>
where
    I: IntoIterator<Item = &'a Attendee>,
{
    let mut keyed: Vec<(f64, &Attendee)> = attendees
        .into_iter()
        .map(|a| (priority(&a.role, policy, rng), a))
        .collect();
    keyed.sort_by(|(ka, _), (kb, _)| ka.total_cmp(kb));
    keyed.into_iter().map(|(_, a)| a).collect()
}
