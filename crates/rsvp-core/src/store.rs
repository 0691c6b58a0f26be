//! The authoritative attendee list.
//!
//! Records are kept in insertion order. Sorted listings build a new view and
//! never reorder the stored records. Name lookups always act on the first
//! record with a matching name; duplicate names are accepted.

use std::cmp::Ordering;
use std::sync::LazyLock;

use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed, CollatorPreferences};
use rand::Rng;
use rsvp_types::{Attendee, AttendeeId, AttendeeStatus};
use tracing::warn;

use crate::error::RegistryError;
use crate::priority::{self, UnrankedPolicy};

/// Owns every [`Attendee`] record.
#[derive(Debug, Clone, Default)]
pub struct AttendeeStore {
    records: Vec<Attendee>,
}

impl AttendeeStore {
    /// Create an empty store.
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append `attendee`. No uniqueness check is made.
    pub fn add(&mut self, attendee: Attendee) {
        self.records.push(attendee);
    }

    /// All records in insertion order.
    pub fn list(&self) -> &[Attendee] {
        &self.records
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look a record up by its internal id.
    pub fn get(&self, id: AttendeeId) -> Option<&Attendee> {
        self.records.iter().find(|a| a.id == id)
    }

    /// First record whose name equals `name`.
    pub fn find_by_name(&self, name: &str) -> Option<&Attendee> {
        self.records.iter().find(|a| a.name == name)
    }

    /// Set the status of the first record named `name`.
    ///
    /// # Errors
    ///
    /// [`RegistryError::InvalidStatus`] if `status` is not one an admin may
    /// assign, checked before the lookup. [`RegistryError::NotFound`] if no
    /// record matches.
    pub fn update_status(
        &mut self,
        name: &str,
        status: AttendeeStatus,
    ) -> Result<&Attendee, RegistryError> {
        if !status.is_admin_assignable() {
            return Err(RegistryError::InvalidStatus {
                value: status.to_string(),
            });
        }

        let attendee = self
            .records
            .iter_mut()
            .find(|a| a.name == name)
            .ok_or_else(|| RegistryError::NotFound {
                name: name.to_owned(),
            })?;
        attendee.status = status;
        Ok(attendee)
    }

    /// Remove and return the first record named `name`.
    ///
    /// # Errors
    ///
    /// [`RegistryError::NotFound`] if no record matches.
    pub fn remove(&mut self, name: &str) -> Result<Attendee, RegistryError> {
        let idx = self
            .records
            .iter()
            .position(|a| a.name == name)
            .ok_or_else(|| RegistryError::NotFound {
                name: name.to_owned(),
            })?;
        Ok(self.records.remove(idx))
    }

    /// All records ordered by [`compare_preference`] on `preference`.
    ///
    /// Ties keep insertion order.
    pub fn list_sorted_by_preference(&self) -> Vec<&Attendee> {
        let mut view: Vec<&Attendee> = self.records.iter().collect();
        view.sort_by(|a, b| compare_preference(&a.preference, &b.preference));
        view
    }

    /// All records ordered by role priority. See [`priority::rank`].
    pub fn list_sorted_by_priority(
        &self,
        policy: UnrankedPolicy,
        rng: &mut impl Rng,
    ) -> Vec<&Attendee> {
        priority::rank(&self.records, policy, rng)
    }
}

/// Root-locale collator shared by every preference sort.
static PREFERENCE_COLLATOR: LazyLock<Option<CollatorBorrowed<'static>>> = LazyLock::new(|| {
    Collator::try_new(CollatorPreferences::default(), CollatorOptions::default())
        .inspect_err(|e| warn!(error = %e, "Collation data unavailable, using code point order"))
        .ok()
});

/// Locale-aware string comparison using the Unicode Collation Algorithm with
/// the CLDR root locale.
///
/// Accents and case only break ties between otherwise equal letters, and
/// lowercase sorts ahead of uppercase, so `"apple" < "Apple" < "Éclair" <
/// "fish"`. Punctuation sorts ahead of letters.
pub fn compare_preference(a: &str, b: &str) -> Ordering {
    PREFERENCE_COLLATOR
        .as_ref()
        .map_or_else(|| a.cmp(b), |collator| collator.compare(a, b))
}
