//! The registry: one attendee store and one admission queue kept consistent.
//!
//! # Invariants
//!
//! - Every ticket in the queue refers to a record in the store.
//! - An RSVP lands in both collections; a delete purges both.
//! - The queue only ever loses tickets through [`Registry::remove`] and
//!   [`Registry::next_in_line`].
//!
//! The registry is a plain owned value. Callers that share it across tasks
//! must wrap the whole registry in a single lock so that cross-collection
//! operations stay atomic.

use std::collections::HashMap;

use rand::Rng;
use rsvp_types::{Attendee, AttendeeId, AttendeeStatus};
use tracing::{debug, info};

use crate::error::RegistryError;
use crate::priority::UnrankedPolicy;
use crate::queue::{AdmissionQueue, AdmissionTicket};
use crate::store::AttendeeStore;

/// Result of a successful delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removal {
    /// The record removed from the store.
    pub attendee: Attendee,
    /// How many queue tickets carried the deleted name and were dropped.
    pub tickets_purged: usize,
}

/// Attendee store plus admission queue.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    store: AttendeeStore,
    queue: AdmissionQueue,
    policy: UnrankedPolicy,
}

impl Registry {
    /// Create an empty registry that ranks unrecognized roles per `policy`.
    pub const fn new(policy: UnrankedPolicy) -> Self {
        Self {
            store: AttendeeStore::new(),
            queue: AdmissionQueue::new(),
            policy,
        }
    }

    /// The configured ranking policy for unrecognized roles.
    pub const fn policy(&self) -> UnrankedPolicy {
        self.policy
    }

    /// Read access to the underlying store.
    pub const fn store(&self) -> &AttendeeStore {
        &self.store
    }

    /// Read access to the underlying queue.
    pub const fn queue(&self) -> &AdmissionQueue {
        &self.queue
    }

    // -----------------------------------------------------------------------
    // RSVP
    // -----------------------------------------------------------------------

    /// Record a new RSVP as a pending attendee and put it in line.
    ///
    /// # Errors
    ///
    /// [`RegistryError::MissingDetails`] if any field is empty.
    pub fn submit_rsvp(
        &mut self,
        name: &str,
        preference: &str,
        role: &str,
    ) -> Result<Attendee, RegistryError> {
        if name.is_empty() || preference.is_empty() || role.is_empty() {
            return Err(RegistryError::MissingDetails);
        }

        let attendee = Attendee::new(name, preference, role);
        self.queue.enqueue(AdmissionTicket::from(&attendee));
        self.store.add(attendee.clone());

        info!(name, role, queue_len = self.queue.len(), "RSVP recorded");
        Ok(attendee)
    }

    // -----------------------------------------------------------------------
    // Listings
    // -----------------------------------------------------------------------

    /// Every attendee ordered by preference.
    pub fn attendees_by_preference(&self) -> Vec<Attendee> {
        self.store
            .list_sorted_by_preference()
            .into_iter()
            .cloned()
            .collect()
    }

    /// Every attendee ordered by role priority, using the thread-local RNG
    /// for unrecognized roles.
    pub fn attendees_by_priority(&self) -> Vec<Attendee> {
        self.attendees_by_priority_with(&mut rand::rng())
    }

    /// Every attendee ordered by role priority, drawing random keys from
    /// `rng`.
    pub fn attendees_by_priority_with(&self, rng: &mut impl Rng) -> Vec<Attendee> {
        self.store
            .list_sorted_by_priority(self.policy, rng)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Queued attendees in arrival order, with their current state.
    ///
    /// Tickets are resolved through an id index built once per call, so the
    /// listing is linear in the size of the store plus the queue.
    pub fn rsvp_queue(&self) -> Vec<Attendee> {
        let by_id: HashMap<AttendeeId, &Attendee> =
            self.store.list().iter().map(|a| (a.id, a)).collect();

        self.queue
            .list()
            .filter_map(|ticket| by_id.get(&ticket.id).copied())
            .cloned()
            .collect()
    }

    // -----------------------------------------------------------------------
    // Admin
    // -----------------------------------------------------------------------

    /// Set the status of the first attendee named `name` from its wire name.
    ///
    /// The status is validated before the name is looked up.
    ///
    /// # Errors
    ///
    /// [`RegistryError::InvalidStatus`] unless `raw_status` is `Confirmed` or
    /// `Waitlisted`; [`RegistryError::NotFound`] if no attendee matches.
    pub fn update_status(
        &mut self,
        name: &str,
        raw_status: &str,
    ) -> Result<Attendee, RegistryError> {
        let status = AttendeeStatus::from_name(raw_status)
            .filter(|s| s.is_admin_assignable())
            .ok_or_else(|| RegistryError::InvalidStatus {
                value: raw_status.to_owned(),
            })?;

        let attendee = self.store.update_status(name, status)?.clone();
        info!(name, %status, "Attendee status updated");
        Ok(attendee)
    }

    /// Delete the first attendee named `name` and purge every queue ticket
    /// carrying that name.
    ///
    /// # Errors
    ///
    /// [`RegistryError::NotFound`] if no attendee matches. Nothing is
    /// changed in that case.
    pub fn remove(&mut self, name: &str) -> Result<Removal, RegistryError> {
        let attendee = self.store.remove(name)?;
        let tickets_purged = self.queue.remove_by_name(name);

        info!(name, tickets_purged, "Attendee removed");
        Ok(Removal {
            attendee,
            tickets_purged,
        })
    }

    /// Take the attendee at the head of the queue out of line.
    ///
    /// The attendee stays in the store. Returns `None` when the queue is
    /// empty. No endpoint calls this; it exists for embedding callers.
    pub fn next_in_line(&mut self) -> Option<Attendee> {
        let ticket = self.queue.dequeue()?;
        debug!(name = %ticket.name, "Dequeued admission ticket");
        self.store.get(ticket.id).cloned()
    }
}
