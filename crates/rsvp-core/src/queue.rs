//! First-come-first-served admission queue.
//!
//! The queue does not own attendee records. Each entry is an
//! [`AdmissionTicket`] pointing at a record in the
//! [`AttendeeStore`](crate::store::AttendeeStore) by id, so status changes
//! made through the store are visible when the queue is listed.

use std::collections::VecDeque;

use rsvp_types::{Attendee, AttendeeId};
use serde::Serialize;

/// A place in line for one attendee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdmissionTicket {
    /// The attendee this ticket admits.
    pub id: AttendeeId,
    /// The attendee's name at RSVP time. Names never change afterwards.
    pub name: String,
}

impl From<&Attendee> for AdmissionTicket {
    fn from(attendee: &Attendee) -> Self {
        Self {
            id: attendee.id,
            name: attendee.name.clone(),
        }
    }
}

/// Strict FIFO of [`AdmissionTicket`]s.
#[derive(Debug, Clone, Default)]
pub struct AdmissionQueue {
    tickets: VecDeque<AdmissionTicket>,
}

impl AdmissionQueue {
    /// Create an empty queue.
    pub const fn new() -> Self {
        Self {
            tickets: VecDeque::new(),
        }
    }

    /// Append `ticket` to the tail.
    pub fn enqueue(&mut self, ticket: AdmissionTicket) {
        self.tickets.push_back(ticket);
    }

    /// Remove and return the head, or `None` when the queue is empty.
    pub fn dequeue(&mut self) -> Option<AdmissionTicket> {
        self.tickets.pop_front()
    }

    /// Whether the queue holds no tickets.
    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    /// Number of tickets in the queue.
    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    /// Iterate over tickets head first without removing anything.
    pub fn list(&self) -> impl Iterator<Item = &AdmissionTicket> {
        self.tickets.iter()
    }

    /// Remove every ticket whose name equals `name`.
    ///
    /// Returns how many tickets were removed.
    pub fn remove_by_name(&mut self, name: &str) -> usize {
        let before = self.tickets.len();
        self.tickets.retain(|t| t.name != name);
        before.saturating_sub(self.tickets.len())
    }
}
