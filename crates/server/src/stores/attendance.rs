//! Attendance ledger.
//!
//! Tracks per-user-per-event registration state and aggregates stats.
//! The ledger references events and users by ID only; it consults the
//! event store for existence and capacity, and asks it to increment the
//! registration count after recording a registration.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use parking_lot::RwLock;
use tokio::sync::broadcast;

use gatherly_core::{EventId, RegistrationId, RegistrationStatus, UserId};

use super::StoreError;
use super::events::EventStore;
use crate::models::{AttendanceStats, EventRegistration, RegistrationChanged};

/// Broadcast buffer size for registration notifications.
const NOTIFICATION_BUFFER: usize = 64;

/// Thread-safe attendance ledger.
pub struct AttendanceLedger {
    records: RwLock<HashMap<(UserId, EventId), EventRegistration>>,
    events: Arc<EventStore>,
    notifications: broadcast::Sender<RegistrationChanged>,
}

impl AttendanceLedger {
    /// Create an empty ledger backed by the given event store.
    #[must_use]
    pub fn new(events: Arc<EventStore>) -> Self {
        let (notifications, _) = broadcast::channel(NOTIFICATION_BUFFER);
        Self {
            records: RwLock::new(HashMap::new()),
            events,
            notifications,
        }
    }

    /// Subscribe to registration-changed notifications.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<RegistrationChanged> {
        self.notifications.subscribe()
    }

    /// Register a user for an event.
    ///
    /// Checks, in order: no existing record for the pair, event exists,
    /// event not full. On success the record is created with status
    /// `Registered` and the event store is asked to increment its count.
    ///
    /// The record insert and the count increment are two steps with no
    /// rollback: the capacity check runs first, and if the event fills in
    /// the window between check and increment the ledger keeps the record
    /// and logs the discrepancy. This best-effort gap is accepted by
    /// design; see DESIGN.md.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::AlreadyRegistered`], [`StoreError::NotFound`]
    /// (unknown event), or [`StoreError::EventFull`].
    pub fn register_for_event(
        &self,
        user_id: UserId,
        event_id: EventId,
    ) -> Result<EventRegistration, StoreError> {
        if self.records.read().contains_key(&(user_id, event_id)) {
            return Err(StoreError::AlreadyRegistered);
        }

        let event = self.events.get_by_id(event_id).ok_or(StoreError::NotFound)?;
        if event.is_full() {
            return Err(StoreError::EventFull);
        }

        let registration = EventRegistration {
            id: RegistrationId::generate(),
            user_id,
            event_id,
            status: RegistrationStatus::Registered,
            registered_at: Utc::now(),
            notes: String::new(),
        };

        {
            let mut records = self.records.write();
            if records.contains_key(&(user_id, event_id)) {
                return Err(StoreError::AlreadyRegistered);
            }
            records.insert((user_id, event_id), registration.clone());
        }

        if let Err(err) = self.events.increment_registration(event_id) {
            tracing::warn!(
                %user_id,
                %event_id,
                %err,
                "attendance record created but event count increment failed"
            );
        }

        let _ = self
            .notifications
            .send(RegistrationChanged { user_id, event_id });
        Ok(registration)
    }

    /// Transition a registration from `Registered` to `CheckedIn`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no record exists for the pair,
    /// or [`StoreError::InvalidStateTransition`] if the record has left
    /// the `Registered` state.
    pub fn check_in(&self, user_id: UserId, event_id: EventId) -> Result<(), StoreError> {
        self.transition(user_id, event_id, RegistrationStatus::CheckedIn)
    }

    /// Transition a registration from `Registered` to `NoShow`.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`AttendanceLedger::check_in`].
    pub fn mark_no_show(&self, user_id: UserId, event_id: EventId) -> Result<(), StoreError> {
        self.transition(user_id, event_id, RegistrationStatus::NoShow)
    }

    fn transition(
        &self,
        user_id: UserId,
        event_id: EventId,
        next: RegistrationStatus,
    ) -> Result<(), StoreError> {
        let mut records = self.records.write();
        let record = records
            .get_mut(&(user_id, event_id))
            .ok_or(StoreError::NotFound)?;
        if !record.status.can_transition_to(next) {
            return Err(StoreError::InvalidStateTransition);
        }
        record.status = next;
        Ok(())
    }

    /// Look up the record for a (user, event) pair.
    #[must_use]
    pub fn get_registration(
        &self,
        user_id: UserId,
        event_id: EventId,
    ) -> Option<EventRegistration> {
        self.records.read().get(&(user_id, event_id)).cloned()
    }

    /// All of a user's registrations, newest first.
    #[must_use]
    pub fn get_user_registrations(&self, user_id: UserId) -> Vec<EventRegistration> {
        let mut registrations: Vec<_> = self
            .records
            .read()
            .values()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        registrations.sort_by(|a, b| b.registered_at.cmp(&a.registered_at));
        registrations
    }

    /// All of an event's registrations, oldest first.
    #[must_use]
    pub fn get_event_registrations(&self, event_id: EventId) -> Vec<EventRegistration> {
        let mut registrations: Vec<_> = self
            .records
            .read()
            .values()
            .filter(|r| r.event_id == event_id)
            .cloned()
            .collect();
        registrations.sort_by(|a, b| a.registered_at.cmp(&b.registered_at));
        registrations
    }

    /// Number of checked-in attendees for an event.
    #[must_use]
    pub fn get_event_attendance_count(&self, event_id: EventId) -> usize {
        self.records
            .read()
            .values()
            .filter(|r| r.event_id == event_id && r.status == RegistrationStatus::CheckedIn)
            .count()
    }

    /// Snapshot of every record, in no particular order.
    #[must_use]
    pub fn list_all(&self) -> Vec<EventRegistration> {
        self.records.read().values().cloned().collect()
    }

    /// Aggregate counters across all records.
    #[must_use]
    pub fn get_stats(&self) -> AttendanceStats {
        let records = self.records.read();
        let mut stats = AttendanceStats {
            total: records.len(),
            ..AttendanceStats::default()
        };
        for record in records.values() {
            match record.status {
                RegistrationStatus::CheckedIn => stats.checked_in += 1,
                RegistrationStatus::NoShow => stats.no_shows += 1,
                RegistrationStatus::Registered => stats.pending += 1,
            }
        }
        stats
    }
}
