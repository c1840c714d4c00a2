//! Attendance domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use gatherly_core::{EventId, RegistrationId, RegistrationStatus, UserId};

/// A per-user, per-event attendance record.
///
/// At most one exists per (user, event) pair. Status moves forward only;
/// records are never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRegistration {
    /// Unique registration ID.
    pub id: RegistrationId,
    /// Registering user.
    pub user_id: UserId,
    /// Target event.
    pub event_id: EventId,
    /// Current attendance status.
    pub status: RegistrationStatus,
    /// When the registration was created.
    pub registered_at: DateTime<Utc>,
    /// Free-form organizer notes.
    pub notes: String,
}

/// Notification published when a registration is created.
#[derive(Debug, Clone, Copy)]
pub struct RegistrationChanged {
    pub user_id: UserId,
    pub event_id: EventId,
}

/// Aggregate attendance counters across all registrations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceStats {
    /// Total registrations ever created.
    pub total: usize,
    /// Records in `CheckedIn` state.
    pub checked_in: usize,
    /// Records in `NoShow` state.
    pub no_shows: usize,
    /// Records still in `Registered` state.
    pub pending: usize,
}
