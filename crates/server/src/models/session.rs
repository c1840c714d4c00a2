//! Session domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use gatherly_core::{Email, SessionId};

/// A login session.
///
/// At most one session per email is active at a time; creating a new
/// session ends any prior active one. The user is keyed by email here —
/// the session manager does not consult the credential store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Unique session ID.
    pub id: SessionId,
    /// Owning user's email.
    pub email: Email,
    /// Display name captured at login.
    pub full_name: String,
    /// Whether the session is still active.
    pub is_active: bool,
    /// When the session was created.
    pub login_time: DateTime<Utc>,
    /// Last time the session saw activity.
    pub last_activity: DateTime<Utc>,
}

/// Notification published by the session manager.
///
/// Delivery is synchronous, in-order, best-effort: a lagging or dropped
/// subscriber never affects the publisher.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// A session was created (after ending any prior active one).
    Created(Session),
    /// A session was ended, by logout or by the idle sweep.
    Ended(SessionId),
}
