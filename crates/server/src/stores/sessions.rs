//! Session manager.
//!
//! Tracks login sessions with a single-active-session-per-email
//! invariant, publishes created/ended notifications on a broadcast
//! channel, and expires idle sessions on a periodic background sweep.
//!
//! The "current session" pointer is process-wide: it tracks the most
//! recently created active session. That is only meaningful for a
//! single-client deployment; multi-client callers must address sessions
//! by ID.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Duration, Utc};
use parking_lot::RwLock;
use tokio::sync::broadcast;

use gatherly_core::{Email, SessionId};

use super::StoreError;
use crate::models::{Session, SessionEvent};

/// Broadcast buffer size; slow subscribers lose oldest notifications
/// rather than blocking the publisher.
const NOTIFICATION_BUFFER: usize = 64;

/// Default idle timeout before the sweep ends a session, in hours.
pub const DEFAULT_IDLE_TIMEOUT_HOURS: i64 = 24;

#[derive(Default)]
struct SessionTable {
    sessions: HashMap<SessionId, Session>,
    /// Most recently created active session, if any.
    current: Option<SessionId>,
}

/// Thread-safe session manager.
pub struct SessionManager {
    table: RwLock<SessionTable>,
    idle_timeout: Duration,
    notifications: broadcast::Sender<SessionEvent>,
}

impl SessionManager {
    /// Create a manager with the default 24h idle timeout.
    #[must_use]
    pub fn new() -> Self {
        Self::with_idle_timeout(Duration::hours(DEFAULT_IDLE_TIMEOUT_HOURS))
    }

    /// Create a manager with an explicit idle timeout.
    #[must_use]
    pub fn with_idle_timeout(idle_timeout: Duration) -> Self {
        let (notifications, _) = broadcast::channel(NOTIFICATION_BUFFER);
        Self {
            table: RwLock::new(SessionTable::default()),
            idle_timeout,
            notifications,
        }
    }

    /// Subscribe to session created/ended notifications.
    ///
    /// Delivery is in-order and best-effort; dropping the receiver (or
    /// falling behind the buffer) never affects session operations.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.notifications.subscribe()
    }

    /// Create a session for this email, ending any prior active one.
    ///
    /// The end-prior + insert + current-pointer update happens under one
    /// write-lock acquisition, so two racing logins for the same email
    /// still leave exactly one active session.
    pub fn create_session(&self, email: Email, full_name: &str) -> Session {
        let now = Utc::now();
        let session = Session {
            id: SessionId::generate(),
            email,
            full_name: full_name.to_owned(),
            is_active: true,
            login_time: now,
            last_activity: now,
        };

        let ended = {
            let mut table = self.table.write();
            let prior = table
                .sessions
                .values_mut()
                .find(|s| s.is_active && s.email.matches(&session.email));
            let ended = prior.map(|s| {
                s.is_active = false;
                s.id
            });
            table.sessions.insert(session.id, session.clone());
            table.current = Some(session.id);
            ended
        };

        if let Some(id) = ended {
            let _ = self.notifications.send(SessionEvent::Ended(id));
        }
        let _ = self
            .notifications
            .send(SessionEvent::Created(session.clone()));
        session
    }

    /// Look up a session; inactive sessions read as absent.
    #[must_use]
    pub fn get_session(&self, id: SessionId) -> Option<Session> {
        self.table
            .read()
            .sessions
            .get(&id)
            .filter(|s| s.is_active)
            .cloned()
    }

    /// The most recently created session, if it is still active.
    #[must_use]
    pub fn current_session(&self) -> Option<Session> {
        let table = self.table.read();
        let id = table.current?;
        table.sessions.get(&id).filter(|s| s.is_active).cloned()
    }

    /// Update a session's last-activity time to now.
    ///
    /// Returns `false` (without error) if the session is absent or
    /// inactive.
    pub fn touch_activity(&self, id: SessionId) -> bool {
        let mut table = self.table.write();
        match table.sessions.get_mut(&id) {
            Some(session) if session.is_active => {
                session.last_activity = Utc::now();
                true
            }
            _ => false,
        }
    }

    /// End a session and notify subscribers.
    ///
    /// Ending an already-ended session still succeeds (and re-publishes)
    /// as long as the ID exists.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the ID was never issued.
    pub fn end_session(&self, id: SessionId) -> Result<(), StoreError> {
        {
            let mut table = self.table.write();
            let session = table.sessions.get_mut(&id).ok_or(StoreError::NotFound)?;
            session.is_active = false;
            if table.current == Some(id) {
                table.current = None;
            }
        }
        let _ = self.notifications.send(SessionEvent::Ended(id));
        Ok(())
    }

    /// Whether a session exists and is active.
    #[must_use]
    pub fn is_active(&self, id: SessionId) -> bool {
        self.table
            .read()
            .sessions
            .get(&id)
            .is_some_and(|s| s.is_active)
    }

    /// Snapshot of all active sessions.
    #[must_use]
    pub fn list_active(&self) -> Vec<Session> {
        self.table
            .read()
            .sessions
            .values()
            .filter(|s| s.is_active)
            .cloned()
            .collect()
    }

    /// End every session idle for longer than the configured timeout.
    ///
    /// Expired sessions go through [`SessionManager::end_session`] so
    /// subscribers see the same notification regardless of how a session
    /// ended. Returns the number of sessions swept.
    pub fn sweep_expired(&self) -> usize {
        let cutoff = Utc::now() - self.idle_timeout;
        let expired: Vec<SessionId> = {
            let table = self.table.read();
            table
                .sessions
                .values()
                .filter(|s| s.last_activity < cutoff)
                .map(|s| s.id)
                .collect()
        };

        let mut swept = 0;
        for id in expired {
            if self.end_session(id).is_ok() {
                swept += 1;
            }
        }
        swept
    }

    /// Overwrite a session's last-activity time, for expiry tests.
    #[cfg(test)]
    pub(crate) fn backdate_activity(&self, id: SessionId, when: chrono::DateTime<Utc>) {
        if let Some(session) = self.table.write().sessions.get_mut(&id) {
            session.last_activity = when;
        }
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the periodic idle sweep until the manager is dropped.
///
/// The sweep runs on its own task, decoupled from request paths; it uses
/// the same store primitives as foreground callers and never blocks them
/// beyond ordinary lock contention. Nothing in a sweep pass can fail, so
/// there is nothing to propagate; the pass is logged and the loop goes
/// back to sleep.
pub fn spawn_sweeper(
    manager: Arc<SessionManager>,
    interval: std::time::Duration,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        // The first tick fires immediately; skip it so a fresh process
        // doesn't sweep before anyone has logged in.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let swept = manager.sweep_expired();
            if swept > 0 {
                tracing::info!(swept, "expired idle sessions");
            }
        }
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn email(s: &str) -> Email {
        Email::parse(s).unwrap()
    }

    #[test]
    fn test_create_and_get() {
        let manager = SessionManager::new();
        let session = manager.create_session(email("ada@example.com"), "Ada Lovelace");
        assert!(session.is_active);

        let fetched = manager.get_session(session.id).unwrap();
        assert_eq!(fetched.full_name, "Ada Lovelace");
    }

    #[test]
    fn test_single_active_session_per_email() {
        let manager = SessionManager::new();
        let first = manager.create_session(email("ada@example.com"), "Ada");
        let second = manager.create_session(email("ADA@example.com"), "Ada");

        assert!(!manager.is_active(first.id));
        assert!(manager.is_active(second.id));
        let active: Vec<_> = manager
            .list_active()
            .into_iter()
            .filter(|s| s.email.matches(&email("ada@example.com")))
            .collect();
        assert_eq!(active.len(), 1);
    }

    #[test]
    fn test_create_publishes_ended_then_created() {
        let manager = SessionManager::new();
        let first = manager.create_session(email("ada@example.com"), "Ada");
        let mut rx = manager.subscribe();
        let second = manager.create_session(email("ada@example.com"), "Ada");

        match rx.try_recv().unwrap() {
            SessionEvent::Ended(id) => assert_eq!(id, first.id),
            SessionEvent::Created(_) => panic!("expected Ended first"),
        }
        match rx.try_recv().unwrap() {
            SessionEvent::Created(s) => assert_eq!(s.id, second.id),
            SessionEvent::Ended(_) => panic!("expected Created second"),
        }
    }

    #[test]
    fn test_current_session_tracks_latest() {
        let manager = SessionManager::new();
        assert!(manager.current_session().is_none());

        let a = manager.create_session(email("a@example.com"), "A");
        assert_eq!(manager.current_session().unwrap().id, a.id);

        let b = manager.create_session(email("b@example.com"), "B");
        assert_eq!(manager.current_session().unwrap().id, b.id);

        manager.end_session(b.id).unwrap();
        assert!(manager.current_session().is_none());
        // Session A is still active, just no longer "current".
        assert!(manager.is_active(a.id));
    }

    #[test]
    fn test_touch_activity() {
        let manager = SessionManager::new();
        let session = manager.create_session(email("ada@example.com"), "Ada");

        manager.backdate_activity(session.id, Utc::now() - Duration::hours(1));
        assert!(manager.touch_activity(session.id));
        let fetched = manager.get_session(session.id).unwrap();
        assert!(Utc::now() - fetched.last_activity < Duration::minutes(1));

        manager.end_session(session.id).unwrap();
        assert!(!manager.touch_activity(session.id));
    }

    #[test]
    fn test_end_session_is_idempotent_for_known_ids() {
        let manager = SessionManager::new();
        let session = manager.create_session(email("ada@example.com"), "Ada");

        manager.end_session(session.id).unwrap();
        manager.end_session(session.id).unwrap();
        assert_eq!(
            manager.end_session(SessionId::generate()),
            Err(StoreError::NotFound)
        );
    }

    #[test]
    fn test_ended_session_reads_as_absent() {
        let manager = SessionManager::new();
        let session = manager.create_session(email("ada@example.com"), "Ada");
        manager.end_session(session.id).unwrap();
        assert!(manager.get_session(session.id).is_none());
    }

    #[test]
    fn test_sweep_expires_only_idle_sessions() {
        let manager = SessionManager::new();
        let stale = manager.create_session(email("stale@example.com"), "Stale");
        let fresh = manager.create_session(email("fresh@example.com"), "Fresh");

        manager.backdate_activity(stale.id, Utc::now() - Duration::hours(25));
        manager.backdate_activity(fresh.id, Utc::now() - Duration::hours(23));

        assert_eq!(manager.sweep_expired(), 1);
        assert!(!manager.is_active(stale.id));
        assert!(manager.is_active(fresh.id));
    }

    #[test]
    fn test_sweep_publishes_through_end_session() {
        let manager = SessionManager::new();
        let stale = manager.create_session(email("stale@example.com"), "Stale");
        manager.backdate_activity(stale.id, Utc::now() - Duration::hours(30));

        let mut rx = manager.subscribe();
        manager.sweep_expired();
        match rx.try_recv().unwrap() {
            SessionEvent::Ended(id) => assert_eq!(id, stale.id),
            SessionEvent::Created(_) => panic!("expected Ended"),
        }
    }

    #[tokio::test]
    async fn test_sweeper_task_runs() {
        let manager = Arc::new(SessionManager::new());
        let stale = manager.create_session(email("stale@example.com"), "Stale");
        manager.backdate_activity(stale.id, Utc::now() - Duration::hours(25));

        let handle = spawn_sweeper(Arc::clone(&manager), std::time::Duration::from_millis(10));
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        handle.abort();

        assert!(!manager.is_active(stale.id));
    }
}
