//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::perf::PerformanceMonitor;
use crate::stores::{
    AttendanceLedger, CredentialStore, EventStore, SessionManager, UserDirectory,
};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and owns every store. The
/// stores have no global state of their own: everything is constructed
/// here at startup and dropped with the process (in-memory state needs no
/// explicit teardown).
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    events: Arc<EventStore>,
    credentials: Arc<CredentialStore>,
    users: Arc<UserDirectory>,
    sessions: Arc<SessionManager>,
    attendance: Arc<AttendanceLedger>,
    perf: Arc<PerformanceMonitor>,
}

impl AppState {
    /// Create a new application state with empty stores.
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let events = Arc::new(EventStore::new());
        let attendance = Arc::new(AttendanceLedger::new(Arc::clone(&events)));
        let sessions = Arc::new(SessionManager::with_idle_timeout(
            config.session_idle_timeout(),
        ));

        Self {
            inner: Arc::new(AppStateInner {
                config,
                events,
                credentials: Arc::new(CredentialStore::new()),
                users: Arc::new(UserDirectory::new()),
                sessions,
                attendance,
                perf: Arc::new(PerformanceMonitor::new()),
            }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a handle to the event store.
    #[must_use]
    pub fn events(&self) -> &Arc<EventStore> {
        &self.inner.events
    }

    /// Get a handle to the credential store.
    #[must_use]
    pub fn credentials(&self) -> &Arc<CredentialStore> {
        &self.inner.credentials
    }

    /// Get a handle to the user directory.
    #[must_use]
    pub fn users(&self) -> &Arc<UserDirectory> {
        &self.inner.users
    }

    /// Get a handle to the session manager.
    #[must_use]
    pub fn sessions(&self) -> &Arc<SessionManager> {
        &self.inner.sessions
    }

    /// Get a handle to the attendance ledger.
    #[must_use]
    pub fn attendance(&self) -> &Arc<AttendanceLedger> {
        &self.inner.attendance
    }

    /// Get a handle to the performance monitor.
    #[must_use]
    pub fn perf(&self) -> &Arc<PerformanceMonitor> {
        &self.inner.perf
    }

    /// Spawn the background session sweep for this state's manager.
    pub fn start_session_sweeper(&self) -> tokio::task::JoinHandle<()> {
        crate::stores::sessions::spawn_sweeper(
            Arc::clone(&self.inner.sessions),
            self.inner.config.sweep_interval(),
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_state_is_cheaply_cloneable() {
        let state = AppState::new(ServerConfig::default());
        let clone = state.clone();
        // Both handles see the same stores.
        clone.events().clear_cache();
        assert_eq!(state.events().list_all().len(), 15);
    }
}
