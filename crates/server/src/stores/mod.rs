//! In-memory stores for the service core.
//!
//! Each store exclusively owns one entity collection behind a coarse
//! per-store lock. Compound invariant checks (duplicate email,
//! check-capacity-then-increment, single-active-session) happen entirely
//! inside one lock acquisition; no lock is ever held across an await
//! point. Cross-store references are by ID only — there is no cascading
//! delete.
//!
//! ## Stores
//!
//! - [`events::EventStore`] - seeded event catalog + registration counts
//! - [`credentials::CredentialStore`] - login credentials by email
//! - [`users::UserDirectory`] - user profiles
//! - [`sessions::SessionManager`] - login sessions + idle sweep
//! - [`attendance::AttendanceLedger`] - per-user-per-event attendance

pub mod attendance;
pub mod credentials;
pub mod events;
pub mod sessions;
pub mod users;

pub use attendance::AttendanceLedger;
pub use credentials::CredentialStore;
pub use events::EventStore;
pub use sessions::SessionManager;
pub use users::UserDirectory;

use thiserror::Error;

/// Business-rule failures surfaced by the stores.
///
/// These are expected outcomes, not faults: callers branch on them and the
/// HTTP layer maps them to client status codes. Stores never panic and
/// never raise anything outside this taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The referenced entity does not exist.
    #[error("not found")]
    NotFound,

    /// An entry with this email already exists (case-insensitive).
    #[error("email already registered")]
    DuplicateEmail,

    /// The event has reached capacity.
    #[error("event is full")]
    EventFull,

    /// A registration already exists for this (user, event) pair.
    #[error("already registered for this event")]
    AlreadyRegistered,

    /// The record is not in a state that allows this transition.
    #[error("invalid status transition")]
    InvalidStateTransition,
}
