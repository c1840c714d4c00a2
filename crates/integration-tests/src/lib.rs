//! Integration tests for Gatherly.
//!
//! The stores are in-memory, so these tests drive the service core
//! directly through [`AppState`] rather than over HTTP; every scenario a
//! network client could produce is reachable through the same calls.
//!
//! # Test Categories
//!
//! - `scenario` - Cross-store user journeys (register, login, session,
//!   event registration, check-in)
//! - `concurrency` - Invariants under parallel callers (capacity,
//!   duplicate registration, single active session)

use chrono::NaiveDate;
use secrecy::SecretString;

use gatherly_core::Email;
use gatherly_server::config::ServerConfig;
use gatherly_server::models::NewAccount;
use gatherly_server::state::AppState;

/// Fresh application state with default configuration.
#[must_use]
pub fn test_state() -> AppState {
    AppState::new(ServerConfig::default())
}

/// A minimal valid account for the given email.
///
/// # Panics
///
/// Panics if `email` is not a structurally valid address.
#[must_use]
pub fn account(email: &str, password: &str) -> NewAccount {
    NewAccount {
        email: Email::parse(email).expect("test email must be valid"),
        password: SecretString::from(password),
        first_name: "Test".to_owned(),
        last_name: "Attendee".to_owned(),
        phone: "+1 555 0100".to_owned(),
        date_of_birth: NaiveDate::from_ymd_opt(1990, 6, 15).expect("valid date"),
        company: String::new(),
        job_title: String::new(),
    }
}
