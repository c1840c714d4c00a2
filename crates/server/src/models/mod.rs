//! Domain models for the service core.
//!
//! These are the aggregate records owned by the stores; the primitive
//! value types (IDs, email, price, digest, status) live in `gatherly-core`.

pub mod registration;
pub mod session;
pub mod user;

pub use registration::{AttendanceStats, EventRegistration, RegistrationChanged};
pub use session::{Session, SessionEvent};
pub use user::{Credential, NewAccount, NewProfile, UserProfile};
