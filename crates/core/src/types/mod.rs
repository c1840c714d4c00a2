//! Core types for Gatherly.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod digest;
pub mod email;
pub mod event;
pub mod id;
pub mod price;
pub mod status;

pub use digest::PasswordDigest;
pub use email::{Email, EmailError};
pub use event::Event;
pub use id::*;
pub use price::{CurrencyCode, Price};
pub use status::RegistrationStatus;
