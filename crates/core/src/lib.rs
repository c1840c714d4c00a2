//! Gatherly Core - Shared types library.
//!
//! This crate provides common types used across all Gatherly components:
//! - `server` - Event discovery and registration service
//! - `integration-tests` - Cross-store scenario tests
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no locking, no HTTP.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, prices,
//!   password digests, and registration statuses, plus the `Event` record

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
