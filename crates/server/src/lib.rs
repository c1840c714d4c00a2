//! Gatherly server library.
//!
//! This crate provides the service core as a library, allowing it to be
//! tested and reused; the binary in `main.rs` wires it to an HTTP listener.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod models;
pub mod perf;
pub mod routes;
pub mod services;
pub mod state;
pub mod stores;
