//! Application services composed over the stores.

pub mod auth;
