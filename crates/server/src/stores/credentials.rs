//! Credential store.
//!
//! Holds login credentials keyed by normalized (lowercased) email, so all
//! lookups are case-insensitive. Credentials are created on registration
//! and never mutated or deleted; there is deliberately no
//! remove-credential operation.

use std::collections::HashMap;

use parking_lot::RwLock;

use gatherly_core::Email;

use super::StoreError;
use crate::models::Credential;

/// Thread-safe credential store.
#[derive(Default)]
pub struct CredentialStore {
    by_email: RwLock<HashMap<String, Credential>>,
}

impl CredentialStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a credential if the email is not already taken.
    ///
    /// The duplicate check and the insert happen under one write-lock
    /// acquisition, so two concurrent registrations for the same email
    /// cannot both succeed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateEmail`] on a case-insensitive
    /// collision.
    pub fn insert(&self, credential: Credential) -> Result<(), StoreError> {
        let key = credential.email.normalized();
        let mut by_email = self.by_email.write();
        if by_email.contains_key(&key) {
            return Err(StoreError::DuplicateEmail);
        }
        by_email.insert(key, credential);
        Ok(())
    }

    /// Look up a credential by email (case-insensitive).
    #[must_use]
    pub fn get_by_email(&self, email: &Email) -> Option<Credential> {
        self.by_email.read().get(&email.normalized()).cloned()
    }

    /// Case-insensitive existence check.
    #[must_use]
    pub fn email_exists(&self, email: &Email) -> bool {
        self.by_email.read().contains_key(&email.normalized())
    }

    /// Number of stored credentials.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_email.read().len()
    }

    /// Whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_email.read().is_empty()
    }
}
