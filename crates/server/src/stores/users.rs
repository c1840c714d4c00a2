//! User profile directory.
//!
//! Stores full registration profiles, independent of the credential
//! store. Profiles are keyed by ID with a secondary unique index on
//! normalized email. Unlike credentials, profiles can be replaced and
//! deleted.

use std::collections::HashMap;

use chrono::Utc;
use parking_lot::RwLock;

use gatherly_core::{Email, UserId};

use super::StoreError;
use crate::models::{NewProfile, UserProfile};

#[derive(Default)]
struct DirectoryTable {
    by_id: HashMap<UserId, UserProfile>,
    id_by_email: HashMap<String, UserId>,
}

/// Thread-safe user profile directory.
#[derive(Default)]
pub struct UserDirectory {
    table: RwLock<DirectoryTable>,
}

impl UserDirectory {
    /// Create an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new profile, assigning a fresh ID and creation time.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateEmail`] if the email is already
    /// present (case-insensitive).
    pub fn register(&self, new: NewProfile) -> Result<UserProfile, StoreError> {
        let key = new.email.normalized();
        let mut table = self.table.write();
        if table.id_by_email.contains_key(&key) {
            return Err(StoreError::DuplicateEmail);
        }

        let profile = UserProfile {
            id: UserId::generate(),
            email: new.email,
            first_name: new.first_name,
            last_name: new.last_name,
            phone: new.phone,
            date_of_birth: new.date_of_birth,
            company: new.company,
            job_title: new.job_title,
            receive_notifications: new.receive_notifications,
            created_at: Utc::now(),
        };
        table.id_by_email.insert(key, profile.id);
        table.by_id.insert(profile.id, profile.clone());
        Ok(profile)
    }

    /// Look up a profile by email (case-insensitive).
    #[must_use]
    pub fn get_by_email(&self, email: &Email) -> Option<UserProfile> {
        let table = self.table.read();
        let id = table.id_by_email.get(&email.normalized())?;
        table.by_id.get(id).cloned()
    }

    /// Look up a profile by ID.
    #[must_use]
    pub fn get_by_id(&self, id: UserId) -> Option<UserProfile> {
        self.table.read().by_id.get(&id).cloned()
    }

    /// Snapshot of every profile, in no particular order.
    #[must_use]
    pub fn list_all(&self) -> Vec<UserProfile> {
        self.table.read().by_id.values().cloned().collect()
    }

    /// Replace a profile wholesale, matched by ID.
    ///
    /// The email index follows the replacement, so an update may change
    /// the profile's email.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no profile has this ID, and
    /// [`StoreError::DuplicateEmail`] if the new email belongs to a
    /// different profile.
    pub fn update(&self, profile: UserProfile) -> Result<(), StoreError> {
        let mut table = self.table.write();
        let existing = table.by_id.get(&profile.id).ok_or(StoreError::NotFound)?;

        let old_key = existing.email.normalized();
        let new_key = profile.email.normalized();
        if old_key != new_key {
            if table.id_by_email.contains_key(&new_key) {
                return Err(StoreError::DuplicateEmail);
            }
            table.id_by_email.remove(&old_key);
            table.id_by_email.insert(new_key, profile.id);
        }
        table.by_id.insert(profile.id, profile);
        Ok(())
    }

    /// Remove a profile.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no profile has this ID.
    pub fn delete(&self, id: UserId) -> Result<(), StoreError> {
        let mut table = self.table.write();
        let profile = table.by_id.remove(&id).ok_or(StoreError::NotFound)?;
        table.id_by_email.remove(&profile.email.normalized());
        Ok(())
    }

    /// Case-insensitive existence check.
    #[must_use]
    pub fn email_exists(&self, email: &Email) -> bool {
        self.table
            .read()
            .id_by_email
            .contains_key(&email.normalized())
    }
}
