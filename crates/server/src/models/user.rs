//! User domain types.
//!
//! Two distinct records exist per account: the [`Credential`] held by the
//! credential store for login, and the [`UserProfile`] held by the user
//! directory. They are peer stores keyed by the same email; neither owns
//! the other.

use chrono::{DateTime, NaiveDate, Utc};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use gatherly_core::{Email, PasswordDigest, UserId};

/// A stored login credential.
///
/// Created on registration, never mutated or deleted. The digest stays
/// internal to the credential store; API responses use
/// [`crate::routes::auth::AccountResponse`] which omits it.
#[derive(Debug, Clone)]
pub struct Credential {
    /// Unique user ID.
    pub id: UserId,
    /// Login email (unique, case-insensitive).
    pub email: Email,
    /// Password digest.
    pub password_digest: PasswordDigest,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Contact phone number.
    pub phone: String,
    /// Date of birth.
    pub date_of_birth: NaiveDate,
    /// Employer, if given.
    pub company: String,
    /// Job title, if given.
    pub job_title: String,
    /// When the credential was created.
    pub created_at: DateTime<Utc>,
}

/// Input for creating an account (credential + profile).
///
/// The plaintext password is wrapped in [`SecretString`] so it is redacted
/// from debug output and never cloned incidentally.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub email: Email,
    pub password: SecretString,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub date_of_birth: NaiveDate,
    pub company: String,
    pub job_title: String,
}

/// A user directory entry.
///
/// Independent of the credential record; fully replaceable via update and
/// deletable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique user ID (assigned by the directory).
    pub id: UserId,
    /// Contact email (unique, case-insensitive).
    pub email: Email,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Contact phone number.
    pub phone: String,
    /// Date of birth.
    pub date_of_birth: NaiveDate,
    /// Employer, if given.
    pub company: String,
    /// Job title, if given.
    pub job_title: String,
    /// Whether the user opted into notifications.
    pub receive_notifications: bool,
    /// When the profile was created.
    pub created_at: DateTime<Utc>,
}

impl UserProfile {
    /// Full display name.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Input for creating a directory entry; the directory assigns the ID and
/// creation timestamp.
#[derive(Debug, Clone, Deserialize)]
pub struct NewProfile {
    pub email: Email,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub date_of_birth: NaiveDate,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub job_title: String,
    #[serde(default = "default_receive_notifications")]
    pub receive_notifications: bool,
}

const fn default_receive_notifications() -> bool {
    true
}
