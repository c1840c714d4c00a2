//! Authentication service.
//!
//! Provides account registration and password login over the credential
//! store.
//!
//! Passwords are stored as a single-round SHA-256 digest (see
//! [`PasswordDigest`]). That digest is deliberately weak and part of the
//! store's behavior contract; do not swap in a slow KDF here without
//! changing the contract and its tests.

mod error;

pub use error::AuthError;

use chrono::Utc;
use secrecy::ExposeSecret as _;

use gatherly_core::{PasswordDigest, UserId};

use crate::models::{Credential, NewAccount};
use crate::stores::{CredentialStore, StoreError};

/// Minimum password length.
const MIN_PASSWORD_LENGTH: usize = 6;
/// Maximum password length.
const MAX_PASSWORD_LENGTH: usize = 100;

/// Authentication service.
///
/// Borrows the credential store for the duration of one service call,
/// mirroring how request handlers construct it per request.
pub struct AuthService<'a> {
    credentials: &'a CredentialStore,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(credentials: &'a CredentialStore) -> Self {
        Self { credentials }
    }

    /// Register a new account.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::WeakPassword` if the password is outside the
    /// 6-100 character range, and `AuthError::DuplicateEmail` if the email
    /// is already registered (case-insensitive).
    pub fn register(&self, account: NewAccount) -> Result<Credential, AuthError> {
        let password = account.password.expose_secret();
        validate_password(password)?;

        let credential = Credential {
            id: UserId::generate(),
            email: account.email,
            password_digest: PasswordDigest::compute(password),
            first_name: account.first_name,
            last_name: account.last_name,
            phone: account.phone,
            date_of_birth: account.date_of_birth,
            company: account.company,
            job_title: account.job_title,
            created_at: Utc::now(),
        };

        self.credentials
            .insert(credential.clone())
            .map_err(|e| match e {
                StoreError::DuplicateEmail => AuthError::DuplicateEmail,
                // The credential store only rejects duplicates on insert.
                other => {
                    tracing::error!(%other, "unexpected credential store failure");
                    AuthError::DuplicateEmail
                }
            })?;

        Ok(credential)
    }

    /// Login with email and password.
    ///
    /// The lookup is case-insensitive; an unknown email and a wrong
    /// password are indistinguishable to the caller.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` for a malformed email and
    /// `AuthError::InvalidCredentials` otherwise.
    pub fn login(&self, email: &str, password: &str) -> Result<Credential, AuthError> {
        let email = gatherly_core::Email::parse(email)?;

        let credential = self
            .credentials
            .get_by_email(&email)
            .ok_or(AuthError::InvalidCredentials)?;

        if !credential.password_digest.verify(password) {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(credential)
    }

    /// Case-insensitive email existence check.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` for a malformed email.
    pub fn email_exists(&self, email: &str) -> Result<bool, AuthError> {
        let email = gatherly_core::Email::parse(email)?;
        Ok(self.credentials.email_exists(&email))
    }
}

/// Validate password meets length requirements.
fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }
    if password.len() > MAX_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "password must be at most {MAX_PASSWORD_LENGTH} characters"
        )));
    }
    Ok(())
}
