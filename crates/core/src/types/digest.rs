//! Password digest type.
//!
//! A single-round SHA-256 digest over the UTF-8 bytes of the password,
//! base64-encoded for storage. Verification recomputes the digest and
//! compares byte-for-byte.
//!
//! This is NOT a salted, slow password hash and is not suitable for
//! production credential storage; a real deployment must substitute a
//! memory-hard KDF (argon2 or similar). The single-round digest is part of
//! the store's behavior contract and is asserted by tests, so do not
//! strengthen it here without changing those contracts.

use core::fmt;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use sha2::{Digest as _, Sha256};

/// A stored password digest.
///
/// The plaintext password never leaves [`PasswordDigest::compute`]; only the
/// base64-encoded digest is kept. The type deliberately does not implement
/// `Serialize`, and `Display` redacts, so the digest cannot leak into API
/// responses or logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordDigest(String);

impl PasswordDigest {
    /// Compute the digest of a plaintext password.
    #[must_use]
    pub fn compute(password: &str) -> Self {
        let digest = Sha256::digest(password.as_bytes());
        Self(BASE64.encode(digest))
    }

    /// Verify a plaintext password against this digest.
    ///
    /// Recomputes the digest and compares the encoded forms byte-for-byte.
    #[must_use]
    pub fn verify(&self, password: &str) -> bool {
        Self::compute(password).0 == self.0
    }

    /// The base64-encoded digest string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Redact the digest in Debug-adjacent contexts that format the container.
impl fmt::Display for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[digest]")
    }
}
