//! Password hashing and verification.
//!
//! The one-way collaborator the account directory delegates to. Hashes are
//! salted scrypt strings in PHC format; there is no decode path.

use scrypt::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Scrypt,
};

use crate::error::{DirectoryError, Result};

/// Marker prefix for hashes that can never verify.
///
/// Accounts created without a password still carry a non-empty
/// `password_hash`; the marker keeps it distinguishable from every PHC-format
/// string so verification always fails.
const UNUSABLE_PREFIX: char = '!';

/// Hash a plaintext password using scrypt.
///
/// `None` or an empty plaintext produces an unusable hash: the account record
/// exists but cannot authenticate by password.
pub fn make_password(plain: Option<&str>) -> Result<String> {
    match plain {
        Some(plain) if !plain.is_empty() => {
            let salt = SaltString::generate(&mut OsRng);
            let hash = Scrypt
                .hash_password(plain.as_bytes(), &salt)
                .map_err(|e| DirectoryError::PasswordHash(e.to_string()))?
                .to_string();
            Ok(hash)
        }
        _ => {
            // Random filler so two unusable hashes never compare equal.
            let filler = SaltString::generate(&mut OsRng);
            Ok(format!("{}{}", UNUSABLE_PREFIX, filler.as_str()))
        }
    }
}

/// Verify a plaintext password against a stored hash.
///
/// Unusable or malformed hashes verify as false rather than erroring.
pub fn verify_password(plain: &str, hash: &str) -> bool {
    if !is_usable(hash) {
        return false;
    }
    let parsed_hash = match PasswordHash::new(hash) {
        Ok(h) => h,
        Err(_) => return false,
    };
    Scrypt
        .verify_password(plain.as_bytes(), &parsed_hash)
        .is_ok()
}

/// Whether the stored hash can ever verify a password.
pub fn is_usable(hash: &str) -> bool {
    !hash.is_empty() && !hash.starts_with(UNUSABLE_PREFIX)
}
