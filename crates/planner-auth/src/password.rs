//! Password hashing with argon2.

use argon2::Config;
use rand::Rng;

use crate::error::Result;

/// Hashes a password with a fresh random 16-byte salt.
///
/// The returned string is the self-describing argon2 encoded form, so no
/// separate salt storage is needed.
pub fn hash_password(password: &str) -> Result<String> {
    let salt: [u8; 16] = rand::thread_rng().gen();
    let hash = argon2::hash_encoded(password.as_bytes(), &salt, &Config::default())?;
    Ok(hash)
}

/// Verifies a password against an encoded hash.
///
/// A malformed hash verifies as false rather than erroring; callers
/// treat it the same as a wrong password.
pub fn verify_password(hash: &str, password: &str) -> bool {
    argon2::verify_encoded(hash, password.as_bytes()).unwrap_or(false)
}
