/**
 * Password Hashing
 *
 * bcrypt hashing and verification for stored credentials. Hashing is salted
 * per call, so two hashes of the same password never compare equal; the
 * work factor is bcrypt's `DEFAULT_COST`.
 */

use bcrypt::{hash, verify, BcryptError, DEFAULT_COST};

/// Hash a plaintext password for storage
///
/// Every call salts independently, so the digest differs between calls even
/// for identical input. Must be called before a user record is persisted;
/// plaintext never reaches the database.
pub fn hash_password(plaintext: &str) -> Result<String, BcryptError> {
    hash(plaintext, DEFAULT_COST)
}

/// Check a plaintext password against a stored digest
///
/// Returns `Ok(false)` on a mismatch. An `Err` means the digest itself could
/// not be parsed as a bcrypt string, which indicates store corruption rather
/// than bad credentials.
pub fn verify_password(plaintext: &str, digest: &str) -> Result<bool, BcryptError> {
    verify(plaintext, digest)
}
