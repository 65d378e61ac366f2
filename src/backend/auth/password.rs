/**
 * Password Hashing
 *
 * bcrypt with a configurable work factor. Both hashing and verification are
 * CPU-bound, so they run on tokio's blocking pool.
 */

use thiserror::Error;

/// Password hashing failures
///
/// A wrong password is not an error: `verify` returns `Ok(false)`.
#[derive(Debug, Error)]
pub enum PasswordError {
    /// bcrypt rejected the input or the stored digest
    #[error("bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),

    /// The blocking task panicked or was cancelled
    #[error("password task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Stateless bcrypt hasher
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Salted one-way hash of `plaintext`
    pub async fn hash(&self, plaintext: &str) -> Result<String, PasswordError> {
        let plaintext = plaintext.to_owned();
        let cost = self.cost;
        let digest = tokio::task::spawn_blocking(move || bcrypt::hash(plaintext, cost)).await??;
        Ok(digest)
    }

    /// Check `plaintext` against a stored digest
    ///
    /// Returns `Ok(false)` on mismatch and an error only when the digest
    /// itself is unusable.
    pub async fn verify(&self, plaintext: &str, digest: &str) -> Result<bool, PasswordError> {
        let plaintext = plaintext.to_owned();
        let digest = digest.to_owned();
        let valid = tokio::task::spawn_blocking(move || bcrypt::verify(plaintext, &digest)).await??;
        Ok(valid)
    }
}
