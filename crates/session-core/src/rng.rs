//! Secure random byte source

use rand::rngs::OsRng;
use rand::TryRngCore;

use crate::error::SessionError;

/// Source of cryptographically secure random bytes.
///
/// Injected into the identifier generator so tests can substitute a
/// deterministic or failing source.
#[cfg_attr(test, mockall::automock)]
pub trait RandomByteSource: Send + Sync {
    /// Fill `buf` completely, or fail without partial output.
    fn read_exactly(&self, buf: &mut [u8]) -> Result<(), SessionError>;
}

/// Operating-system CSPRNG. Safe for concurrent use across requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl RandomByteSource for OsRandom {
    fn read_exactly(&self, buf: &mut [u8]) -> Result<(), SessionError> {
        OsRng
            .try_fill_bytes(buf)
            .map_err(|e| SessionError::RandomSource(e.to_string()))
    }
}
