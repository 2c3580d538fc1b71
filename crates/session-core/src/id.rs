//! Session identifier generation

use std::sync::Arc;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use crate::constants::SESSION_ID_BYTES;
use crate::error::SessionError;
use crate::rng::{OsRandom, RandomByteSource};

/// Generates opaque session identifiers.
///
/// An identifier is 16 bytes from the secure random source, encoded as
/// URL-safe base64 without padding (22 characters). Uniqueness is
/// probabilistic over the 128-bit space; no issued-identifier bookkeeping
/// exists anywhere.
pub struct SessionIdGenerator {
    source: Arc<dyn RandomByteSource>,
}

impl SessionIdGenerator {
    pub fn new() -> Self {
        Self {
            source: Arc::new(OsRandom),
        }
    }

    /// Substitute the random source (test doubles).
    pub fn with_source(source: Arc<dyn RandomByteSource>) -> Self {
        Self { source }
    }

    /// Generate a fresh identifier.
    ///
    /// Fails with [`SessionError::RandomSource`] when the source cannot
    /// supply the requested bytes.
    pub fn generate(&self) -> Result<String, SessionError> {
        let mut bytes = [0u8; SESSION_ID_BYTES];
        self.source.read_exactly(&mut bytes)?;
        Ok(URL_SAFE_NO_PAD.encode(bytes))
    }
}

impl Default for SessionIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SESSION_ID_LENGTH;
    use crate::rng::MockRandomByteSource;
    use std::collections::HashSet;

    #[test]
    fn test_session_id_shape() {
        let generator = SessionIdGenerator::new();
        let id = generator.generate().unwrap();

        assert_eq!(id.len(), SESSION_ID_LENGTH);
        assert!(id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
        assert!(!id.contains('='));
    }

    #[test]
    fn test_session_id_unique_across_10k() {
        let generator = SessionIdGenerator::new();
        let mut seen = HashSet::new();

        for _ in 0..10_000 {
            assert!(seen.insert(generator.generate().unwrap()));
        }
    }

    #[test]
    fn test_session_id_encoding() {
        let mut source = MockRandomByteSource::new();
        source.expect_read_exactly().returning(|buf| {
            for (i, b) in buf.iter_mut().enumerate() {
                *b = i as u8;
            }
            Ok(())
        });

        let generator = SessionIdGenerator::with_source(Arc::new(source));
        assert_eq!(generator.generate().unwrap(), "AAECAwQFBgcICQoLDA0ODw");
    }

    #[test]
    fn test_random_failure_propagates() {
        let mut source = MockRandomByteSource::new();
        source
            .expect_read_exactly()
            .returning(|_| Err(SessionError::RandomSource("exhausted".to_string())));

        let generator = SessionIdGenerator::with_source(Arc::new(source));
        assert!(matches!(
            generator.generate(),
            Err(SessionError::RandomSource(_))
        ));
    }
}
