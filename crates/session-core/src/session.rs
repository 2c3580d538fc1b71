//! Ensure-or-create session semantics

use http::header::{HeaderMap, HeaderValue, SET_COOKIE};
use tracing::debug;

use crate::constants::DEFAULT_SESSION_TTL_SECONDS;
use crate::cookies::{build_session_cookie, lookup_session_cookie, CookieLookup};
use crate::error::SessionError;
use crate::id::SessionIdGenerator;

/// Associates every request with a durable session identifier.
///
/// Stateless per call: each invocation touches only its own request and
/// response headers. The server keeps no record of issued identifiers;
/// the cookie is the session's entire lifecycle.
pub struct SessionService {
    generator: SessionIdGenerator,
    ttl_seconds: i64,
}

impl SessionService {
    pub fn new(ttl_seconds: i64) -> Self {
        Self {
            generator: SessionIdGenerator::new(),
            ttl_seconds,
        }
    }

    /// Substitute the identifier generator (test doubles).
    pub fn with_generator(generator: SessionIdGenerator, ttl_seconds: i64) -> Self {
        Self {
            generator,
            ttl_seconds,
        }
    }

    /// Return the request's session identifier, issuing one if needed.
    ///
    /// An existing cookie value is returned unchanged; no validation of
    /// shape or freshness is performed. When absent, a new identifier is
    /// generated and attached to `response_headers` as a `Set-Cookie`.
    /// An unreadable `Cookie` header is an error.
    pub fn ensure_session(
        &self,
        request_headers: &HeaderMap,
        response_headers: &mut HeaderMap,
    ) -> Result<String, SessionError> {
        match lookup_session_cookie(request_headers) {
            CookieLookup::Found(session_id) => {
                debug!("Request carries an existing session cookie");
                Ok(session_id)
            }
            CookieLookup::NotFound => self.start_session(response_headers),
            CookieLookup::Malformed(err) => Err(err),
        }
    }

    /// Issue a fresh identifier and attach its cookie to the response.
    ///
    /// On generator failure the error is propagated unchanged and no
    /// cookie is attached.
    pub fn start_session(
        &self,
        response_headers: &mut HeaderMap,
    ) -> Result<String, SessionError> {
        let session_id = self.generator.generate()?;

        let cookie = build_session_cookie(&session_id, self.ttl_seconds);
        let value = HeaderValue::from_str(&cookie.to_string())
            .map_err(|e| SessionError::Internal(format!("Cookie encoding: {}", e)))?;
        response_headers.append(SET_COOKIE, value);

        debug!("Issued new session cookie");
        Ok(session_id)
    }
}

impl Default for SessionService {
    fn default() -> Self {
        Self::new(DEFAULT_SESSION_TTL_SECONDS)
    }
}
