//! Session cookie construction and request-side lookup

use cookie::Cookie;
use http::header::{HeaderMap, COOKIE};
use time::{Duration, OffsetDateTime};

use crate::constants::SESSION_COOKIE;
use crate::error::SessionError;

/// Outcome of looking up the session cookie on a request.
#[derive(Debug)]
pub enum CookieLookup {
    /// Cookie present; carries its value unvalidated.
    Found(String),
    /// No session cookie on the request.
    NotFound,
    /// The `Cookie` header could not be read.
    Malformed(SessionError),
}

/// Build the session cookie for a freshly issued identifier.
///
/// `HttpOnly`, absolute expiry of now + `ttl_seconds`. `Secure` and
/// `SameSite` are left unset.
pub fn build_session_cookie(session_id: &str, ttl_seconds: i64) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, session_id.to_owned()))
        .http_only(true)
        .expires(OffsetDateTime::now_utc() + Duration::seconds(ttl_seconds))
        .build()
}

/// Look up the session cookie in the request headers.
///
/// Scans every `Cookie` header. Pairs that fail to parse are skipped;
/// only a header whose bytes are unreadable yields [`CookieLookup::Malformed`].
pub fn lookup_session_cookie(headers: &HeaderMap) -> CookieLookup {
    for value in headers.get_all(COOKIE).iter() {
        let raw = match value.to_str() {
            Ok(raw) => raw,
            Err(err) => return CookieLookup::Malformed(err.into()),
        };

        for parsed in Cookie::split_parse(raw) {
            match parsed {
                Ok(c) if c.name() == SESSION_COOKIE => {
                    return CookieLookup::Found(c.value().to_string());
                }
                // other cookies, parseable or not, are ignored
                _ => {}
            }
        }
    }

    CookieLookup::NotFound
}
