//! Session-wide constants

/// Cookie carrying the session identifier.
pub const SESSION_COOKIE: &str = "sessionId";

/// Raw entropy drawn per identifier.
pub const SESSION_ID_BYTES: usize = 16;

/// Encoded identifier length (URL-safe base64, no padding).
pub const SESSION_ID_LENGTH: usize = 22;

/// Cookie lifetime when no other TTL is configured.
pub const DEFAULT_SESSION_TTL_SECONDS: i64 = 600;
