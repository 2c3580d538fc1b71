//! # Session Core
//!
//! Anonymous session establishment: identifier generation, cookie
//! transport, and ensure-or-create semantics.

pub mod constants;
pub mod cookies;
pub mod error;
pub mod id;
pub mod rng;
pub mod session;

pub use cookies::CookieLookup;
pub use error::SessionError;
pub use id::SessionIdGenerator;
pub use rng::{OsRandom, RandomByteSource};
pub use session::SessionService;
