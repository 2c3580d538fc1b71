//! Session error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Random source error: {0}")]
    RandomSource(String),

    #[error("Invalid cookie header: {0}")]
    InvalidCookieHeader(#[from] http::header::ToStrError),

    #[error("Internal error: {0}")]
    Internal(String),
}
