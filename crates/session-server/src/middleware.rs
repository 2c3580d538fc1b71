use axum::{
    extract::{FromRequestParts, Request, State},
    http::header::{HeaderMap, SET_COOKIE},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;

/// Session identifier ensured by [`session_middleware`].
///
/// A correlation key only; the server stores nothing against it.
#[derive(Debug, Clone)]
pub struct CurrentSession(pub String);

/// Session middleware - every request passing through leaves with a
/// session identifier, issued here when the client did not send one.
pub async fn session_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    // Any cookie issued for this request is staged here and attached
    // to the response headers after the handler runs.
    let mut issued = HeaderMap::new();
    let session_id = state
        .sessions
        .ensure_session(request.headers(), &mut issued)?;

    debug!("Session ensured");

    request.extensions_mut().insert(CurrentSession(session_id));

    let mut response = next.run(request).await;

    for value in issued.get_all(SET_COOKIE).iter() {
        response.headers_mut().append(SET_COOKIE, value.clone());
    }

    Ok(response)
}

impl<S> FromRequestParts<S> for CurrentSession
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentSession>()
            .cloned()
            .ok_or_else(|| {
                ApiError::InternalError("Session middleware not configured".to_string())
            })
    }
}
