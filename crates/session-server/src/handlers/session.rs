use axum::Json;
use serde::Serialize;

use crate::middleware::CurrentSession;

#[derive(Serialize)]
pub struct SessionResponse {
    pub session_id: String,
}

/// Session handler - GET /api/session
///
/// Echoes the identifier the middleware associated with this request so
/// downstream consumers can use it as a correlation key.
pub async fn session_handler(CurrentSession(session_id): CurrentSession) -> Json<SessionResponse> {
    Json(SessionResponse { session_id })
}
