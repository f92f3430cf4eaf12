//! Token exchange and bearer checks.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tokio::sync::RwLock;

use crate::mock_server::state::MockState;

fn bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
}

fn unauthorized(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(serde_json::json!({ "message": message })),
    )
        .into_response()
}

/// Reject API requests that don't carry the issued session token.
pub(crate) fn require_session(headers: &HeaderMap, state: &MockState) -> Result<(), Response> {
    match bearer(headers) {
        Some(token) if token == state.session_token => Ok(()),
        _ => Err(unauthorized("Invalid or missing session token")),
    }
}

/// POST /auth
pub async fn issue_token(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let state = state.read().await;

    let accepted = match (&state.api_key, bearer(&headers)) {
        (Some(expected), Some(given)) => expected == given,
        (None, Some(_)) => true,
        (_, None) => false,
    };

    if accepted {
        (StatusCode::OK, state.session_token.clone()).into_response()
    } else {
        unauthorized("Invalid API key")
    }
}
