//! Hold type catalog handler.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use tokio::sync::RwLock;

use super::auth::require_session;
use crate::mock_server::state::MockState;

/// GET /api/person-hold-types
pub async fn list_hold_types(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let state = state.read().await;
    if let Err(rejection) = require_session(&headers, &state) {
        return rejection;
    }

    (StatusCode::OK, Json(state.hold_types.clone())).into_response()
}
