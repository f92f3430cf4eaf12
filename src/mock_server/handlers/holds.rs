//! Person hold endpoint handlers.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tokio::sync::RwLock;

use super::auth::require_session;
use crate::mock_server::state::MockState;
use crate::PersonHold;

/// Query parameters for listing holds.
#[derive(Debug, Default, Deserialize)]
pub struct ListHoldsQuery {
    pub person: Option<String>,
}

/// GET /api/person-holds
pub async fn list_holds(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Query(query): Query<ListHoldsQuery>,
) -> impl IntoResponse {
    let state = state.read().await;
    if let Err(rejection) = require_session(&headers, &state) {
        return rejection;
    }

    let holds: Vec<PersonHold> = state
        .list_holds(query.person.as_deref())
        .into_iter()
        .cloned()
        .collect();

    (StatusCode::OK, Json(holds)).into_response()
}

/// PUT /api/person-holds/{id}
///
/// The body arrives in the versioned media type, so it is parsed by hand
/// rather than through the `Json` extractor.
pub async fn update_hold(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    body: Bytes,
) -> impl IntoResponse {
    let mut state = state.write().await;
    if let Err(rejection) = require_session(&headers, &state) {
        return rejection;
    }

    let hold: PersonHold = match serde_json::from_slice(&body) {
        Ok(h) => h,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({
                    "message": format!("Invalid person hold: {}", e)
                })),
            )
                .into_response()
        }
    };

    if hold.guid() != Some(id.as_str()) {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({
                "message": "The id in the body must match the id in the URL"
            })),
        )
            .into_response();
    }

    if state.replace_hold(&id, hold.clone()) {
        (StatusCode::OK, Json(hold)).into_response()
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({
                "message": format!("No person hold found with id: {}", id)
            })),
        )
            .into_response()
    }
}
