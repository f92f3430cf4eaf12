//! Person endpoint handlers.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tokio::sync::RwLock;

use super::auth::require_session;
use crate::mock_server::state::MockState;
use crate::{Credential, Person};

/// Query parameters for searching persons.
#[derive(Debug, Default, Deserialize)]
pub struct ListPersonsQuery {
    pub criteria: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct Criteria {
    #[serde(default)]
    credentials: Vec<Credential>,
}

/// GET /api/persons
pub async fn list_persons(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Query(query): Query<ListPersonsQuery>,
) -> impl IntoResponse {
    let state = state.read().await;
    if let Err(rejection) = require_session(&headers, &state) {
        return rejection;
    }

    let criteria: Criteria = match query.criteria.as_deref().map(serde_json::from_str) {
        Some(Ok(c)) => c,
        Some(Err(e)) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({
                    "message": format!("Invalid criteria: {}", e)
                })),
            )
                .into_response()
        }
        None => Criteria::default(),
    };

    let persons: Vec<Person> = state
        .find_persons(&criteria.credentials)
        .into_iter()
        .cloned()
        .collect();

    (StatusCode::OK, Json(persons)).into_response()
}
