//! Mock Ethos proxy server.
//!
//! Provides an axum-based HTTP server that simulates the token proxy and
//! the person hold resources behind it.

use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use super::fixtures::{DefaultScenario, Fixtures, TEST_API_KEY};
use super::handlers;
use super::state::MockState;

/// A mock Ethos proxy for testing.
///
/// The server runs in the background and can be used to test the Ethos
/// client against a realistic API implementation.
pub struct MockServer {
    /// The URL where the server is listening.
    url: String,
    /// Handle to the server task.
    handle: JoinHandle<()>,
    /// Shared state that can be modified during tests.
    state: Arc<RwLock<MockState>>,
}

impl MockServer {
    /// Start a new mock server with default fixtures.
    ///
    /// The server listens on a random available port and accepts
    /// [`TEST_API_KEY`] at `POST /auth`.
    pub async fn start() -> Self {
        Self::with_state(Self::default_state()).await
    }

    /// Start a mock server with empty state.
    ///
    /// Any API key is accepted. Useful when you want to control exactly
    /// what data is available.
    pub async fn start_empty() -> Self {
        Self::with_state(MockState::new()).await
    }

    /// Start a mock server with custom state.
    pub async fn with_state(state: MockState) -> Self {
        let shared_state = state.shared();
        let app = Self::create_router(shared_state.clone());

        // Bind to a random available port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to address");
        let addr = listener.local_addr().expect("Failed to get local address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Server error");
        });

        Self {
            url: format!("http://{}/", addr),
            handle,
            state: shared_state,
        }
    }

    /// Get the proxy URL of the mock server.
    ///
    /// Use this URL as `EthosConfig::proxy_url`.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get access to the server's shared state.
    ///
    /// This allows inspecting or modifying the mock data during a test.
    pub fn state(&self) -> Arc<RwLock<MockState>> {
        self.state.clone()
    }

    /// Shutdown the server.
    ///
    /// This aborts the server task.
    pub async fn shutdown(self) {
        self.handle.abort();
        let _ = self.handle.await;
    }

    /// Create the default state with common test fixtures.
    fn default_state() -> MockState {
        Self::state_from_scenario(Fixtures::default_scenario()).with_api_key(TEST_API_KEY)
    }

    /// Create state from a scenario.
    fn state_from_scenario(scenario: DefaultScenario) -> MockState {
        let mut state = MockState::new();
        state.persons = scenario.persons;
        state.hold_types = scenario.hold_types;
        state.holds = scenario.holds;
        state
    }

    /// Create the axum router with all routes.
    pub(crate) fn create_router(state: Arc<RwLock<MockState>>) -> Router {
        Router::new()
            // Token exchange
            .route("/auth", post(handlers::issue_token))
            // Person routes
            .route("/api/persons", get(handlers::list_persons))
            // Hold routes
            .route("/api/person-holds", get(handlers::list_holds))
            .route("/api/person-holds/:id", put(handlers::update_hold))
            // Hold type routes
            .route("/api/person-hold-types", get(handlers::list_hold_types))
            // Health check
            .route("/health", get(health_check))
            .with_state(state)
    }
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "ok"
}
