//! Mock Ethos proxy for E2E testing.
//!
//! This module provides an in-memory server that simulates the token proxy
//! and the person hold resources for integration and end-to-end testing.
//! Unlike wiremock which mocks at the HTTP level per-test, this server keeps
//! state across requests, so an update can be observed by a later read.
//!
//! # Example
//!
//! ```ignore
//! use ethos_client::mock_server::{MockServer, TEST_API_KEY};
//! use ethos_client::{EthosClient, EthosConfig};
//!
//! #[tokio::test]
//! async fn test_workflow() {
//!     let server = MockServer::start().await;
//!     let client = EthosClient::connect(&EthosConfig::new(server.url(), TEST_API_KEY))
//!         .await
//!         .unwrap();
//!
//!     // Server comes with default fixtures
//!     let person = client.get_person_by_external_id("0123456").await.unwrap();
//!     assert_eq!(person.id, "person-guid-1");
//!
//!     server.shutdown().await;
//! }
//! ```

mod fixtures;
mod handlers;
mod server;
mod state;

pub use fixtures::{Fixtures, TEST_API_KEY, TEST_SESSION_TOKEN};
pub use server::MockServer;
pub use state::MockState;
