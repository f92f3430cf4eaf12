//! Ellucian Ethos person hold client.
//!
//! A Rust library for reading and ending Colleague person holds ("PERCs")
//! through an Ethos proxy that trades an API key for a session token.
//!
//! # Quick Start
//!
//! ```no_run
//! use ethos_client::EthosClient;
//!
//! #[tokio::main]
//! async fn main() -> ethos_client::Result<()> {
//!     // Exchanges ETHOS_API_KEY for a session token
//!     let client = EthosClient::from_env().await?;
//!
//!     // Look up a person by Colleague ID
//!     let person = client.get_person_by_external_id("0123456").await?;
//!     println!("Person GUID: {}", person.id);
//!
//!     // List their holds
//!     let holds = client.get_holds_by_person_guid(&person.id).await?;
//!     println!("Found {} holds", holds.len());
//!
//!     // End the advising hold
//!     client
//!         .end_hold_by_external_id_and_type_code("0123456", "ACC", "Met with advisor")
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Per-entity requests are expressed through three traits:
//!
//! - [`Get`] - Resolve a single entity ([`Person`] by RCID)
//! - [`List`] - Fetch a collection ([`PersonHold`], [`HoldType`])
//! - [`Update`] - Replace an entity ([`PersonHold`])
//!
//! The hold workflows are methods on [`EthosClient`] built from those.
//!
//! # Configuration
//!
//! [`EthosConfig::from_env`] reads `ETHOS_PROXY_URL`, `ETHOS_API_KEY`,
//! `ETHOS_API_HEADER` and `ETHOS_TIMEOUT_SECS`.

mod client;
mod config;
mod error;
mod holds;
mod models;
mod output;
mod traits;

pub mod cli;
pub mod mcp;

#[cfg(feature = "test-server")]
pub mod mock_server;

// Re-export core types
pub use client::EthosClient;
pub use config::{EthosConfig, DEFAULT_API_HEADER, DEFAULT_TIMEOUT};
pub use error::{EthosError, Result};
pub use output::PrettyPrint;

// Re-export traits
pub use traits::{Get, List, Update};

// Re-export models
pub use models::{
    // Person types
    Credential,
    Person,
    PersonCriteria,
    PersonName,
    COLLEAGUE_PERSON_ID,
    // Hold types
    GuidObject,
    HoldTypeRef,
    PersonHold,
    PersonHoldQuery,
    // Hold type catalog
    find_hold_type_by_code,
    HoldType,
    HoldTypeQuery,
};
