//! MCP (Model Context Protocol) server and tool types.
//!
//! This module exposes the person hold operations as MCP tools, so an
//! assistant can look up holds and end them.
//!
//! # Example
//!
//! ```no_run
//! use ethos_client::mcp::EthosServer;
//!
//! # async fn example() -> ethos_client::Result<()> {
//! let server = EthosServer::from_env().await?;
//! // Server can now be used with rmcp transport
//! # Ok(())
//! # }
//! ```

mod params;
mod server;

pub use params::*;
pub use server::EthosServer;
