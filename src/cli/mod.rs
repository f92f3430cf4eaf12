//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the ethos binary.

use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use crate::config::{API_HEADER_VAR, API_KEY_VAR, PROXY_URL_VAR, TIMEOUT_VAR};
use crate::{EthosConfig, EthosError, Result, DEFAULT_API_HEADER};

/// Ethos person hold command-line interface.
#[derive(Parser, Debug)]
#[command(name = "ethos", about = "Ethos person hold CLI", version)]
pub struct Cli {
    /// Output results as JSON instead of a table.
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    /// Base URL of the Ethos token proxy.
    #[arg(long, global = true, env = PROXY_URL_VAR)]
    pub proxy_url: Option<String>,

    /// API key exchanged for a session token.
    #[arg(long, global = true, env = API_KEY_VAR, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Media type sent as Accept/Content-Type on versioned requests.
    #[arg(long, global = true, env = API_HEADER_VAR, default_value = DEFAULT_API_HEADER)]
    pub api_header: String,

    /// Request timeout in seconds.
    #[arg(long, global = true, env = TIMEOUT_VAR, default_value = "30")]
    pub timeout: u64,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Build the client configuration from the parsed flags.
    ///
    /// # Errors
    ///
    /// Returns [`EthosError::ConfigMissing`] if the proxy URL or API key was
    /// given neither as a flag nor in the environment.
    pub fn config(&self) -> Result<EthosConfig> {
        let proxy_url = self.proxy_url.clone().ok_or_else(|| {
            EthosError::ConfigMissing(format!("--proxy-url or {PROXY_URL_VAR} is required"))
        })?;
        let api_key = self.api_key.clone().ok_or_else(|| {
            EthosError::ConfigMissing(format!("--api-key or {API_KEY_VAR} is required"))
        })?;

        Ok(EthosConfig::new(proxy_url, api_key)
            .with_api_header(self.api_header.clone())
            .with_timeout(Duration::from_secs(self.timeout)))
    }
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show a person record by Colleague ID.
    Person {
        /// Colleague ID (RCID).
        rcid: String,
    },

    /// List a person's holds.
    Holds {
        /// Colleague ID (RCID), or a person GUID with --guid.
        id: String,

        /// Treat the identifier as a person GUID.
        #[arg(long)]
        guid: bool,
    },

    /// Show a person's hold of one hold type.
    Hold {
        /// Colleague ID (RCID).
        rcid: String,

        #[command(flatten)]
        hold_type: HoldTypeArgs,
    },

    /// List the hold type catalog.
    HoldTypes,

    /// Resolve a hold type code to its GUID.
    HoldType {
        /// Hold type code (e.g., ACC).
        code: String,
    },

    /// End a person's hold of one hold type.
    EndHold {
        /// Colleague ID (RCID).
        rcid: String,

        #[command(flatten)]
        hold_type: HoldTypeArgs,

        /// Comment to record on the hold.
        #[arg(long, default_value = "")]
        comment: String,
    },
}

/// Selects a hold type by GUID or by code.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
#[group(required = true, multiple = false)]
pub struct HoldTypeArgs {
    /// Hold type GUID.
    #[arg(long)]
    pub type_guid: Option<String>,

    /// Hold type code (e.g., ACC).
    #[arg(long)]
    pub type_code: Option<String>,
}
