//! Hold type catalog model.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::{parse_json, EthosClient};
use crate::error::Result;
use crate::traits::List;

/// An entry in the `person-hold-types` catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldType {
    /// Hold type GUID.
    pub id: String,

    /// Short mnemonic (e.g., "ACC").
    #[serde(default)]
    pub code: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Query for the hold type catalog. The API offers no server-side filter.
#[derive(Debug, Clone, Copy)]
pub struct HoldTypeQuery;

#[async_trait]
impl List for HoldType {
    type Query = HoldTypeQuery;

    #[tracing::instrument(skip(client))]
    async fn list(client: &EthosClient, _query: &Self::Query) -> Result<Vec<Self>> {
        let response = client.get_versioned("person-hold-types").await?;
        let types: Vec<HoldType> = parse_json(response).await?;
        Ok(types)
    }
}

/// Find the first catalog entry with the given code.
pub fn find_hold_type_by_code<'a>(catalog: &'a [HoldType], code: &str) -> Option<&'a HoldType> {
    catalog.iter().find(|t| t.code == code)
}
