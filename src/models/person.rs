//! Person model and trait implementations.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::{parse_json, EthosClient};
use crate::error::{EthosError, Result};
use crate::traits::Get;

/// Credential type carrying a person's Colleague ID (RCID).
pub const COLLEAGUE_PERSON_ID: &str = "colleaguePersonId";

/// A credential attached to a person record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    /// Credential type (e.g., "colleaguePersonId").
    #[serde(rename = "type")]
    pub credential_type: String,

    /// Credential value.
    pub value: String,
}

impl Credential {
    /// A `colleaguePersonId` credential for the given RCID.
    pub fn colleague_person_id(rcid: impl Into<String>) -> Self {
        Self {
            credential_type: COLLEAGUE_PERSON_ID.to_string(),
            value: rcid.into(),
        }
    }
}

/// Search filter for the `persons` resource.
///
/// Sent as the JSON-encoded `criteria` query parameter.
#[derive(Debug, Clone, Serialize)]
pub struct PersonCriteria {
    pub credentials: Vec<Credential>,
}

impl PersonCriteria {
    /// Select the person whose Colleague ID equals `rcid`.
    pub fn by_external_id(rcid: impl Into<String>) -> Self {
        Self {
            credentials: vec![Credential::colleague_person_id(rcid)],
        }
    }

    /// Encode the filter for the `criteria` query parameter.
    pub fn to_query_value(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// One of a person's names.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonName {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// "preferred" marks the name to display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preference: Option<String>,
}

/// A Colleague person record.
///
/// Only the members this crate reads are typed; everything else the API
/// returns is kept in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    /// Person GUID.
    pub id: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub names: Vec<PersonName>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub credentials: Vec<Credential>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Person {
    /// Get the person's GUID.
    pub fn guid(&self) -> &str {
        &self.id
    }

    /// Get the Colleague ID (RCID) credential, if present.
    pub fn external_id(&self) -> Option<&str> {
        self.credentials
            .iter()
            .find(|c| c.credential_type == COLLEAGUE_PERSON_ID)
            .map(|c| c.value.as_str())
    }

    /// Get the preferred full name, falling back to the first one listed.
    pub fn display_name(&self) -> Option<&str> {
        self.names
            .iter()
            .find(|n| n.preference.as_deref() == Some("preferred"))
            .or_else(|| self.names.first())
            .and_then(|n| n.full_name.as_deref())
    }
}

#[async_trait]
impl Get for Person {
    type Id = String; // RCID

    #[tracing::instrument(skip(client))]
    async fn get(client: &EthosClient, rcid: String) -> Result<Self> {
        let criteria = PersonCriteria::by_external_id(rcid.as_str()).to_query_value()?;

        let response = client
            .get_with_query("persons", &[("criteria", criteria.as_str())])
            .await?;
        let persons: Vec<Person> = parse_json(response).await?;

        persons.into_iter().next().ok_or(EthosError::NotFound {
            entity_type: "person",
            id: rcid,
        })
    }
}
