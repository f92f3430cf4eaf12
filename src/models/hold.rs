//! Person hold ("PERC") model and trait implementations.
//!
//! A hold restricts some action on a student record (registration,
//! transcripts) until it is ended. Holds are read as a collection per
//! person and written back whole, so members are kept as the API sent them
//! and only interpreted on demand.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::{parse_json, EthosClient};
use crate::error::Result;
use crate::traits::{List, Update};

/// Reference to another resource by GUID.
///
/// A reference without an `id` still decodes; it simply matches nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GuidObject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl GuidObject {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            extra: Map::new(),
        }
    }

    /// Get the referenced GUID.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// The `type` member of a hold.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HoldTypeRef {
    /// Broad category (e.g., "academic", "financial").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// The hold type this hold was placed with.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<GuidObject>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A hold placed on a person.
///
/// `id` is optional so that caller-built payloads can be represented; the
/// update path rejects a hold without one. `startOn` and `endOn` hold the
/// timestamps exactly as received; see [`PersonHold::starts_at`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonHold {
    /// Hold GUID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub hold_type: Option<HoldTypeRef>,

    /// The person the hold belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person: Option<GuidObject>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_on: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_on: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Interpret an Ethos timestamp.
///
/// Accepts RFC 3339, a date-time without offset (read as UTC) and a bare
/// date (midnight UTC).
pub(crate) fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

impl PersonHold {
    /// Get the hold GUID, treating an empty string as absent.
    pub fn guid(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }

    /// Get the hold-type GUID (`type.detail.id`).
    pub fn type_guid(&self) -> Option<&str> {
        self.hold_type
            .as_ref()
            .and_then(|t| t.detail.as_ref())
            .and_then(GuidObject::id)
    }

    /// Check whether the hold was placed with the given hold type.
    pub fn has_type(&self, type_guid: &str) -> bool {
        self.type_guid() == Some(type_guid)
    }

    /// Get the owning person's GUID.
    pub fn person_guid(&self) -> Option<&str> {
        self.person.as_ref().and_then(GuidObject::id)
    }

    /// `startOn` as a UTC instant, if present and readable.
    pub fn starts_at(&self) -> Option<DateTime<Utc>> {
        self.start_on.as_deref().and_then(parse_timestamp)
    }

    /// `endOn` as a UTC instant, if present and readable.
    pub fn ends_at(&self) -> Option<DateTime<Utc>> {
        self.end_on.as_deref().and_then(parse_timestamp)
    }

    /// Check whether the hold is in force at `at`.
    ///
    /// An unreadable timestamp is treated like a missing one.
    pub fn is_active_at(&self, at: DateTime<Utc>) -> bool {
        let started = self.starts_at().map_or(true, |s| s <= at);
        let not_ended = self.ends_at().map_or(true, |e| e > at);
        started && not_ended
    }

    /// Mark the hold as ended at `at`, to the second.
    ///
    /// The comment replaces the existing one only when it is non-empty.
    /// Every other member is left as received.
    pub fn end(&mut self, at: DateTime<Utc>, comment: &str) {
        self.end_on = Some(at.to_rfc3339_opts(SecondsFormat::Secs, true));
        if !comment.is_empty() {
            self.comment = Some(comment.to_string());
        }
    }
}

/// Query parameters for listing holds.
#[derive(Debug, Clone, Serialize)]
pub struct PersonHoldQuery {
    /// Person GUID.
    pub person: String,
}

impl PersonHoldQuery {
    pub fn for_person(guid: impl Into<String>) -> Self {
        Self {
            person: guid.into(),
        }
    }
}

#[async_trait]
impl List for PersonHold {
    type Query = PersonHoldQuery;

    #[tracing::instrument(skip(client))]
    async fn list(client: &EthosClient, query: &Self::Query) -> Result<Vec<Self>> {
        let response = client.get_with_query("person-holds", query).await?;
        parse_json(response).await
    }
}

#[async_trait]
impl Update for PersonHold {
    type Id = String; // Hold GUID
    type Params = PersonHold;

    #[tracing::instrument(skip(client, hold))]
    async fn update(client: &EthosClient, id: String, hold: Self::Params) -> Result<()> {
        let path = format!("person-holds/{}", urlencoding::encode(&id));
        client.put(&path, &hold).await?;
        Ok(())
    }
}
