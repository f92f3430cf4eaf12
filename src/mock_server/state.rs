//! Mock server state management.
//!
//! Provides the in-memory data store for the mock Ethos proxy.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{Credential, HoldType, Person, PersonHold};

/// Shared state for the mock server.
///
/// Collections are kept in insertion order so list endpoints answer in a
/// stable order. It's wrapped in `Arc<RwLock<_>>` for concurrent access.
#[derive(Debug, Default)]
pub struct MockState {
    /// Person records.
    pub persons: Vec<Person>,

    /// Person holds, across all persons.
    pub holds: Vec<PersonHold>,

    /// Hold type catalog.
    pub hold_types: Vec<HoldType>,

    /// API key accepted by `POST /auth`. If unset, any key is accepted.
    pub api_key: Option<String>,

    /// Token issued by `POST /auth` and required on API routes.
    pub session_token: String,
}

impl MockState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self {
            session_token: super::fixtures::TEST_SESSION_TOKEN.to_string(),
            ..Default::default()
        }
    }

    /// Create state wrapped in Arc<RwLock> for sharing.
    pub fn shared(self) -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(self))
    }

    /// Add a person to the state.
    pub fn with_person(mut self, person: Person) -> Self {
        self.persons.push(person);
        self
    }

    /// Add a hold to the state.
    pub fn with_hold(mut self, hold: PersonHold) -> Self {
        self.holds.push(hold);
        self
    }

    /// Add a hold type to the catalog.
    pub fn with_hold_type(mut self, hold_type: HoldType) -> Self {
        self.hold_types.push(hold_type);
        self
    }

    /// Set the API key that `POST /auth` accepts.
    pub fn with_api_key(mut self, api_key: &str) -> Self {
        self.api_key = Some(api_key.to_string());
        self
    }

    /// Set the session token that `POST /auth` issues.
    pub fn with_session_token(mut self, token: &str) -> Self {
        self.session_token = token.to_string();
        self
    }

    /// Find persons carrying every one of the given credentials.
    pub fn find_persons(&self, credentials: &[Credential]) -> Vec<&Person> {
        self.persons
            .iter()
            .filter(|p| credentials.iter().all(|c| p.credentials.contains(c)))
            .collect()
    }

    /// List holds, optionally only those of one person.
    pub fn list_holds(&self, person_guid: Option<&str>) -> Vec<&PersonHold> {
        self.holds
            .iter()
            .filter(|h| person_guid.map_or(true, |g| h.person_guid() == Some(g)))
            .collect()
    }

    /// Get a hold by GUID.
    pub fn get_hold(&self, id: &str) -> Option<&PersonHold> {
        self.holds.iter().find(|h| h.guid() == Some(id))
    }

    /// Replace a stored hold, returning false if no hold has that GUID.
    pub fn replace_hold(&mut self, id: &str, hold: PersonHold) -> bool {
        match self.holds.iter_mut().find(|h| h.guid() == Some(id)) {
            Some(slot) => {
                *slot = hold;
                true
            }
            None => false,
        }
    }
}
