//! Test data fixtures for the mock server.
//!
//! Provides factory functions for creating realistic test data.

use serde_json::Map;

use crate::{Credential, GuidObject, HoldType, HoldTypeRef, Person, PersonHold, PersonName};

/// API key the default mock server accepts.
pub const TEST_API_KEY: &str = "test-api-key";

/// Session token the default mock server issues.
pub const TEST_SESSION_TOKEN: &str = "test-session-token";

/// Collection of fixture factories for test data.
pub struct Fixtures;

impl Fixtures {
    // =========================================================================
    // Person Fixtures
    // =========================================================================

    /// Create a person with a Colleague ID credential and one name.
    pub fn person(guid: &str, rcid: &str, full_name: &str) -> Person {
        Person {
            id: guid.to_string(),
            names: vec![PersonName {
                full_name: Some(full_name.to_string()),
                preference: Some("preferred".to_string()),
                ..Default::default()
            }],
            credentials: vec![Credential::colleague_person_id(rcid)],
            extra: Map::new(),
        }
    }

    // =========================================================================
    // Hold Type Fixtures
    // =========================================================================

    /// Create a hold type catalog entry.
    pub fn hold_type(guid: &str, code: &str, title: &str) -> HoldType {
        HoldType {
            id: guid.to_string(),
            code: code.to_string(),
            title: Some(title.to_string()),
            description: None,
            extra: Map::new(),
        }
    }

    // =========================================================================
    // Hold Fixtures
    // =========================================================================

    /// Create an open academic hold.
    pub fn open_hold(hold_guid: &str, person_guid: &str, type_guid: &str) -> PersonHold {
        PersonHold {
            id: Some(hold_guid.to_string()),
            hold_type: Some(HoldTypeRef {
                category: Some("academic".to_string()),
                detail: Some(GuidObject::new(type_guid)),
                extra: Map::new(),
            }),
            person: Some(GuidObject::new(person_guid)),
            start_on: Some("2024-01-15T00:00:00Z".to_string()),
            end_on: None,
            comment: None,
            extra: Map::new(),
        }
    }

    // =========================================================================
    // Scenario Builders
    // =========================================================================

    /// Create a default set of test data for common scenarios.
    pub fn default_scenario() -> DefaultScenario {
        DefaultScenario::new()
    }
}

/// A complete test scenario with related entities.
pub struct DefaultScenario {
    pub persons: Vec<Person>,
    pub hold_types: Vec<HoldType>,
    pub holds: Vec<PersonHold>,
}

impl DefaultScenario {
    fn new() -> Self {
        let persons = vec![
            Fixtures::person("person-guid-1", "0123456", "Robert Smith"),
            Fixtures::person("person-guid-2", "0654321", "Alice Jones"),
        ];

        let hold_types = vec![
            Fixtures::hold_type("type-guid-bus", "BUS", "Business Office"),
            Fixtures::hold_type("type-guid-acc", "ACC", "Academic Advising"),
        ];

        let holds = vec![
            Fixtures::open_hold("hold-guid-1", "person-guid-1", "type-guid-bus"),
            Fixtures::open_hold("hold-guid-2", "person-guid-1", "type-guid-acc"),
            Fixtures::open_hold("hold-guid-3", "person-guid-2", "type-guid-acc"),
        ];

        Self {
            persons,
            hold_types,
            holds,
        }
    }
}
