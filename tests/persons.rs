//! Person lookup tests.
//!
//! Uses wiremock to mock the Ethos proxy and check the exact criteria sent.

use ethos_client::{EthosClient, EthosConfig, EthosError, Get, Person};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CRITERIA_0123456: &str =
    r#"{"credentials":[{"type":"colleaguePersonId","value":"0123456"}]}"#;

async fn connect(mock_server: &MockServer) -> EthosClient {
    Mock::given(method("POST"))
        .and(path("/auth"))
        .respond_with(ResponseTemplate::new(200).set_body_string("test-token"))
        .mount(mock_server)
        .await;

    EthosClient::connect(&EthosConfig::new(mock_server.uri(), "test-key"))
        .await
        .unwrap()
}

#[tokio::test]
async fn test_get_person_sends_exact_criteria_and_returns_first() {
    let mock_server = MockServer::start().await;
    let client = connect(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/api/persons"))
        .and(query_param("criteria", CRITERIA_0123456))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "id": "person-guid-1",
                "names": [{"fullName": "Robert Smith", "preference": "preferred"}],
                "credentials": [{"type": "colleaguePersonId", "value": "0123456"}]
            },
            {
                "id": "person-guid-2",
                "credentials": [{"type": "colleaguePersonId", "value": "0123456"}]
            }
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let person = client.get_person_by_external_id("0123456").await.unwrap();

    assert_eq!(person.id, "person-guid-1");
    assert_eq!(person.display_name(), Some("Robert Smith"));
}

#[tokio::test]
async fn test_get_person_empty_result_is_not_found() {
    let mock_server = MockServer::start().await;
    let client = connect(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/api/persons"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&mock_server)
        .await;

    let err = client.get_person_by_external_id("0000000").await.unwrap_err();

    match err {
        EthosError::NotFound { entity_type, id } => {
            assert_eq!(entity_type, "person");
            assert_eq!(id, "0000000");
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_get_trait_matches_client_method() {
    let mock_server = MockServer::start().await;
    let client = connect(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/api/persons"))
        .and(query_param("criteria", CRITERIA_0123456))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([{"id": "person-guid-1"}])),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let person = Person::get(&client, "0123456".to_string()).await.unwrap();
    assert_eq!(person.guid(), "person-guid-1");
}

#[tokio::test]
async fn test_get_person_server_error_is_remote() {
    let mock_server = MockServer::start().await;
    let client = connect(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/api/persons"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Colleague unavailable"))
        .mount(&mock_server)
        .await;

    let err = client.get_person_by_external_id("0123456").await.unwrap_err();
    assert!(matches!(
        err,
        EthosError::Remote { status_code: 503, ref body } if body == "Colleague unavailable"
    ));
}

#[tokio::test]
async fn test_get_person_malformed_body_is_parse_error() {
    let mock_server = MockServer::start().await;
    let client = connect(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/api/persons"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"not": "an array"}"#))
        .mount(&mock_server)
        .await;

    let err = client.get_person_by_external_id("0123456").await.unwrap_err();
    assert!(matches!(err, EthosError::ParseError(_)), "unexpected error: {err:?}");
}
