//! Ending holds by hold type GUID and by hold type code.
//!
//! Uses wiremock to mock the Ethos proxy and inspects the PUT bodies it
//! receives.

use chrono::{DateTime, SubsecRound, Utc};
use ethos_client::{EthosClient, EthosConfig, EthosError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

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

/// Person 0123456 with three holds. `hold-literal` is typed with the
/// literal string "ACC" so that passing the code where a GUID belongs
/// would select it instead of `hold-acc`.
async fn mount_scenario(mock_server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/persons"))
        .and(query_param(
            "criteria",
            r#"{"credentials":[{"type":"colleaguePersonId","value":"0123456"}]}"#,
        ))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!([{"id": "person-guid-1"}])),
        )
        .mount(mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/person-holds"))
        .and(query_param("person", "person-guid-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "id": "hold-literal",
                "type": {"category": "academic", "detail": {"id": "ACC"}},
                "person": {"id": "person-guid-1"}
            },
            {
                "id": "hold-bus",
                "type": {"category": "financial", "detail": {"id": "type-guid-bus"}},
                "person": {"id": "person-guid-1"}
            },
            {
                "id": "hold-acc",
                "type": {"category": "academic", "detail": {"id": "type-guid-acc"}},
                "person": {"id": "person-guid-1"},
                "comment": "placed by advising office"
            }
        ])))
        .mount(mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/person-hold-types"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": "type-guid-bus", "code": "BUS"},
            {"id": "type-guid-acc", "code": "ACC"}
        ])))
        .mount(mock_server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/api/person-holds/hold-acc"))
        .respond_with(ResponseTemplate::new(200))
        .mount(mock_server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/api/person-holds/hold-literal"))
        .respond_with(ResponseTemplate::new(200))
        .mount(mock_server)
        .await;
}

/// The single PUT the mock received: its path and decoded body.
async fn only_put(mock_server: &MockServer) -> (String, serde_json::Value) {
    let requests = mock_server.received_requests().await.unwrap();
    let puts: Vec<_> = requests
        .iter()
        .filter(|r| r.method.as_str() == "PUT")
        .collect();
    assert_eq!(puts.len(), 1, "expected exactly one PUT");

    let body = serde_json::from_slice(&puts[0].body).unwrap();
    (puts[0].url.path().to_string(), body)
}

fn end_on(body: &serde_json::Value) -> DateTime<Utc> {
    body["endOn"]
        .as_str()
        .expect("endOn should be set")
        .parse()
        .expect("endOn should be an RFC 3339 timestamp")
}

#[tokio::test]
async fn test_end_by_code_uses_resolved_guid() {
    let mock_server = MockServer::start().await;
    let client = connect(&mock_server).await;
    mount_scenario(&mock_server).await;

    let ended = client
        .end_hold_by_external_id_and_type_code("0123456", "ACC", "Met with advisor")
        .await
        .unwrap();

    assert_eq!(ended.guid(), Some("hold-acc"));

    let (put_path, body) = only_put(&mock_server).await;
    assert_eq!(put_path, "/api/person-holds/hold-acc");
    assert_eq!(body["id"], "hold-acc");
    assert_eq!(body["type"]["detail"]["id"], "type-guid-acc");
    assert_eq!(body["comment"], "Met with advisor");
}

#[tokio::test]
async fn test_end_by_guid_sets_call_time_and_comment() {
    let mock_server = MockServer::start().await;
    let client = connect(&mock_server).await;
    mount_scenario(&mock_server).await;

    let before = Utc::now().trunc_subsecs(0);
    client
        .end_hold_by_external_id_and_type_guid("0123456", "type-guid-acc", "Cleared")
        .await
        .unwrap();
    let after = Utc::now();

    let (put_path, body) = only_put(&mock_server).await;
    assert_eq!(put_path, "/api/person-holds/hold-acc");

    let ended_at = end_on(&body);
    assert!(before <= ended_at && ended_at <= after);
    assert_eq!(body["comment"], "Cleared");
    assert_eq!(body["person"]["id"], "person-guid-1");
}

#[tokio::test]
async fn test_end_without_comment_leaves_comment_untouched() {
    let mock_server = MockServer::start().await;
    let client = connect(&mock_server).await;
    mount_scenario(&mock_server).await;

    client
        .end_hold_by_external_id_and_type_guid("0123456", "type-guid-acc", "")
        .await
        .unwrap();

    let (_, body) = only_put(&mock_server).await;
    assert_eq!(body["comment"], "placed by advising office");
    let _ = end_on(&body);
}

#[tokio::test]
async fn test_end_without_comment_on_uncommented_hold_sends_none() {
    let mock_server = MockServer::start().await;
    let client = connect(&mock_server).await;
    mount_scenario(&mock_server).await;

    client
        .end_hold_by_external_id_and_type_guid("0123456", "ACC", "")
        .await
        .unwrap();

    let (put_path, body) = only_put(&mock_server).await;
    assert_eq!(put_path, "/api/person-holds/hold-literal");
    assert!(body.get("comment").is_none());
}

#[tokio::test]
async fn test_end_missing_hold_is_not_found_and_sends_nothing() {
    let mock_server = MockServer::start().await;
    let client = connect(&mock_server).await;
    mount_scenario(&mock_server).await;

    let err = client
        .end_hold_by_external_id_and_type_guid("0123456", "type-guid-reg", "x")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        EthosError::NotFound {
            entity_type: "person hold",
            ..
        }
    ));

    let requests = mock_server.received_requests().await.unwrap();
    assert!(requests.iter().all(|r| r.method.as_str() != "PUT"));
}

#[tokio::test]
async fn test_end_by_unknown_code_is_not_found() {
    let mock_server = MockServer::start().await;
    let client = connect(&mock_server).await;
    mount_scenario(&mock_server).await;

    let err = client
        .end_hold_by_external_id_and_type_code("0123456", "REG", "")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        EthosError::NotFound {
            entity_type: "hold type",
            ..
        }
    ));
}

#[tokio::test]
async fn test_end_resubmits_start_on_unchanged() {
    let mock_server = MockServer::start().await;
    let client = connect(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/api/persons"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!([{"id": "person-guid-1"}])),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/person-holds"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "id": "hold-local",
                "type": {"detail": {"id": "type-guid-acc"}},
                "startOn": "2024-01-15T00:00:00-05:00"
            }
        ])))
        .mount(&mock_server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/api/person-holds/hold-local"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    client
        .end_hold_by_external_id_and_type_guid("0123456", "type-guid-acc", "")
        .await
        .unwrap();

    let (_, body) = only_put(&mock_server).await;
    assert_eq!(body["startOn"], "2024-01-15T00:00:00-05:00");
}

#[tokio::test]
async fn test_end_skips_over_irregular_holds() {
    let mock_server = MockServer::start().await;
    let client = connect(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/api/persons"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!([{"id": "person-guid-1"}])),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/person-holds"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "id": "hold-naive",
                "type": {"detail": {"id": "type-guid-bus"}},
                "startOn": "2024-01-15T00:00:00"
            },
            {"id": "hold-no-detail-id", "type": {"detail": {}}},
            {
                "id": "hold-acc",
                "type": {"detail": {"id": "type-guid-acc"}},
                "startOn": "2024-01-15"
            }
        ])))
        .mount(&mock_server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/api/person-holds/hold-acc"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let holds = client.get_holds_by_person_guid("person-guid-1").await.unwrap();
    assert_eq!(holds.len(), 3);
    assert_eq!(holds[0].start_on.as_deref(), Some("2024-01-15T00:00:00"));
    assert_eq!(holds[1].type_guid(), None);

    client
        .end_hold_by_external_id_and_type_guid("0123456", "type-guid-acc", "")
        .await
        .unwrap();

    let (_, body) = only_put(&mock_server).await;
    assert_eq!(body["startOn"], "2024-01-15");
}
