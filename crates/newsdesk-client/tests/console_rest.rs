//! End-to-end tests over a live local HTTP server.
//!
//! These exercise the real `reqwest` transport against wiremock, covering
//! the CRUD surface of every configuration collection plus the failure and
//! concurrency behavior of the dispatch core.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use newsdesk_client::mock::RecordingHandler;
use newsdesk_client::{
    AgencyConfig, CategoryRecord, ClientConfig, ConsoleClient, FeedEndpoint,
    HttpMethod, NrcsConfig, Outcome, RequestKind, ResourceClass, ShareConfig,
    SharePath,
};

fn client_for(server: &MockServer) -> (ConsoleClient, Arc<RecordingHandler>) {
    let handler = Arc::new(RecordingHandler::new());
    let config = ClientConfig {
        base_url: server.uri(),
        ..ClientConfig::default()
    };
    let client = ConsoleClient::new(&config, handler.clone()).unwrap();
    (client, handler)
}

fn sample_share() -> ShareConfig {
    let mut paths = HashMap::new();
    paths.insert(
        "smb".to_string(),
        SharePath {
            protocol: "smb".to_string(),
            ip: Some("10.1.2.3".to_string()),
            port: None,
            username: Some("playout".to_string()),
            password: Some("secret".to_string()),
            path: "/media/playout".to_string(),
        },
    );
    ShareConfig {
        share_id: "playout-01".to_string(),
        name: "Playout".to_string(),
        share_type: "file".to_string(),
        protocols: vec!["smb".to_string()],
        paths,
        state: Some("active".to_string()),
    }
}

#[tokio::test]
async fn share_create_sends_typed_body_and_reports_ack() {
    let server = MockServer::start().await;
    let share = sample_share();
    Mock::given(method("POST"))
        .and(path("/shares"))
        .and(body_json(&share))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_id": "playout-01",
            "ok": true,
        })))
        .mount(&server)
        .await;

    let (client, handler) = client_for(&server);
    client.shares().create(&share, Some(json!("share-modal"))).await;

    let seen = handler.envelopes();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].outcome, Outcome::Success);
    assert_eq!(seen[0].kind, RequestKind::Post);
    assert_eq!(seen[0].resource_class, ResourceClass::Storage);
    assert_eq!(seen[0].context, Some(json!("share-modal")));
    assert_eq!(seen[0].payload, Some(json!({"_id": "playout-01", "ok": true})));
}

#[tokio::test]
async fn share_item_verbs_hit_item_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/shares/playout-01"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"_id": "playout-01"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/shares/playout-01"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_id": "playout-01",
            "ok": true,
        })))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/shares/playout-01"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&server)
        .await;

    let (client, handler) = client_for(&server);
    client.shares().fetch("playout-01", None).await;
    client.shares().update("playout-01", &sample_share(), None).await;
    client.shares().delete("playout-01", None).await;

    let seen = handler.envelopes();
    assert_eq!(seen.len(), 3);
    assert!(seen.iter().all(|e| e.is_success()));
    assert_eq!(seen[0].kind, RequestKind::Get);
    assert_eq!(seen[1].kind, RequestKind::Put);
    assert_eq!(seen[2].kind, RequestKind::Delete);
}

#[tokio::test]
async fn agency_crud_round_trip() {
    let server = MockServer::start().await;
    let agency = AgencyConfig {
        id: "wire-1".to_string(),
        name: "World Wire".to_string(),
        description: None,
        config: FeedEndpoint {
            feed_type: "rss".to_string(),
            data_format: "xml".to_string(),
            url: "https://wire.example.com/rss".to_string(),
        },
    };
    Mock::given(method("POST"))
        .and(path("/agencies"))
        .and(body_json(&agency))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_id": "wire-1",
            "ok": true,
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/agencies"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{"_id": "wire-1"}])),
        )
        .mount(&server)
        .await;

    let (client, handler) = client_for(&server);
    client.agencies().create(&agency, None).await;
    client.agencies().fetch_all(None).await;

    let seen = handler.envelopes();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].kind, RequestKind::Post);
    assert_eq!(seen[1].kind, RequestKind::GetAll);
    assert!(seen.iter().all(|e| e.resource_class == ResourceClass::Agency));
    assert_eq!(seen[1].payload, Some(json!([{"_id": "wire-1"}])));
}

#[tokio::test]
async fn nrcs_update_round_trip() {
    let server = MockServer::start().await;
    let mut credentials = HashMap::new();
    credentials.insert("ip".to_string(), "10.9.8.7".to_string());
    let app = NrcsConfig {
        id: "octopus-1".to_string(),
        name: "Octopus".to_string(),
        protocol: "upload".to_string(),
        data_format: "xml".to_string(),
        credentials: Some(credentials),
    };
    Mock::given(method("PUT"))
        .and(path("/nrcs/octopus-1"))
        .and(body_json(&app))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_id": "octopus-1",
            "ok": true,
        })))
        .mount(&server)
        .await;

    let (client, handler) = client_for(&server);
    client.nrcs().update("octopus-1", &app, None).await;

    let seen = handler.envelopes();
    assert_eq!(seen[0].resource_class, ResourceClass::EditorApp);
    assert!(seen[0].is_success());
}

#[tokio::test]
async fn non_2xx_surfaces_as_failure_with_body_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/categories/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("{}"))
        .mount(&server)
        .await;

    let (client, handler) = client_for(&server);
    client
        .categories()
        .fetch("missing", Some(json!("row-42")))
        .await;

    let seen = handler.envelopes();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].outcome, Outcome::Failed);
    assert_eq!(seen[0].payload, None);
    assert_eq!(seen[0].failure_reason.as_deref(), Some("Not Found"));
    assert_eq!(seen[0].raw_response_text.as_deref(), Some("{}"));
    assert_eq!(seen[0].context, Some(json!("row-42")));
}

#[tokio::test]
async fn server_error_and_conflict_look_the_same_apart_from_reason() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/categories"))
        .respond_with(
            ResponseTemplate::new(409).set_body_string("{\"error\": \"duplicate\"}"),
        )
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/categories/c1"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let (client, handler) = client_for(&server);
    let record = CategoryRecord {
        name: "Sports".to_string(),
    };
    client.categories().create(&record, None).await;
    client.categories().delete("c1", None).await;

    let seen = handler.envelopes();
    assert_eq!(seen.len(), 2);
    assert!(seen.iter().all(|e| e.outcome == Outcome::Failed));
    assert_eq!(seen[0].failure_reason.as_deref(), Some("Conflict"));
    assert_eq!(
        seen[0].raw_response_text.as_deref(),
        Some("{\"error\": \"duplicate\"}")
    );
    assert_eq!(seen[1].failure_reason.as_deref(), Some("Internal Server Error"));
}

#[tokio::test]
async fn unknown_resource_class_reaches_backend_and_echoes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rundowns/r1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"_id": "r1"})),
        )
        .mount(&server)
        .await;

    let (client, handler) = client_for(&server);
    client
        .call(
            RequestKind::Get,
            ResourceClass::from("Rundown"),
            HttpMethod::Get,
            "/rundowns/r1",
            None,
            None,
        )
        .await;

    let seen = handler.envelopes();
    assert_eq!(seen[0].resource_class, ResourceClass::Other("Rundown".into()));
    assert!(seen[0].is_success());
}

#[tokio::test]
async fn concurrent_calls_complete_independently() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/shares"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{"_id": "s1"}])),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/nrcs"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let (client, handler) = client_for(&server);
    let shares = client.shares();
    let nrcs = client.nrcs();
    tokio::join!(
        shares.fetch_all(Some(json!("storage-tab"))),
        nrcs.fetch_all(Some(json!("editor-tab"))),
    );

    let seen = handler.envelopes();
    assert_eq!(seen.len(), 2);
    let storage = seen
        .iter()
        .find(|e| e.resource_class == ResourceClass::Storage)
        .unwrap();
    let editor = seen
        .iter()
        .find(|e| e.resource_class == ResourceClass::EditorApp)
        .unwrap();
    assert!(storage.is_success());
    assert_eq!(storage.context, Some(json!("storage-tab")));
    assert_eq!(editor.outcome, Outcome::Failed);
    assert_eq!(editor.context, Some(json!("editor-tab")));
}
