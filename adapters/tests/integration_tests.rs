//! End-to-end exchange tests against a mocked vendor core

use adapters::{Error, IntegrationOrchestrator};
use integration_core::{
    AuthConfig, FieldMapping, IntegrationConfig, IntegrationQueueItem, IntegrationRequest,
    IntegrationStore, MappingDirection, MemoryStore, QueueStatus, RetryPolicy, TransformRule,
    VendorType,
};
use rust_decimal_macros::dec;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn vendor_config(id: &str, vendor: VendorType, base_url: &str) -> IntegrationConfig {
    IntegrationConfig {
        id: id.to_string(),
        name: format!("{} test core", vendor),
        vendor,
        base_url: base_url.to_string(),
        api_version: "v1".to_string(),
        auth: AuthConfig::ApiKey {
            key: "k-123".to_string(),
            header: "X-API-Key".to_string(),
        },
        timeout_ms: 2_000,
        retry: RetryPolicy {
            max_retries: 3,
            base_backoff_ms: 100,
        },
        active: true,
    }
}

fn amount_mapping(config_id: &str) -> FieldMapping {
    FieldMapping {
        config_id: config_id.to_string(),
        canonical_field: "amount".to_string(),
        vendor_field: "Amount".to_string(),
        transform: TransformRule::NumericScale { factor: dec!(100) },
        direction: MappingDirection::Bidirectional,
        required: true,
        default_value: None,
    }
}

fn request(config_id: &str, queue_id: Option<&str>) -> IntegrationRequest {
    IntegrationRequest {
        operation: "create_payment".to_string(),
        config_id: config_id.to_string(),
        payload: json!({"amount": 50.5}),
        queue_id: queue_id.map(str::to_string),
    }
}

#[tokio::test]
async fn test_end_to_end_temenos_payment() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/create_payment"))
        .and(header("X-API-Key", "k-123"))
        .and(body_partial_json(json!({"body": {"Amount": 5050}})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"body": {"Amount": 5050, "Status": "OK"}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let store = Arc::new(MemoryStore::new());
    store
        .put_config(vendor_config("cfg-t24", VendorType::Temenos, &server.uri()))
        .await;
    store.put_mapping(amount_mapping("cfg-t24")).await;
    store
        .put_queue_item(IntegrationQueueItem::pending("q-1", "cfg-t24", "create_payment"))
        .await;

    let orchestrator = IntegrationOrchestrator::new(store.clone()).unwrap();
    let response = orchestrator
        .execute(request("cfg-t24", Some("q-1")))
        .await
        .unwrap();

    assert!(response.success);
    assert_eq!(response.status_code, Some(200));
    assert_eq!(response.data, json!({"amount": 50.5}));
    assert_eq!(response.raw_response, json!({"Amount": 5050, "Status": "OK"}));
    assert!(response.error.is_none());

    let item = store.get_queue_item("q-1").await.unwrap().unwrap();
    assert_eq!(item.status, QueueStatus::Completed);
    assert_eq!(item.result, Some(json!({"amount": 50.5})));
    assert!(item.started_at.is_some());
    assert!(item.completed_at.is_some());

    let audit = store.audit_log().await;
    assert_eq!(audit.len(), 1);
    assert_eq!(audit[0].operation, "create_payment");
    assert_eq!(audit[0].config_id, "cfg-t24");
    assert_eq!(audit[0].vendor, VendorType::Temenos);
    assert!(audit[0].success);
    assert_eq!(audit[0].status_code, Some(200));
}

#[tokio::test]
async fn test_server_errors_retry_with_backoff() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/create_payment"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .expect(4)
        .mount(&server)
        .await;

    let store = Arc::new(MemoryStore::new());
    store
        .put_config(vendor_config("cfg-t24", VendorType::Temenos, &server.uri()))
        .await;
    store.put_mapping(amount_mapping("cfg-t24")).await;
    store
        .put_queue_item(IntegrationQueueItem::pending("q-1", "cfg-t24", "create_payment"))
        .await;

    let orchestrator = IntegrationOrchestrator::new(store.clone()).unwrap();
    let start = Instant::now();
    let response = orchestrator
        .execute(request("cfg-t24", Some("q-1")))
        .await
        .unwrap();
    let elapsed = start.elapsed();

    // One initial attempt plus three retries, with 100/200/400ms delays
    assert_eq!(server.received_requests().await.unwrap().len(), 4);
    assert!(
        elapsed >= Duration::from_millis(700),
        "exhausted retries too fast: {:?}",
        elapsed
    );

    // The final 5xx is the vendor's answer, not a transport error
    assert!(!response.success);
    assert_eq!(response.status_code, Some(500));
    assert_eq!(response.data, json!({}));
    assert_eq!(response.raw_response, json!({"raw": "upstream exploded"}));
    assert!(response.error.unwrap().contains("500"));

    let item = store.get_queue_item("q-1").await.unwrap().unwrap();
    assert_eq!(item.status, QueueStatus::Failed);
    assert!(item.error.unwrap().contains("500"));

    let audit = store.audit_log().await;
    assert_eq!(audit.len(), 1);
    assert!(!audit[0].success);
    assert_eq!(audit[0].status_code, Some(500));
}

#[tokio::test]
async fn test_client_errors_do_not_retry() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/create_payment"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "no such account"})))
        .expect(1)
        .mount(&server)
        .await;

    let store = Arc::new(MemoryStore::new());
    store
        .put_config(vendor_config("cfg-t24", VendorType::Temenos, &server.uri()))
        .await;
    store.put_mapping(amount_mapping("cfg-t24")).await;
    store
        .put_queue_item(IntegrationQueueItem::pending("q-1", "cfg-t24", "create_payment"))
        .await;

    let orchestrator = IntegrationOrchestrator::new(store.clone()).unwrap();
    let response = orchestrator
        .execute(request("cfg-t24", Some("q-1")))
        .await
        .unwrap();

    assert_eq!(server.received_requests().await.unwrap().len(), 1);
    assert!(!response.success);
    assert_eq!(response.status_code, Some(404));

    let item = store.get_queue_item("q-1").await.unwrap().unwrap();
    assert_eq!(item.status, QueueStatus::Failed);
    assert!(item.error.unwrap().contains("404"));

    let audit = store.audit_log().await;
    assert_eq!(audit.len(), 1);
    assert!(!audit[0].success);
    assert_eq!(audit[0].status_code, Some(404));
}

#[tokio::test]
async fn test_network_failure_exhausts_retries() {
    // Grab a port that nothing listens on anymore (a builder-made server is not
    // pooled, so dropping it actually shuts the listener down)
    let server = MockServer::builder().start().await;
    let base_url = server.uri();
    drop(server);

    let mut config = vendor_config("cfg-t24", VendorType::Temenos, &base_url);
    config.retry = RetryPolicy {
        max_retries: 1,
        base_backoff_ms: 1,
    };

    let store = Arc::new(MemoryStore::new());
    store.put_config(config).await;
    store.put_mapping(amount_mapping("cfg-t24")).await;
    store
        .put_queue_item(IntegrationQueueItem::pending("q-1", "cfg-t24", "create_payment"))
        .await;

    let orchestrator = IntegrationOrchestrator::new(store.clone()).unwrap();
    let err = orchestrator
        .execute(request("cfg-t24", Some("q-1")))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::RetryExhausted { attempts: 2, .. }));
    assert_eq!(err.status_code(), 502);

    let item = store.get_queue_item("q-1").await.unwrap().unwrap();
    assert_eq!(item.status, QueueStatus::Failed);
    assert!(item.error.unwrap().contains("Retry exhausted"));

    let audit = store.audit_log().await;
    assert_eq!(audit.len(), 1);
    assert!(!audit[0].success);
    assert_eq!(audit[0].status_code, None);
}

#[tokio::test]
async fn test_mambu_envelope_and_enum_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/open_account"))
        .and(body_partial_json(json!({
            "data": {"attributes": {"amount": 1234, "state": "ACTIVE"}}
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": {"attributes": {"amount": 1234, "state": "ACTIVE"}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let store = Arc::new(MemoryStore::new());
    store
        .put_config(vendor_config("cfg-mambu", VendorType::Mambu, &server.uri()))
        .await;
    store
        .put_mapping(FieldMapping {
            config_id: "cfg-mambu".to_string(),
            canonical_field: "amount".to_string(),
            vendor_field: "amount".to_string(),
            transform: TransformRule::NumericScale { factor: dec!(100) },
            direction: MappingDirection::Bidirectional,
            required: true,
            default_value: None,
        })
        .await;
    store
        .put_mapping(FieldMapping {
            config_id: "cfg-mambu".to_string(),
            canonical_field: "status".to_string(),
            vendor_field: "state".to_string(),
            transform: TransformRule::EnumLookup {
                values: HashMap::from([
                    ("active".to_string(), "ACTIVE".to_string()),
                    ("closed".to_string(), "CLOSED".to_string()),
                ]),
            },
            direction: MappingDirection::Bidirectional,
            required: false,
            default_value: None,
        })
        .await;

    let orchestrator = IntegrationOrchestrator::new(store.clone()).unwrap();
    let response = orchestrator
        .execute(IntegrationRequest {
            operation: "open_account".to_string(),
            config_id: "cfg-mambu".to_string(),
            payload: json!({"amount": 12.34, "status": "active"}),
            queue_id: None,
        })
        .await
        .unwrap();

    assert!(response.success);
    assert_eq!(response.status_code, Some(201));
    assert_eq!(response.data, json!({"amount": 12.34, "status": "active"}));
    assert_eq!(response.raw_response, json!({"amount": 1234, "state": "ACTIVE"}));
}
