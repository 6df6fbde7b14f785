//! Dispatch orchestration tests

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::post;
use axum::Router;
use serde_json::json;

use device_gateway::catalog::store::DeviceStore;
use device_gateway::dispatch::orchestrator::Dispatcher;
use device_gateway::dispatch::DispatchError;
use device_gateway::http::client::{ExecutionResult, HttpAgentClient};
use device_gateway::models::device::Device;

use crate::common::{soil_sensor, MockAgent};

fn dispatcher_with(device: Device, agent: Arc<MockAgent>) -> Dispatcher {
    let store = Arc::new(DeviceStore::new());
    store.create(device);
    Dispatcher::new(store, agent)
}

#[tokio::test]
async fn test_successful_dispatch_passes_result_through() {
    let agent = Arc::new(MockAgent::replying(ExecutionResult::ok("42".to_string(), 7)));
    let dispatcher = dispatcher_with(soil_sensor(), agent.clone());

    let mut parameters = HashMap::new();
    parameters.insert("sensor_type".to_string(), json!("humidity"));

    let result = dispatcher
        .dispatch("sensor-soil-001", "READ_HUMIDITY", parameters)
        .await
        .unwrap();

    assert!(result.success);
    assert_eq!(result.response.as_deref(), Some("42"));
    assert!(result.error.is_none());
    assert_eq!(agent.call_count(), 1);
}

#[tokio::test]
async fn test_dispatch_sends_literal_command_and_address() {
    let agent = Arc::new(MockAgent::replying(ExecutionResult::ok(String::new(), 0)));
    let dispatcher = dispatcher_with(soil_sensor(), agent.clone());

    let mut parameters = HashMap::new();
    parameters.insert("sensor_type".to_string(), json!("humidity"));

    dispatcher
        .dispatch("sensor-soil-001", "READ_HUMIDITY", parameters)
        .await
        .unwrap();

    let request = agent.last_request().unwrap();
    // The agent receives the literal command token, not the operation name
    assert_eq!(request.command, "READ");
    assert_eq!(request.device_id, "sensor-soil-001");
    assert_eq!(request.device_host, "192.168.1.100");
    assert_eq!(request.device_port, 23);
    assert_eq!(request.parameters.get("sensor_type"), Some(&json!("humidity")));
}

#[tokio::test]
async fn test_unknown_device_short_circuits() {
    let agent = Arc::new(MockAgent::replying(ExecutionResult::ok(String::new(), 0)));
    let dispatcher = dispatcher_with(soil_sensor(), agent.clone());

    let err = dispatcher
        .dispatch("ghost-001", "READ_HUMIDITY", HashMap::new())
        .await
        .unwrap_err();

    assert_eq!(err, DispatchError::DeviceNotFound("ghost-001".to_string()));
    assert_eq!(agent.call_count(), 0);
}

#[tokio::test]
async fn test_unknown_operation_short_circuits() {
    let agent = Arc::new(MockAgent::replying(ExecutionResult::ok(String::new(), 0)));
    let dispatcher = dispatcher_with(soil_sensor(), agent.clone());

    let err = dispatcher
        .dispatch("sensor-soil-001", "DOES_NOT_EXIST", HashMap::new())
        .await
        .unwrap_err();

    assert!(matches!(err, DispatchError::UnknownOperation { .. }));
    assert_eq!(agent.call_count(), 0);
}

#[tokio::test]
async fn test_malformed_device_url_short_circuits() {
    let mut device = soil_sensor();
    device.url = "telnet://bad host".to_string();

    let agent = Arc::new(MockAgent::replying(ExecutionResult::ok(String::new(), 0)));
    let dispatcher = dispatcher_with(device, agent.clone());

    let err = dispatcher
        .dispatch("sensor-soil-001", "READ_HUMIDITY", HashMap::new())
        .await
        .unwrap_err();

    assert!(matches!(err, DispatchError::InvalidAddress { .. }));
    assert_eq!(agent.call_count(), 0);
}

#[tokio::test]
async fn test_device_failure_passes_error_through() {
    let agent = Arc::new(MockAgent::replying(ExecutionResult::failure(
        "ERROR: sensor offline".to_string(),
        3,
    )));
    let dispatcher = dispatcher_with(soil_sensor(), agent.clone());

    let result = dispatcher
        .dispatch("sensor-soil-001", "READ_HUMIDITY", HashMap::new())
        .await
        .unwrap();

    assert!(!result.success);
    assert!(result.response.is_none());
    assert_eq!(result.error.as_deref(), Some("ERROR: sensor offline"));
}

/// Serve a canned agent on an ephemeral local port, returning its base URL
async fn spawn_agent_stub(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn dispatch_via_stub(router: Router) -> ExecutionResult {
    let base_url = spawn_agent_stub(router).await;
    let agent = Arc::new(HttpAgentClient::new(&base_url, Duration::from_secs(2)).unwrap());
    let store = Arc::new(DeviceStore::new());
    store.create(soil_sensor());
    let dispatcher = Dispatcher::new(store, agent);

    dispatcher
        .dispatch("sensor-soil-001", "READ_HUMIDITY", HashMap::new())
        .await
        .unwrap()
}

#[tokio::test]
async fn test_agent_error_status_is_surfaced() {
    let router = Router::new().route(
        "/api/execute",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "telnet session pool exhausted") }),
    );

    let result = dispatch_via_stub(router).await;

    assert!(!result.success);
    assert!(result.response.is_none());
    let error = result.error.unwrap();
    assert!(
        error.contains("agent returned 500"),
        "unexpected error text: {}",
        error
    );
    assert!(error.contains("telnet session pool exhausted"));
}

#[tokio::test]
async fn test_non_json_agent_reply_is_malformed() {
    let router = Router::new().route("/api/execute", post(|| async { "OK TEMP=25.5C" }));

    let result = dispatch_via_stub(router).await;

    assert!(!result.success);
    assert_eq!(
        result.error.as_deref(),
        Some("malformed or empty agent response")
    );
}

#[tokio::test]
async fn test_empty_agent_reply_is_malformed() {
    let router = Router::new().route("/api/execute", post(|| async { "" }));

    let result = dispatch_via_stub(router).await;

    assert!(!result.success);
    assert_eq!(
        result.error.as_deref(),
        Some("malformed or empty agent response")
    );
    assert!(result.execution_time_ms.is_some());
}

#[tokio::test]
async fn test_unreachable_agent_yields_communication_failure() {
    // Nothing listens on this port; the connection is refused immediately
    let agent = Arc::new(
        HttpAgentClient::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap(),
    );
    let store = Arc::new(DeviceStore::new());
    store.create(soil_sensor());
    let dispatcher = Dispatcher::new(store, agent);

    let result = dispatcher
        .dispatch("sensor-soil-001", "READ_HUMIDITY", HashMap::new())
        .await
        .unwrap();

    assert!(!result.success);
    let error = result.error.unwrap();
    assert!(
        error.contains("agent communication failure"),
        "unexpected error text: {}",
        error
    );
    assert!(result.execution_time_ms.is_some());
}
