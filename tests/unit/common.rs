//! Shared test fixtures

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use device_gateway::http::client::{AgentClient, ExecuteRequest, ExecutionResult};
use device_gateway::models::device::{CommandSpec, Device, LiteralCommand, ParameterSpec};

/// Agent test double that records calls and returns a canned result
pub struct MockAgent {
    calls: AtomicUsize,
    last_request: Mutex<Option<ExecuteRequest>>,
    reply: ExecutionResult,
}

impl MockAgent {
    pub fn replying(reply: ExecutionResult) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
            reply,
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<ExecuteRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl AgentClient for MockAgent {
    async fn execute(&self, request: &ExecuteRequest) -> ExecutionResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());
        self.reply.clone()
    }
}

/// Soil sensor with a READ_HUMIDITY operation mapped to the literal
/// command READ
pub fn soil_sensor() -> Device {
    Device {
        identifier: "sensor-soil-001".to_string(),
        description: "Soil humidity sensor".to_string(),
        manufacturer: "SoilTech Industries".to_string(),
        url: "telnet://192.168.1.100:23".to_string(),
        commands: vec![CommandSpec {
            operation: "READ_HUMIDITY".to_string(),
            description: "Read the soil humidity value".to_string(),
            command: LiteralCommand {
                command: "READ".to_string(),
                parameters: vec![ParameterSpec {
                    name: "sensor_type".to_string(),
                    description: "Sensor type".to_string(),
                }],
            },
            result: "Percentage value".to_string(),
            format: None,
        }],
    }
}
