//! Dispatch orchestration
//!
//! Stateless per-request pipeline: look up the device, resolve the
//! operation, parse the device address, hand off to the agent client.
//! NotFound and address-validation failures short-circuit before any
//! network call; everything past that point comes back as a normalized
//! [`ExecutionResult`], never an error.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{info, warn};

use crate::catalog::store::DeviceStore;
use crate::dispatch::address::DeviceAddress;
use crate::dispatch::resolver::resolve_command;
use crate::dispatch::DispatchError;
use crate::http::client::{AgentClient, ExecuteRequest, ExecutionResult};

/// Coordinates command execution against the catalog and the agent.
///
/// Parameters pass through untyped; validating supplied names against the
/// command's `ParameterSpec` list would slot in here, before the agent
/// call, if stricter handling is ever wanted.
pub struct Dispatcher {
    store: Arc<DeviceStore>,
    agent: Arc<dyn AgentClient>,
}

impl Dispatcher {
    pub fn new(store: Arc<DeviceStore>, agent: Arc<dyn AgentClient>) -> Self {
        Self { store, agent }
    }

    /// Execute an operation on a device
    pub async fn dispatch(
        &self,
        device_id: &str,
        operation: &str,
        parameters: HashMap<String, serde_json::Value>,
    ) -> Result<ExecutionResult, DispatchError> {
        let device = self
            .store
            .get(device_id)
            .ok_or_else(|| DispatchError::DeviceNotFound(device_id.to_string()))?;

        let command = resolve_command(&device, operation).ok_or_else(|| {
            warn!(
                "Operation {} not recognized for device {}",
                operation, device_id
            );
            DispatchError::UnknownOperation {
                device_id: device_id.to_string(),
                operation: operation.to_string(),
            }
        })?;

        let address = DeviceAddress::parse(&device.url)?;

        info!(
            "Dispatching operation {} on device {} ({})",
            operation, device_id, address
        );

        let request = ExecuteRequest {
            device_id: device_id.to_string(),
            device_host: address.host,
            device_port: address.port,
            command: command.command.command.clone(),
            parameters,
        };

        Ok(self.agent.execute(&request).await)
    }
}
