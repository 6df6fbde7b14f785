//! Execution agent client
//!
//! The agent is the external process holding the real Telnet session to the
//! device; the gateway treats it as an opaque remote collaborator with a
//! single request/response contract. Every possible outcome of the remote
//! call, including transport failures, is normalized into one
//! [`ExecutionResult`] shape. No errors escape [`AgentClient::execute`],
//! and no retries are performed (at-most-once per dispatch).

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::errors::GatewayError;

/// Request payload sent to the agent's execute endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecuteRequest {
    /// Device identifier, forwarded for agent-side logging
    pub device_id: String,

    /// Device host (IP or hostname)
    pub device_host: String,

    /// Device port
    pub device_port: u16,

    /// The literal command token, not the operation name
    pub command: String,

    /// Caller-supplied parameters, passed through without coercion
    pub parameters: HashMap<String, serde_json::Value>,
}

/// Response body the agent is expected to return
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentReply {
    pub success: bool,

    #[serde(default)]
    pub response: Option<String>,

    #[serde(default)]
    pub error: Option<String>,
}

/// Normalized outcome of one dispatch attempt.
///
/// Exactly one of `response` / `error` is present: `response` when
/// `success` is true (an explicit empty string when the device sent
/// nothing), `error` when it is false.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionResult {
    pub success: bool,

    #[serde(default)]
    pub response: Option<String>,

    #[serde(default)]
    pub error: Option<String>,

    #[serde(default)]
    pub execution_time_ms: Option<u64>,
}

impl ExecutionResult {
    pub fn ok(response: String, elapsed_ms: u64) -> Self {
        Self {
            success: true,
            response: Some(response),
            error: None,
            execution_time_ms: Some(elapsed_ms),
        }
    }

    pub fn failure(error: String, elapsed_ms: u64) -> Self {
        Self {
            success: false,
            response: None,
            error: Some(error),
            execution_time_ms: Some(elapsed_ms),
        }
    }
}

/// Boundary to the execution agent, a trait so dispatch logic can be
/// exercised against a test double
#[async_trait]
pub trait AgentClient: Send + Sync {
    async fn execute(&self, request: &ExecuteRequest) -> ExecutionResult;
}

/// Agent client backed by HTTP
pub struct HttpAgentClient {
    client: Client,
    base_url: String,
}

impl HttpAgentClient {
    /// Create a new agent client
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, GatewayError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Get the agent base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl AgentClient for HttpAgentClient {
    async fn execute(&self, request: &ExecuteRequest) -> ExecutionResult {
        let url = format!("{}/api/execute", self.base_url);
        debug!("POST {}", url);

        info!(
            "Sending command {} to device {} at {}:{} via agent",
            request.command, request.device_id, request.device_host, request.device_port
        );

        let started = Instant::now();

        let response = match self.client.post(&url).json(request).send().await {
            Ok(response) => response,
            Err(e) => {
                // Connection refused, DNS failure, timeout
                error!("Failed to reach execution agent: {}", e);
                return ExecutionResult::failure(
                    format!("agent communication failure: {}", e),
                    elapsed_ms(started),
                );
            }
        };

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!("Agent returned {}: {}", status, body);
            return ExecutionResult::failure(
                format!("agent returned {}: {}", status, body),
                elapsed_ms(started),
            );
        }

        let reply = match response.json::<AgentReply>().await {
            Ok(reply) => reply,
            Err(e) => {
                error!("Malformed agent response: {}", e);
                return ExecutionResult::failure(
                    "malformed or empty agent response".to_string(),
                    elapsed_ms(started),
                );
            }
        };

        info!(
            "Command {} executed - success: {}",
            request.command, reply.success
        );
        normalize_reply(reply, elapsed_ms(started))
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    started.elapsed().as_millis() as u64
}

/// Map a well-formed agent reply into the result shape, enforcing the
/// response/error exclusivity invariant
fn normalize_reply(reply: AgentReply, elapsed_ms: u64) -> ExecutionResult {
    if reply.success {
        ExecutionResult::ok(reply.response.unwrap_or_default(), elapsed_ms)
    } else {
        // Device-level error text is surfaced as the agent reported it
        ExecutionResult::failure(
            reply
                .error
                .unwrap_or_else(|| "device reported failure without detail".to_string()),
            elapsed_ms,
        )
    }
}
