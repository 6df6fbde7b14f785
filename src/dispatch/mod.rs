//! Command-dispatch core
//!
//! Validates that a requested operation is legal for a device, translates
//! the operation name into the literal device command, and delegates
//! execution to the external agent.

pub mod address;
pub mod orchestrator;
pub mod resolver;

use thiserror::Error;

/// Failures detected before any agent call is attempted.
///
/// Agent-boundary failures are not represented here; they come back as a
/// failed `ExecutionResult` from the dispatch client.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("device not found: {0}")]
    DeviceNotFound(String),

    #[error("operation {operation} is not recognized for device {device_id}")]
    UnknownOperation {
        device_id: String,
        operation: String,
    },

    #[error("malformed device address {url}: {reason}")]
    InvalidAddress { url: String, reason: String },
}
