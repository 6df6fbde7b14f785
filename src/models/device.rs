//! Device catalog records
//!
//! A `Device` describes one remotely reachable IoT endpoint: its raw-socket
//! address (`telnet://host[:port]`) and the ordered list of commands it
//! understands. The `operation` field of each [`CommandSpec`] is the
//! public-facing selector; the nested [`LiteralCommand`] carries the exact
//! token the execution agent writes to the device.

use serde::{Deserialize, Serialize};

/// A registered IoT device
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    /// Unique, stable identifier (generated when absent on create)
    #[serde(default)]
    pub identifier: String,

    /// Human description of the device and its use
    #[serde(default)]
    pub description: String,

    /// Manufacturer name
    #[serde(default)]
    pub manufacturer: String,

    /// Connection URL, e.g. `telnet://192.168.1.100:23`
    pub url: String,

    /// Commands available on the device
    #[serde(default)]
    pub commands: Vec<CommandSpec>,
}

/// One operation a device supports
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandSpec {
    /// Public operation name, unique within a device's command list
    pub operation: String,

    /// Description of the operation
    #[serde(default)]
    pub description: String,

    /// The command actually sent to the device
    pub command: LiteralCommand,

    /// Description of the expected result
    #[serde(default)]
    pub result: String,

    /// Optional response-format schema, opaque to the gateway
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<serde_json::Value>,
}

/// The literal token sequence sent to the physical device
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiteralCommand {
    /// Byte sequence written to the device, e.g. `READ_TEMP`
    pub command: String,

    /// Parameters the command accepts
    #[serde(default)]
    pub parameters: Vec<ParameterSpec>,
}

/// A named command parameter
///
/// Carries no type or requiredness; caller-supplied values pass through to
/// the agent verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterSpec {
    pub name: String,

    #[serde(default)]
    pub description: String,
}
