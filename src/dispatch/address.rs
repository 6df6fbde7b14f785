//! Device address parsing
//!
//! Device URLs have the form `scheme://host[:port]`. When the port is
//! omitted the conventional Telnet port applies. Unparseable URLs and
//! empty hosts are hard validation failures, reported before any agent
//! call is attempted.

use url::Url;

use crate::dispatch::DispatchError;

/// Default port for raw-socket device protocols
pub const DEFAULT_DEVICE_PORT: u16 = 23;

/// A resolved device network address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceAddress {
    pub host: String,
    pub port: u16,
}

impl DeviceAddress {
    /// Parse a device connection URL into host and port
    pub fn parse(raw: &str) -> Result<Self, DispatchError> {
        let url = Url::parse(raw).map_err(|e| DispatchError::InvalidAddress {
            url: raw.to_string(),
            reason: e.to_string(),
        })?;

        let host = match url.host_str() {
            Some(host) if !host.is_empty() => host.to_string(),
            _ => {
                return Err(DispatchError::InvalidAddress {
                    url: raw.to_string(),
                    reason: "empty host".to_string(),
                })
            }
        };

        Ok(Self {
            host,
            port: url.port().unwrap_or(DEFAULT_DEVICE_PORT),
        })
    }
}

impl std::fmt::Display for DeviceAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}
