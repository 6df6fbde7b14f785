//! Application configuration options

use std::env;
use std::time::Duration;

use secrecy::SecretString;

/// Main application options
#[derive(Debug, Clone)]
pub struct AppOptions {
    /// HTTP server configuration
    pub server: ServerOptions,

    /// Execution agent configuration
    pub agent: AgentOptions,

    /// Authentication configuration
    pub auth: AuthOptions,

    /// Load the demo device catalog at startup
    pub seed_demo_devices: bool,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            server: ServerOptions::default(),
            agent: AgentOptions::default(),
            auth: AuthOptions::default(),
            seed_demo_devices: true,
        }
    }
}

impl AppOptions {
    /// Build options from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server: ServerOptions {
                host: env_or("BIND_HOST", defaults.server.host),
                port: env_parse("BIND_PORT", defaults.server.port),
            },
            agent: AgentOptions {
                base_url: env_or("DEVICE_AGENT_URL", defaults.agent.base_url),
                request_timeout: Duration::from_secs(env_parse(
                    "AGENT_TIMEOUT_SECS",
                    defaults.agent.request_timeout.as_secs(),
                )),
            },
            auth: AuthOptions {
                jwt_secret: env::var("JWT_SECRET")
                    .map(SecretString::from)
                    .unwrap_or(defaults.auth.jwt_secret),
                token_ttl_secs: env_parse("TOKEN_TTL_SECS", defaults.auth.token_ttl_secs),
            },
            seed_demo_devices: env_parse("SEED_DEMO_DEVICES", defaults.seed_demo_devices),
        }
    }
}

/// Local HTTP server options
#[derive(Debug, Clone)]
pub struct ServerOptions {
    /// Host to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// Execution agent options
#[derive(Debug, Clone)]
pub struct AgentOptions {
    /// Base URL of the execution agent
    pub base_url: String,

    /// Timeout applied to agent requests
    pub request_timeout: Duration,
}

impl Default for AgentOptions {
    fn default() -> Self {
        Self {
            // Local development default; in compose this is the agent service URL
            base_url: "http://localhost:8001".to_string(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Authentication options
#[derive(Debug, Clone)]
pub struct AuthOptions {
    /// HS256 signing key for access tokens
    pub jwt_secret: SecretString,

    /// Access token lifetime in seconds
    pub token_ttl_secs: i64,
}

impl Default for AuthOptions {
    fn default() -> Self {
        Self {
            jwt_secret: SecretString::from("dev-only-signing-key-change-me"),
            token_ttl_secs: 3600,
        }
    }
}

fn env_or(key: &str, default: String) -> String {
    env::var(key).unwrap_or(default)
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(default)
}
