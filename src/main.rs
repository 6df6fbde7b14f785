//! Device Gateway - Entry Point
//!
//! HTTP gateway exposing a catalog of Telnet-managed IoT devices and
//! dispatching command execution to the downstream device agent.

use std::collections::HashMap;
use std::env;

use device_gateway::app::options::AppOptions;
use device_gateway::app::run::run;
use device_gateway::logs::{init_logging, LogOptions};
use device_gateway::utils::version_info;

use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let mut cli_args: HashMap<String, String> = HashMap::new();

    for arg in args.iter().skip(1) {
        if let Some((key, value)) = arg.split_once('=') {
            // Handle --key=value format
            let clean_key = key.trim_start_matches('-');
            cli_args.insert(clean_key.to_string(), value.to_string());
        } else if arg.starts_with("--") {
            // Handle standalone flags like --version
            let clean_key = arg.trim_start_matches('-');
            cli_args.insert(clean_key.to_string(), "true".to_string());
        }
    }

    // Print version and exit
    let version = version_info();
    if cli_args.contains_key("version") {
        println!("{}", serde_json::to_string_pretty(&version).unwrap());
        return;
    }

    // Initialize logging
    let log_options = LogOptions {
        log_level: cli_args
            .get("log-level")
            .or_else(|| cli_args.get("log_level"))
            .cloned()
            .or_else(|| env::var("LOG_LEVEL").ok())
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default(),
        json_format: cli_args.contains_key("log-json"),
    };
    if let Err(e) = init_logging(log_options) {
        println!("Failed to initialize logging: {e}");
    }

    // Build options from environment, with CLI overrides
    let mut options = AppOptions::from_env();
    if let Some(host) = cli_args.get("host") {
        options.server.host = host.clone();
    }
    if let Some(port) = cli_args.get("port").and_then(|raw| raw.parse().ok()) {
        options.server.port = port;
    }
    if let Some(agent_url) = cli_args.get("agent-url") {
        options.agent.base_url = agent_url.clone();
    }
    if let Some(seed) = cli_args.get("seed").and_then(|raw| raw.parse().ok()) {
        options.seed_demo_devices = seed;
    }

    info!(
        "Running device gateway v{} on {}:{}",
        version.version, options.server.host, options.server.port
    );
    let result = run(options, await_shutdown_signal()).await;
    if let Err(e) = result {
        error!("Failed to run the gateway: {e}");
    }
}

async fn await_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm = signal(SignalKind::terminate()).unwrap();
        let mut sigint = signal(SignalKind::interrupt()).unwrap();

        tokio::select! {
            _ = sigterm.recv() => {
                info!("SIGTERM received, shutting down...");
            }
            _ = sigint.recv() => {
                info!("SIGINT received, shutting down...");
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Ctrl+C received, shutting down...");
            }
        }
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
        info!("Ctrl+C received, shutting down...");
    }
}
