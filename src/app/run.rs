//! Main application run loop

use std::future::Future;
use std::sync::Arc;

use tracing::info;

use crate::app::options::AppOptions;
use crate::authn::service::AuthService;
use crate::authn::users::UserStore;
use crate::catalog::seed::seed_demo_devices;
use crate::catalog::store::DeviceStore;
use crate::dispatch::orchestrator::Dispatcher;
use crate::errors::GatewayError;
use crate::http::client::HttpAgentClient;
use crate::server::serve::serve;
use crate::server::state::ServerState;

/// Run the device gateway until the shutdown signal fires
pub async fn run(
    options: AppOptions,
    shutdown_signal: impl Future<Output = ()> + Send + 'static,
) -> Result<(), GatewayError> {
    info!("Initializing device gateway...");

    let store = Arc::new(DeviceStore::new());
    if options.seed_demo_devices {
        seed_demo_devices(&store);
    }

    let agent = Arc::new(HttpAgentClient::new(
        &options.agent.base_url,
        options.agent.request_timeout,
    )?);
    info!("Execution agent URL configured: {}", agent.base_url());

    let dispatcher = Arc::new(Dispatcher::new(store.clone(), agent));

    let auth = Arc::new(AuthService::new(
        UserStore::with_demo_users(),
        options.auth.jwt_secret.clone(),
        options.auth.token_ttl_secs,
    ));

    let state = Arc::new(ServerState::new(store, dispatcher, auth));

    let handle = serve(&options.server, state, shutdown_signal).await?;
    handle
        .await
        .map_err(|e| GatewayError::ServerError(e.to_string()))?
}
