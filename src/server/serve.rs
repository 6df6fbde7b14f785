//! HTTP server setup

use std::future::Future;
use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::app::options::ServerOptions;
use crate::errors::GatewayError;
use crate::server::auth::require_auth;
use crate::server::handlers::{
    create_device_handler, delete_device_handler, execute_handler, get_device_handler,
    health_handler, list_devices_handler, login_handler, update_device_handler, validate_handler,
};
use crate::server::state::ServerState;

/// Build the application router
pub fn build_router(state: Arc<ServerState>) -> Router {
    // Catalog and dispatch routes sit behind the bearer-token gate
    let device_routes = Router::new()
        .route("/api/devices", get(list_devices_handler).post(create_device_handler))
        .route(
            "/api/devices/{id}",
            get(get_device_handler)
                .put(update_device_handler)
                .delete(delete_device_handler),
        )
        .route("/api/devices/{id}/execute", post(execute_handler))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        // Health and auth
        .route("/health", get(health_handler))
        .route("/api/auth/login", post(login_handler))
        .route("/api/auth/validate", post(validate_handler))
        .merge(device_routes)
        // State and middleware
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Start the HTTP server
pub async fn serve(
    options: &ServerOptions,
    state: Arc<ServerState>,
    shutdown_signal: impl Future<Output = ()> + Send + 'static,
) -> Result<JoinHandle<Result<(), GatewayError>>, GatewayError> {
    let app = build_router(state);

    let addr = format!("{}:{}", options.host, options.port);
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| GatewayError::ServerError(e.to_string()))?;

    let handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal)
            .await
            .map_err(|e| GatewayError::ServerError(e.to_string()))
    });

    Ok(handle)
}
