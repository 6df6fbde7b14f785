//! HTTP request handlers

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::dispatch::DispatchError;
use crate::models::device::Device;
use crate::server::auth::bearer_token;
use crate::server::state::ServerState;
use crate::utils::version_info;

/// Generic message payload for error and confirmation responses
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

/// Health check handler
pub async fn health_handler() -> impl IntoResponse {
    let version = version_info();
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "device-gateway".to_string(),
        version: version.version,
    })
}

/// Login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Login handler
pub async fn login_handler(
    State(state): State<Arc<ServerState>>,
    Json(request): Json<LoginRequest>,
) -> impl IntoResponse {
    if request.username.trim().is_empty() || request.password.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(MessageResponse::new("Username and password are required")),
        )
            .into_response();
    }

    match state.auth.authenticate(&request.username, &request.password) {
        Ok(Some(response)) => Json(response).into_response(),
        Ok(None) => (
            StatusCode::UNAUTHORIZED,
            Json(MessageResponse::new("Invalid credentials")),
        )
            .into_response(),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(MessageResponse::new("Failed to issue token")),
        )
            .into_response(),
    }
}

/// Token validation response
#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub username: String,
    pub valid: bool,
}

/// Token validation handler
pub async fn validate_handler(
    State(state): State<Arc<ServerState>>,
    headers: axum::http::HeaderMap,
) -> impl IntoResponse {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(bearer_token);

    let Some(token) = token else {
        return (
            StatusCode::UNAUTHORIZED,
            Json(MessageResponse::new("Authorization header missing")),
        )
            .into_response();
    };

    match state.auth.validate(token) {
        Ok(claims) => Json(ValidateResponse {
            username: claims.sub,
            valid: true,
        })
        .into_response(),
        Err(_) => (
            StatusCode::UNAUTHORIZED,
            Json(MessageResponse::new("Invalid or expired token")),
        )
            .into_response(),
    }
}

/// List device identifiers
pub async fn list_devices_handler(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    Json(state.store.list())
}

/// Get a device by identifier
pub async fn get_device_handler(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.store.get(&id) {
        Some(device) => Json(device).into_response(),
        None => device_not_found(&id).into_response(),
    }
}

/// Register a device
pub async fn create_device_handler(
    State(state): State<Arc<ServerState>>,
    Json(device): Json<Device>,
) -> impl IntoResponse {
    let created = state.store.create(device);
    (StatusCode::CREATED, Json(created))
}

/// Replace a device wholesale
pub async fn update_device_handler(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
    Json(device): Json<Device>,
) -> impl IntoResponse {
    match state.store.update(&id, device) {
        Some(updated) => Json(updated).into_response(),
        None => device_not_found(&id).into_response(),
    }
}

/// Remove a device
pub async fn delete_device_handler(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    if state.store.delete(&id) {
        Json(MessageResponse::new(format!("Device {} removed", id))).into_response()
    } else {
        device_not_found(&id).into_response()
    }
}

/// Command execution request
#[derive(Debug, Deserialize)]
pub struct ExecuteCommandRequest {
    pub operation: String,

    #[serde(default)]
    pub parameters: HashMap<String, serde_json::Value>,
}

/// Execute an operation on a device.
///
/// Unknown device or operation and malformed addresses are client errors
/// reported before any agent call; agent-boundary failures come back as a
/// 200 with `success=false`, one result shape for every dispatch attempt.
pub async fn execute_handler(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
    Json(request): Json<ExecuteCommandRequest>,
) -> impl IntoResponse {
    info!(
        "Executing operation {} on device {}",
        request.operation, id
    );

    match state
        .dispatcher
        .dispatch(&id, &request.operation, request.parameters)
        .await
    {
        Ok(result) => Json(result).into_response(),
        Err(e @ DispatchError::DeviceNotFound(_)) => {
            (StatusCode::NOT_FOUND, Json(MessageResponse::new(e.to_string()))).into_response()
        }
        Err(e) => {
            // Unknown operation or malformed device address
            (StatusCode::BAD_REQUEST, Json(MessageResponse::new(e.to_string()))).into_response()
        }
    }
}

fn device_not_found(id: &str) -> (StatusCode, Json<MessageResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(MessageResponse::new(format!("Device {} not found", id))),
    )
}
