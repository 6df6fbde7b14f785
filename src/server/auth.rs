//! Bearer-token middleware for the device API

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::server::handlers::MessageResponse;
use crate::server::state::ServerState;

/// Extract the raw token from an `Authorization: Bearer <token>` header value
pub fn bearer_token(value: &str) -> Option<&str> {
    let (scheme, token) = value.split_once(' ')?;
    if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() {
        Some(token)
    } else {
        None
    }
}

/// Reject requests without a valid bearer token
pub async fn require_auth(
    State(state): State<Arc<ServerState>>,
    request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(bearer_token);

    let Some(token) = token else {
        return (
            StatusCode::UNAUTHORIZED,
            Json(MessageResponse {
                message: "Authorization header missing or malformed".to_string(),
            }),
        )
            .into_response();
    };

    if state.auth.validate(token).is_err() {
        return (
            StatusCode::UNAUTHORIZED,
            Json(MessageResponse {
                message: "Invalid or expired token".to_string(),
            }),
        )
            .into_response();
    }

    next.run(request).await
}
