//! Access token issue and verification

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::errors::GatewayError;

const ISSUER: &str = "device-gateway";

/// Access token claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    /// Subject (username)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,
}

/// Issue a signed HS256 token for a username
pub fn issue_token(
    username: &str,
    secret: &SecretString,
    ttl_secs: i64,
) -> Result<String, GatewayError> {
    let now = Utc::now().timestamp();
    let claims = AccessTokenClaims {
        sub: username.to_string(),
        iat: now,
        exp: now + ttl_secs,
        iss: ISSUER.to_string(),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.expose_secret().as_bytes()),
    )
    .map_err(|e| GatewayError::TokenError(format!("Failed to sign token: {}", e)))
}

/// Verify a token's signature and expiry, returning its claims
pub fn verify_token(raw: &str, secret: &SecretString) -> Result<AccessTokenClaims, GatewayError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[ISSUER]);

    let token_data = decode::<AccessTokenClaims>(
        raw,
        &DecodingKey::from_secret(secret.expose_secret().as_bytes()),
        &validation,
    )
    .map_err(|e| GatewayError::TokenError(format!("Invalid token: {}", e)))?;

    Ok(token_data.claims)
}
