//! Authentication service
//!
//! Capability gate for the device API: checks credentials, mints bearer
//! tokens, and validates them. Orthogonal to command dispatch.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::authn::tokens::{issue_token, verify_token, AccessTokenClaims};
use crate::authn::users::UserStore;
use crate::errors::GatewayError;

/// Successful login response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user_name: String,
}

/// Authentication service
pub struct AuthService {
    users: UserStore,
    secret: SecretString,
    token_ttl_secs: i64,
}

impl AuthService {
    pub fn new(users: UserStore, secret: SecretString, token_ttl_secs: i64) -> Self {
        Self {
            users,
            secret,
            token_ttl_secs,
        }
    }

    /// Authenticate a username/password pair, issuing a bearer token on
    /// success. Returns `None` for bad credentials.
    pub fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<LoginResponse>, GatewayError> {
        if !self.users.verify(username, password) {
            warn!("Failed login attempt for user: {}", username);
            return Ok(None);
        }

        let token = issue_token(username, &self.secret, self.token_ttl_secs)?;

        info!("User authenticated: {}", username);
        Ok(Some(LoginResponse {
            access_token: token,
            token_type: "Bearer".to_string(),
            expires_in: self.token_ttl_secs,
            user_name: username.to_string(),
        }))
    }

    /// Validate a bearer token, returning its claims when valid
    pub fn validate(&self, token: &str) -> Result<AccessTokenClaims, GatewayError> {
        verify_token(token, &self.secret)
    }
}
