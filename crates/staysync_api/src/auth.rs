// --- File: crates/staysync_api/src/auth.rs ---
//! Auth service: session issuance via `/auth/login` and `/auth/signup`.
//!
//! The returned token is held in the shared `ApiClient` for the lifetime of
//! the process and attached as a bearer header to subsequent requests. There
//! is no expiry handling; an expired token surfaces as an auth error on the
//! next call.

use staysync_common::models::{AuthResponse, LoginRequest, SignupRequest};
use std::sync::Arc;
use tracing::info;

use crate::client::ApiClient;
use crate::error::ApiError;

pub struct AuthService {
    client: Arc<ApiClient>,
}

impl AuthService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Logs in and installs the returned token on the shared client.
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let response: AuthResponse = self.client.post_json("/auth/login", request).await?;
        self.client.set_token(Some(response.token.clone()));
        info!(user = %response.user.email, "Logged in to reservation backend");
        Ok(response)
    }

    /// Creates an account and installs the returned token on the shared client.
    pub async fn signup(&self, request: &SignupRequest) -> Result<AuthResponse, ApiError> {
        let response: AuthResponse = self.client.post_json("/auth/signup", request).await?;
        self.client.set_token(Some(response.token.clone()));
        info!(user = %response.user.email, "Signed up at reservation backend");
        Ok(response)
    }
}
