// --- File: crates/staysync_api/src/client.rs ---
//! Typed HTTP client for the reservation backend.
//!
//! All entity services share one `ApiClient`, which owns the base URL, the
//! reqwest client and the bearer token obtained at login. There is no retry,
//! caching or batching: every operation is a single request/response round
//! trip.

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use staysync_common::{create_client, Context, StaySyncError, HTTP_CLIENT};
use staysync_config::ApiConfig;
use std::sync::RwLock;

use crate::error::ApiError;

pub struct ApiClient {
    http: Client,
    base_url: String,
    token: RwLock<Option<String>>,
}

impl ApiClient {
    /// Creates a client from the configured base URL and optional timeout.
    /// Without a configured timeout the shared default client is used.
    pub fn new(config: &ApiConfig) -> Result<Self, StaySyncError> {
        let http = match config.timeout_secs {
            Some(secs) => create_client(secs).context("Failed to build HTTP client")?,
            None => HTTP_CLIENT.clone(),
        };
        Ok(Self::from_parts(http, config.base_url.clone()))
    }

    pub fn from_parts(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http,
            base_url,
            token: RwLock::new(None),
        }
    }

    /// Replaces the bearer token attached to subsequent requests.
    /// Set by the auth service after login/signup.
    pub fn set_token(&self, token: Option<String>) {
        *self.token.write().expect("token lock poisoned") = token;
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match self.token.read().expect("token lock poisoned").as_deref() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Reads a JSON body, turning non-2xx statuses into `ApiError::Status`.
    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::from_status(status.as_u16(), &body));
        }
        Ok(serde_json::from_str(&body)?)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.request(Method::GET, path).send().await?;
        Self::read_json(response).await
    }

    pub(crate) async fn get_json_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let response = self.request(Method::GET, path).query(query).send().await?;
        Self::read_json(response).await
    }

    pub(crate) async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.request(Method::POST, path).json(body).send().await?;
        Self::read_json(response).await
    }

    pub(crate) async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.request(Method::PUT, path).json(body).send().await?;
        Self::read_json(response).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = self.request(Method::DELETE, path).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(ApiError::from_status(status.as_u16(), &body));
        }
        Ok(())
    }
}
