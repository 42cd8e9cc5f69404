// --- File: crates/staysync_api/src/user.rs ---
//! User service: typed wrappers for the `/user/*` endpoints.

use staysync_common::models::{NewUser, Page, User};
use std::sync::Arc;

use crate::client::ApiClient;
use crate::error::ApiError;

pub struct UserService {
    client: Arc<ApiClient>,
}

impl UserService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<User>, ApiError> {
        self.client.get_json("/user/list").await
    }

    pub async fn pageable(&self, page: u32, size: u32) -> Result<Page<User>, ApiError> {
        self.client
            .get_json_query(
                "/user/pageable",
                &[("page", page.to_string()), ("size", size.to_string())],
            )
            .await
    }

    pub async fn find(&self, id: i64) -> Result<User, ApiError> {
        self.client.get_json(&format!("/user/find/{}", id)).await
    }

    pub async fn add(&self, user: &NewUser) -> Result<User, ApiError> {
        self.client.post_json("/user/add", user).await
    }

    pub async fn update(&self, user: &User) -> Result<User, ApiError> {
        self.client.put_json("/user/update", user).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete(&format!("/user/delete/{}", id)).await
    }
}
