// --- File: crates/staysync_api/src/room.rs ---
//! Room service: typed wrappers for the `/room/*` endpoints.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use staysync_common::models::{NewRoom, Page, Room, RoomStatus};
use staysync_common::services::RoomApi;
use staysync_common::StaySyncError;
use std::sync::Arc;

use crate::client::ApiClient;
use crate::error::ApiError;

pub struct RoomService {
    client: Arc<ApiClient>,
}

impl RoomService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Room>, ApiError> {
        self.client.get_json("/room/list").await
    }

    pub async fn pageable(&self, page: u32, size: u32) -> Result<Page<Room>, ApiError> {
        self.client
            .get_json_query(
                "/room/pageable",
                &[("page", page.to_string()), ("size", size.to_string())],
            )
            .await
    }

    pub async fn find(&self, id: i64) -> Result<Room, ApiError> {
        self.client.get_json(&format!("/room/find/{}", id)).await
    }

    pub async fn find_by_status(&self, status: RoomStatus) -> Result<Vec<Room>, ApiError> {
        self.client
            .get_json(&format!("/room/find/status/{}", status))
            .await
    }

    /// Rooms free for the whole `[start, finish)` window.
    pub async fn find_available(
        &self,
        start: DateTime<Utc>,
        finish: DateTime<Utc>,
    ) -> Result<Vec<Room>, ApiError> {
        self.client
            .get_json_query(
                "/room/find/available",
                &[
                    ("start", start.to_rfc3339()),
                    ("finish", finish.to_rfc3339()),
                ],
            )
            .await
    }

    pub async fn add(&self, room: &NewRoom) -> Result<Room, ApiError> {
        self.client.post_json("/room/add", room).await
    }

    pub async fn update(&self, room: &Room) -> Result<Room, ApiError> {
        self.client.put_json("/room/update", room).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete(&format!("/room/delete/{}", id)).await
    }
}

#[async_trait]
impl RoomApi for RoomService {
    async fn list(&self) -> Result<Vec<Room>, StaySyncError> {
        RoomService::list(self).await.map_err(Into::into)
    }

    async fn update(&self, room: Room) -> Result<Room, StaySyncError> {
        RoomService::update(self, &room).await.map_err(Into::into)
    }
}
