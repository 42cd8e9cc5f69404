// --- File: crates/staysync_api/src/hotel.rs ---
//! Hotel service: typed wrappers for the `/hotel/*` endpoints.

use staysync_common::models::{Hotel, NewHotel};
use std::sync::Arc;

use crate::client::ApiClient;
use crate::error::ApiError;

pub struct HotelService {
    client: Arc<ApiClient>,
}

impl HotelService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Hotel>, ApiError> {
        self.client.get_json("/hotel/list").await
    }

    pub async fn find(&self, id: i64) -> Result<Hotel, ApiError> {
        self.client.get_json(&format!("/hotel/find/{}", id)).await
    }

    pub async fn add(&self, hotel: &NewHotel) -> Result<Hotel, ApiError> {
        self.client.post_json("/hotel/add", hotel).await
    }

    pub async fn update(&self, hotel: &Hotel) -> Result<Hotel, ApiError> {
        self.client.put_json("/hotel/update", hotel).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete(&format!("/hotel/delete/{}", id)).await
    }
}
