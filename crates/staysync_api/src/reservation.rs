// --- File: crates/staysync_api/src/reservation.rs ---
//! Reservation service: typed wrappers for the `/reservation/*` endpoints.

use async_trait::async_trait;
use staysync_common::models::{NewReservation, Page, Reservation};
use staysync_common::services::ReservationApi;
use staysync_common::StaySyncError;
use std::sync::Arc;

use crate::client::ApiClient;
use crate::error::ApiError;

pub struct ReservationService {
    client: Arc<ApiClient>,
}

impl ReservationService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Reservation>, ApiError> {
        self.client.get_json("/reservation/list").await
    }

    pub async fn pageable(&self, page: u32, size: u32) -> Result<Page<Reservation>, ApiError> {
        self.client
            .get_json_query(
                "/reservation/pageable",
                &[("page", page.to_string()), ("size", size.to_string())],
            )
            .await
    }

    pub async fn find(&self, id: i64) -> Result<Reservation, ApiError> {
        self.client
            .get_json(&format!("/reservation/find/{}", id))
            .await
    }

    pub async fn find_by_room(&self, room_id: i64) -> Result<Vec<Reservation>, ApiError> {
        self.client
            .get_json(&format!("/reservation/find/room/{}", room_id))
            .await
    }

    pub async fn add(&self, reservation: &NewReservation) -> Result<Reservation, ApiError> {
        self.client.post_json("/reservation/add", reservation).await
    }

    pub async fn update(&self, reservation: &Reservation) -> Result<Reservation, ApiError> {
        self.client
            .put_json("/reservation/update", reservation)
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client
            .delete(&format!("/reservation/delete/{}", id))
            .await
    }
}

#[async_trait]
impl ReservationApi for ReservationService {
    async fn list(&self) -> Result<Vec<Reservation>, StaySyncError> {
        ReservationService::list(self).await.map_err(Into::into)
    }

    async fn find_by_room(&self, room_id: i64) -> Result<Vec<Reservation>, StaySyncError> {
        ReservationService::find_by_room(self, room_id)
            .await
            .map_err(Into::into)
    }

    async fn update(&self, reservation: Reservation) -> Result<Reservation, StaySyncError> {
        ReservationService::update(self, &reservation)
            .await
            .map_err(Into::into)
    }
}
