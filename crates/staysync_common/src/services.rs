// --- File: crates/staysync_common/src/services.rs ---
//! Service abstractions for the reservation backend.
//!
//! This module provides trait definitions for the subset of the backend API
//! the reconciler depends on. These traits allow for dependency injection and
//! easier testing by decoupling the reconciliation logic from the concrete
//! HTTP client.

use async_trait::async_trait;

use crate::error::StaySyncError;
use crate::models::{Reservation, Room};

/// Backend operations on reservations used by the reconciler.
#[async_trait]
pub trait ReservationApi: Send + Sync {
    /// Fetch the full reservation list.
    async fn list(&self) -> Result<Vec<Reservation>, StaySyncError>;

    /// Fetch all reservations belonging to one room.
    async fn find_by_room(&self, room_id: i64) -> Result<Vec<Reservation>, StaySyncError>;

    /// Push an updated reservation to the backend.
    async fn update(&self, reservation: Reservation) -> Result<Reservation, StaySyncError>;
}

/// Backend operations on rooms used by the reconciler.
#[async_trait]
pub trait RoomApi: Send + Sync {
    /// Fetch the full room list.
    async fn list(&self) -> Result<Vec<Room>, StaySyncError>;

    /// Push an updated room to the backend.
    async fn update(&self, room: Room) -> Result<Room, StaySyncError>;
}
