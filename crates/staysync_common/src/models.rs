// --- File: crates/staysync_common/src/models.rs ---

// Domain models shared across the application. The wire format follows the
// backend's JSON conventions: camelCase field names and
// SCREAMING_SNAKE_CASE status enums.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle states of a reservation.
///
/// PENDING reservations have not started yet, ACTIVE ones are currently in
/// their `[start, finish)` window, COMPLETED ones have finished, and
/// CANCELED ones were withdrawn by a user or operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    Pending,
    Active,
    Completed,
    Canceled,
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ReservationStatus::Pending => "PENDING",
            ReservationStatus::Active => "ACTIVE",
            ReservationStatus::Completed => "COMPLETED",
            ReservationStatus::Canceled => "CANCELED",
        };
        write!(f, "{}", s)
    }
}

/// Lifecycle states of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoomStatus {
    Available,
    Occupied,
    Maintenance,
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RoomStatus::Available => "AVAILABLE",
            RoomStatus::Occupied => "OCCUPIED",
            RoomStatus::Maintenance => "MAINTENANCE",
        };
        write!(f, "{}", s)
    }
}

/// A reservation as held by the backend.
///
/// The server is the source of truth; the client only holds a transient copy
/// per poll cycle and mutates `status` speculatively.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: i64,
    pub start: DateTime<Utc>,
    pub finish: DateTime<Utc>,
    pub status: ReservationStatus,
    pub user_id: i64,
    pub room_id: i64,
}

/// Payload for creating a reservation; the backend assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReservation {
    pub start: DateTime<Utc>,
    pub finish: DateTime<Utc>,
    pub status: ReservationStatus,
    pub user_id: i64,
    pub room_id: i64,
}

/// A room as held by the backend. `status` is derived, not authoritative,
/// on the client side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: i64,
    pub number: i32,
    pub status: RoomStatus,
    pub description: Option<String>,
    pub max_capacity: i32,
}

/// Payload for creating a room; the backend assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRoom {
    pub number: i32,
    pub status: RoomStatus,
    pub description: Option<String>,
    pub max_capacity: i32,
}

/// A user account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
}

/// Payload for creating a user; the backend assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
}

/// A hotel in the multi-tenant setup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: i64,
    pub name: String,
    pub address: String,
}

/// Payload for creating a hotel; the backend assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHotel {
    pub name: String,
    pub address: String,
}

/// One page of a pageable listing, matching the backend's page envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u32,
    pub number: u32,
    pub size: u32,
}

// --- Auth DTOs ---

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

/// Token plus profile returned by `/auth/login` and `/auth/signup`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn reservation_matches_backend_wire_format() {
        let raw = r#"{
            "id": 7,
            "start": "2024-01-01T10:00:00Z",
            "finish": "2024-01-01T11:00:00Z",
            "status": "PENDING",
            "userId": 3,
            "roomId": 12
        }"#;
        let reservation: Reservation = serde_json::from_str(raw).unwrap();
        assert_eq!(reservation.id, 7);
        assert_eq!(reservation.status, ReservationStatus::Pending);
        assert_eq!(reservation.room_id, 12);
        assert_eq!(
            reservation.start,
            Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap()
        );

        let out = serde_json::to_value(&reservation).unwrap();
        assert_eq!(out["status"], "PENDING");
        assert_eq!(out["userId"], 3);
    }

    #[test]
    fn room_status_uses_screaming_snake_case() {
        let raw = r#"{
            "id": 1,
            "number": 101,
            "status": "MAINTENANCE",
            "description": null,
            "maxCapacity": 2
        }"#;
        let room: Room = serde_json::from_str(raw).unwrap();
        assert_eq!(room.status, RoomStatus::Maintenance);
        assert_eq!(room.max_capacity, 2);
        assert_eq!(room.status.to_string(), "MAINTENANCE");
    }

    #[test]
    fn page_envelope_deserializes() {
        let raw = r#"{
            "content": [{"id": 1, "name": "Grand", "address": "Main St 1"}],
            "totalElements": 1,
            "totalPages": 1,
            "number": 0,
            "size": 20
        }"#;
        let page: Page<Hotel> = serde_json::from_str(raw).unwrap();
        assert_eq!(page.content.len(), 1);
        assert_eq!(page.total_elements, 1);
    }
}
