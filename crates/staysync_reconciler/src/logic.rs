// --- File: crates/staysync_reconciler/src/logic.rs ---
//! Pure status-derivation rules.
//!
//! Both functions are free of I/O and clock access so they can be tested
//! against fixed instants. The async reconciler applies their results.

use chrono::{DateTime, Utc};
use staysync_common::models::{Reservation, ReservationStatus, RoomStatus};

/// Computes the status a reservation should transition to at `now`, if any.
///
/// The reservation window is half-open: `now == start` is inside it,
/// `now == finish` is past it.
///
/// - inside `[start, finish)` and not ACTIVE: becomes ACTIVE
/// - ACTIVE and `now >= finish`: becomes COMPLETED
/// - anything else is left alone; in particular a reservation that was never
///   ACTIVE does not jump straight to COMPLETED after its window passes
pub fn reservation_transition(
    reservation: &Reservation,
    now: DateTime<Utc>,
) -> Option<ReservationStatus> {
    let in_window = now >= reservation.start && now < reservation.finish;

    if in_window && reservation.status != ReservationStatus::Active {
        return Some(ReservationStatus::Active);
    }

    if reservation.status == ReservationStatus::Active && now >= reservation.finish {
        return Some(ReservationStatus::Completed);
    }

    None
}

/// Derives a room's occupancy from its reservations: OCCUPIED when at least
/// one reservation is ACTIVE, AVAILABLE otherwise (including when the room
/// has no reservations at all).
pub fn derive_room_status(reservations: &[Reservation]) -> RoomStatus {
    if reservations
        .iter()
        .any(|r| r.status == ReservationStatus::Active)
    {
        RoomStatus::Occupied
    } else {
        RoomStatus::Available
    }
}
