// --- File: crates/staysync_reconciler/src/reconciler.rs ---
//! Reservation and room status reconciliation.
//!
//! One cycle makes two passes. The reservation pass fetches the full
//! reservation list and pushes a status correction for every reservation
//! whose window position no longer matches its stored status. The room pass
//! then re-fetches each room's reservations and pushes the derived occupancy,
//! so a reservation that just became ACTIVE normally marks its room OCCUPIED
//! within the same cycle. Nothing ties the two writes together: a failure
//! between them leaves room status inconsistent until the next cycle, which
//! is the contract the backend expects of its clients.
//!
//! Updates are best-effort. A failed update is recorded in the cycle report
//! and logged, not retried, and the remaining entities are still processed.

use chrono::{DateTime, Utc};
use staysync_common::models::ReservationStatus;
use staysync_common::services::{ReservationApi, RoomApi};
use staysync_common::StaySyncError;
use std::sync::Arc;
use tracing::{debug, error, info};

use crate::logic::{derive_room_status, reservation_transition};
use crate::report::CycleReport;

pub struct StatusReconciler<R, M> {
    reservations: Arc<R>,
    rooms: Arc<M>,
}

impl<R, M> StatusReconciler<R, M>
where
    R: ReservationApi,
    M: RoomApi,
{
    pub fn new(reservations: Arc<R>, rooms: Arc<M>) -> Self {
        Self {
            reservations,
            rooms,
        }
    }

    /// Runs one full reconciliation cycle against the given instant.
    ///
    /// Always returns a report; a failed list fetch aborts the affected pass
    /// and is recorded as an error, while the other pass still runs.
    pub async fn run_cycle(&self, now: DateTime<Utc>) -> CycleReport {
        let mut report = CycleReport::begin(now);

        if let Err(err) = self.reconcile_reservations(now, &mut report).await {
            error!(error = %err, "Reservation pass failed");
            report.record_error(format!("reservation pass: {}", err));
        }

        if let Err(err) = self.reconcile_rooms(&mut report).await {
            error!(error = %err, "Room pass failed");
            report.record_error(format!("room pass: {}", err));
        }

        report.finished_at = Some(Utc::now());
        info!(
            reservations = report.reservations_examined,
            activated = report.reservations_activated,
            completed = report.reservations_completed,
            rooms = report.rooms_examined,
            errors = report.errors.len(),
            "Reconciliation cycle finished"
        );
        report
    }

    async fn reconcile_reservations(
        &self,
        now: DateTime<Utc>,
        report: &mut CycleReport,
    ) -> Result<(), StaySyncError> {
        let reservations = self.reservations.list().await?;
        report.reservations_examined = reservations.len();

        for mut reservation in reservations {
            let next = match reservation_transition(&reservation, now) {
                Some(next) => next,
                None => continue,
            };
            let previous = reservation.status;
            reservation.status = next;
            let id = reservation.id;

            match self.reservations.update(reservation).await {
                Ok(_) => {
                    debug!(
                        reservation = id,
                        from = %previous,
                        to = %next,
                        "Reservation status corrected"
                    );
                    if next == ReservationStatus::Active {
                        report.reservations_activated += 1;
                    } else {
                        report.reservations_completed += 1;
                    }
                }
                Err(err) => {
                    error!(reservation = id, error = %err, "Reservation update failed");
                    report.record_error(format!("reservation {}: {}", id, err));
                }
            }
        }
        Ok(())
    }

    async fn reconcile_rooms(&self, report: &mut CycleReport) -> Result<(), StaySyncError> {
        let rooms = self.rooms.list().await?;
        report.rooms_examined = rooms.len();

        for mut room in rooms {
            let id = room.id;
            let for_room = match self.reservations.find_by_room(id).await {
                Ok(list) => list,
                Err(err) => {
                    error!(room = id, error = %err, "Room reservation fetch failed");
                    report.record_error(format!("room {}: {}", id, err));
                    continue;
                }
            };

            // The update goes out on every cycle, even when the derived
            // status equals the stored one.
            room.status = derive_room_status(&for_room);
            match self.rooms.update(room).await {
                Ok(_) => {
                    report.rooms_updated += 1;
                }
                Err(err) => {
                    error!(room = id, error = %err, "Room update failed");
                    report.record_error(format!("room {}: {}", id, err));
                }
            }
        }
        Ok(())
    }
}
