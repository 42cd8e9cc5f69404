#[cfg(test)]
mod tests {
    use crate::reconciler::StatusReconciler;
    use crate::scheduler::Scheduler;
    use async_trait::async_trait;
    use staysync_common::models::{Reservation, Room};
    use staysync_common::services::{ReservationApi, RoomApi};
    use staysync_common::StaySyncError;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    /// Counts list fetches; one fetch happens per cycle.
    struct CountingReservations {
        cycles: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl ReservationApi for CountingReservations {
        async fn list(&self) -> Result<Vec<Reservation>, StaySyncError> {
            self.cycles.fetch_add(1, Ordering::SeqCst);
            Ok(vec![])
        }

        async fn find_by_room(&self, _room_id: i64) -> Result<Vec<Reservation>, StaySyncError> {
            Ok(vec![])
        }

        async fn update(&self, reservation: Reservation) -> Result<Reservation, StaySyncError> {
            Ok(reservation)
        }
    }

    struct NoRooms;

    #[async_trait]
    impl RoomApi for NoRooms {
        async fn list(&self) -> Result<Vec<Room>, StaySyncError> {
            Ok(vec![])
        }

        async fn update(&self, room: Room) -> Result<Room, StaySyncError> {
            Ok(room)
        }
    }

    fn scheduler(
        cycles: Arc<AtomicUsize>,
        interval: Duration,
    ) -> Scheduler<CountingReservations, NoRooms> {
        let reconciler = StatusReconciler::new(
            Arc::new(CountingReservations { cycles }),
            Arc::new(NoRooms),
        );
        Scheduler::new(reconciler, interval)
    }

    #[tokio::test(start_paused = true)]
    async fn runs_first_cycle_immediately_and_then_per_interval() {
        let cycles = Arc::new(AtomicUsize::new(0));
        let handle = scheduler(cycles.clone(), Duration::from_secs(180)).spawn();

        // Let the spawned loop run its first tick.
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(cycles.load(Ordering::SeqCst), 1);
        assert!(handle.last_report().is_some());

        tokio::time::sleep(Duration::from_secs(180)).await;
        assert_eq!(cycles.load(Ordering::SeqCst), 2);

        tokio::time::sleep(Duration::from_secs(360)).await;
        assert_eq!(cycles.load(Ordering::SeqCst), 4);

        handle.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_stops_the_loop() {
        let cycles = Arc::new(AtomicUsize::new(0));
        let handle = scheduler(cycles.clone(), Duration::from_secs(180)).spawn();

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(cycles.load(Ordering::SeqCst), 1);

        handle.shutdown().await;

        tokio::time::sleep(Duration::from_secs(600)).await;
        assert_eq!(cycles.load(Ordering::SeqCst), 1, "no cycles after shutdown");
    }

    #[tokio::test(start_paused = true)]
    async fn report_reflects_the_latest_cycle() {
        let cycles = Arc::new(AtomicUsize::new(0));
        let handle = scheduler(cycles.clone(), Duration::from_secs(180)).spawn();

        tokio::time::sleep(Duration::from_millis(10)).await;
        let first = handle.last_report().expect("first report");
        tokio::time::sleep(Duration::from_secs(180)).await;
        let second = handle.last_report().expect("second report");

        assert!(second.started_at >= first.started_at);
        assert!(second.is_clean());

        handle.shutdown().await;
    }
}
