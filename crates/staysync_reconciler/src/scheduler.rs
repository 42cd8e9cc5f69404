// --- File: crates/staysync_reconciler/src/scheduler.rs ---
//! Polling driver for the reconciler.
//!
//! The scheduler owns the loop lifecycle: it runs one cycle immediately on
//! start and then one per interval. Cycles are serialized inside a single
//! task, so a tick that elapses while a cycle is still running is skipped
//! rather than overlapping it. Shutdown stops the loop and drops the
//! in-flight cycle, which aborts its outstanding HTTP requests.

use chrono::Utc;
use staysync_common::services::{ReservationApi, RoomApi};
use std::sync::{Arc, RwLock};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::debug;

use crate::reconciler::StatusReconciler;
use crate::report::CycleReport;

pub struct Scheduler<R, M> {
    reconciler: StatusReconciler<R, M>,
    poll_interval: Duration,
}

impl<R, M> Scheduler<R, M>
where
    R: ReservationApi + 'static,
    M: RoomApi + 'static,
{
    pub fn new(reconciler: StatusReconciler<R, M>, poll_interval: Duration) -> Self {
        Self {
            reconciler,
            poll_interval,
        }
    }

    /// Starts the polling loop on the runtime and returns its handle.
    pub fn spawn(self) -> SchedulerHandle {
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
        let last_report: Arc<RwLock<Option<CycleReport>>> = Arc::new(RwLock::new(None));
        let report_slot = last_report.clone();

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(self.poll_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = shutdown_rx.changed() => break,
                    _ = ticker.tick() => {
                        let cycle = self.reconciler.run_cycle(Utc::now());
                        tokio::select! {
                            // Dropping the cycle future cancels its in-flight requests.
                            _ = shutdown_rx.changed() => break,
                            report = cycle => {
                                *report_slot.write().expect("report lock poisoned") = Some(report);
                            }
                        }
                    }
                }
            }
            debug!("Scheduler loop stopped");
        });

        SchedulerHandle {
            shutdown: shutdown_tx,
            task,
            last_report,
        }
    }
}

/// Handle to a running scheduler loop.
pub struct SchedulerHandle {
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
    last_report: Arc<RwLock<Option<CycleReport>>>,
}

impl SchedulerHandle {
    /// Shared slot holding the most recent cycle report.
    pub fn report_slot(&self) -> Arc<RwLock<Option<CycleReport>>> {
        self.last_report.clone()
    }

    pub fn last_report(&self) -> Option<CycleReport> {
        self.last_report
            .read()
            .expect("report lock poisoned")
            .clone()
    }

    /// Stops the loop and waits for the task to finish.
    pub async fn shutdown(self) {
        let _ = self.shutdown.send(true);
        let _ = self.task.await;
    }
}
