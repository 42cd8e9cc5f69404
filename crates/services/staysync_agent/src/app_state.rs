// File: services/staysync_agent/src/app_state.rs
use staysync_config::AppConfig;
use staysync_reconciler::CycleReport;
use std::sync::{Arc, RwLock};

/// State shared with the status routes.
///
/// Holds the loaded configuration and the slot the scheduler publishes its
/// most recent cycle report into.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub last_report: Arc<RwLock<Option<CycleReport>>>,
}
