// --- File: crates/staysync_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
// Bind address for the agent's status surface.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

// --- Backend API Config ---
// Where the reservation backend lives. The base URL carries no trailing
// slash; paths are joined by the API client.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    pub base_url: String, // e.g. https://api.example.com or APP via STAYSYNC__API__BASE_URL
    pub timeout_secs: Option<u64>,
}

// --- Auth Config ---
// Credentials the agent logs in with at startup. Optional: without it the
// agent runs unauthenticated and relies on the backend accepting that.
// Password can be supplied via STAYSYNC__AUTH__PASSWORD instead of a file.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AuthConfig {
    pub email: String,
    pub password: String,
}

// --- Reconciler Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ReconcilerConfig {
    /// Seconds between reconciliation cycles. The first cycle runs
    /// immediately on startup.
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
}

fn default_poll_interval_secs() -> u64 {
    180
}

impl Default for ReconcilerConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: default_poll_interval_secs(),
        }
    }
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    // Server and backend API config are mandatory
    pub server: ServerConfig,
    pub api: ApiConfig,

    // --- Optional sections ---
    #[serde(default)]
    pub auth: Option<AuthConfig>,
    #[serde(default)]
    pub reconciler: ReconcilerConfig,
}
