// --- File: crates/staysync_common/src/lib.rs ---

// Declare modules within this crate
pub mod error; // Error handling
pub mod http; // HTTP utilities
pub mod logging; // Logging utilities
pub mod models; // Shared domain models
pub mod services; // Service abstractions

// Re-export error types and utilities for easier access
pub use error::{external_service_error, internal_error, not_found, Context, StaySyncError};

// Re-export HTTP utilities for easier access
pub use http::{create_client, HTTP_CLIENT};
