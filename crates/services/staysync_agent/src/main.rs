// File: services/staysync_agent/src/main.rs
mod app_state;

use app_state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};
use staysync_api::{ApiClient, AuthService, ReservationService, RoomService};
use staysync_common::models::LoginRequest;
use staysync_config::load_config;
use staysync_reconciler::{Scheduler, StatusReconciler};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

async fn healthz() -> &'static str {
    "ok"
}

#[axum::debug_handler]
async fn status(State(state): State<AppState>) -> Json<Value> {
    let report = state
        .last_report
        .read()
        .expect("report lock poisoned")
        .clone();
    Json(json!({
        "poll_interval_secs": state.config.reconciler.poll_interval_secs,
        "last_cycle": report,
    }))
}

#[tokio::main]
async fn main() {
    let config = Arc::new(load_config().expect("Failed to load config"));
    staysync_common::logging::init();

    let client = Arc::new(ApiClient::new(&config.api).expect("Failed to build API client"));

    // Best-effort login: an agent without credentials (or with a rejected
    // login) still runs, and every backend call surfaces the auth error.
    if let Some(auth) = &config.auth {
        let auth_service = AuthService::new(client.clone());
        let request = LoginRequest {
            email: auth.email.clone(),
            password: auth.password.clone(),
        };
        if let Err(err) = auth_service.login(&request).await {
            warn!(error = %err, "Login failed, continuing unauthenticated");
        }
    }

    let reconciler = StatusReconciler::new(
        Arc::new(ReservationService::new(client.clone())),
        Arc::new(RoomService::new(client.clone())),
    );
    let poll_interval = Duration::from_secs(config.reconciler.poll_interval_secs);
    info!(
        interval_secs = config.reconciler.poll_interval_secs,
        backend = %config.api.base_url,
        "Starting reconciliation scheduler"
    );
    let handle = Scheduler::new(reconciler, poll_interval).spawn();

    let state = AppState {
        config: config.clone(),
        last_report: handle.report_slot(),
    };
    let app = Router::new()
        .route("/healthz", get(healthz))
        .route("/status", get(status))
        .with_state(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Failed to bind status address");
    info!("Status surface listening on http://{}", addr);

    let server = tokio::spawn(async move {
        if let Err(err) = axum::serve(listener, app.into_make_service()).await {
            error!(error = %err, "Status server exited");
        }
    });

    tokio::signal::ctrl_c()
        .await
        .expect("Failed to listen for shutdown signal");
    info!("Shutting down");
    handle.shutdown().await;
    server.abort();
}
