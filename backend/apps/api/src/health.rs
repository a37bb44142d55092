//! Health and Config Report Handlers
//!
//! Read-only reporters. Neither endpoint ever returns a secret value; the
//! config report says only whether each key is set, plus a masked founder
//! address.

use std::sync::Arc;
use std::time::Instant;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde_json::json;

use crate::config::ApiConfig;

#[derive(Clone)]
pub struct HealthState {
    pub config: Arc<ApiConfig>,
    pub started: Instant,
}

/// Mounted under `/api/health`:
/// - `GET /ping`   - liveness with uptime
/// - `GET /config` - configuration presence report
pub fn health_router(state: HealthState) -> Router {
    Router::new()
        .route("/ping", get(ping))
        .route("/config", get(config_report))
        .with_state(state)
}

async fn ping(State(state): State<HealthState>) -> Json<serde_json::Value> {
    Json(json!({
        "ok": true,
        "message": "pong",
        "timestamp": Utc::now(),
        "uptime": state.started.elapsed().as_secs(),
    }))
}

async fn config_report(State(state): State<HealthState>) -> Json<serde_json::Value> {
    let config = &state.config;
    let healthy = config.healthy();

    let environment = json!({
        "FOUNDER_ADDRESS": presence(!config.founder_address.is_empty()),
        "SUPABASE_URL": presence(!config.supabase_url.is_empty()),
        "SUPABASE_SERVICE_KEY": presence(!config.supabase_service_key.is_empty()),
        "SUPABASE_BUCKET": config.supabase_bucket,
        "founder": config.masked_founder(),
    });

    Json(json!({
        "ok": true,
        "healthy": healthy,
        "timestamp": Utc::now(),
        "environment": environment,
        "message": if healthy {
            "All required configuration present"
        } else {
            "Required configuration missing"
        },
    }))
}

fn presence(set: bool) -> &'static str {
    if set { "SET" } else { "MISSING" }
}
