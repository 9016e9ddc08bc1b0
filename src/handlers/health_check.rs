//! # Health Check Handler
//!
//! Liveness endpoint for load balancers, monitoring systems and deployment
//! tools. It performs no database checks; it only reports whether a database
//! connection string has been configured.

use std::sync::Arc;

use axum::{Json, extract::State};
use tracing::{debug, instrument};

use crate::models::{AppState, HealthStatus};
use crate::utils::constant::MONGO_URL_VAR;

/// Health check endpoint.
///
/// Re-reads the environment on every call, so a change to `MONGO_URL` is
/// visible without a restart. Never fails while the process can respond.
///
/// # Returns
///
/// Always `200 OK` with `{"status": "ok", "mongo_url_configured": <bool>}`.
#[instrument(skip_all)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthStatus> {
    let mongo_url_configured = state.env.is_configured(MONGO_URL_VAR);
    debug!(mongo_url_configured, "Health check endpoint accessed");
    Json(HealthStatus::ok(mongo_url_configured))
}
