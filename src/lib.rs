//! # Backend API - Health Service
//!
//! A minimal HTTP service exposing `GET /api/health`, which reports liveness
//! and whether `MONGO_URL` is configured, behind a configurable cross-origin
//! policy.
//!
//! ## Modules
//!
//! - [`config`] - Configuration loaded from environment variables
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - CORS, request id and tracing layers
//! - [`services`] - Injected capabilities (environment access)
//! - [`telemetry`] - Tracing subscriber setup
//! - [`utils`] - Constants

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod shutdown;
pub mod telemetry;
pub mod utils;

use std::sync::Arc;

use axum::{Router, routing::get};

use crate::config::AppConfig;
use crate::handlers::health_check;
use crate::middleware::apply_middleware_stack;
use crate::models::AppState;
use crate::services::environment::{EnvSource, ProcessEnv};

/// Creates an Axum router that reads the live process environment.
///
/// This is a convenience function that calls [`app_with_env_source`] with
/// [`ProcessEnv`].
#[inline]
pub fn app(config: &AppConfig) -> Router {
    app_with_env_source(config, Arc::new(ProcessEnv))
}

/// Creates an Axum router with application routes and state.
///
/// # Arguments
///
/// * `config` - Cross-origin policy and other startup configuration
/// * `env` - Source consulted by handlers at request time
pub fn app_with_env_source(config: &AppConfig, env: Arc<dyn EnvSource>) -> Router {
    let state = Arc::new(AppState::new(env));

    let routes = Router::new()
        .route("/api/health", get(health_check))
        .with_state(state);

    apply_middleware_stack(routes, config)
}
