//! # Telemetry
//!
//! Installs the global `tracing` subscriber. The filter comes from
//! `RUST_LOG`, falling back to [`DEFAULT_LOG_FILTER`].

use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LogFormat;
use crate::error::{AppError, AppResult};
use crate::utils::constant::{DEFAULT_LOG_FILTER, SERVICE_NAME};

/// Installs a subscriber writing to stdout in the given format.
///
/// # Errors
///
/// Returns [`AppError::Telemetry`] if a global subscriber is already set.
pub fn init_tracing(format: LogFormat) -> AppResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let pretty = (format == LogFormat::Pretty).then(fmt::layer);
    let json = (format == LogFormat::Json).then(|| fmt::layer().json());
    let storage = (format == LogFormat::Bunyan).then_some(JsonStorageLayer);
    let bunyan = (format == LogFormat::Bunyan)
        .then(|| BunyanFormattingLayer::new(SERVICE_NAME.to_string(), std::io::stdout));

    Registry::default()
        .with(filter)
        .with(pretty)
        .with(json)
        .with(storage)
        .with(bunyan)
        .try_init()
        .map_err(|e| AppError::Telemetry(e.to_string()))
}
