//! # Centralized Error Handling
//!
//! The health route has no failure path, so every error here is a startup or
//! server-loop failure that ends the process with a non-zero exit status.

use std::{io, net::SocketAddr};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("invalid value for `{var}`: {reason}")]
    InvalidConfig { var: &'static str, reason: String },

    #[error("failed to bind HTTP listener on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("HTTP server error: {0}")]
    Serve(#[source] io::Error),

    #[error("failed to install tracing subscriber: {0}")]
    Telemetry(String),
}

/// Convenience Result type alias that uses AppError as the error type.
pub type AppResult<T> = Result<T, AppError>;
