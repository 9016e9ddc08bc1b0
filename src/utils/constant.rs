//! # Application Constants
//!
//! Environment variable names and defaults read by the service. Only the
//! presence of [`MONGO_URL_VAR`] is ever observed, never its value.

use std::net::{IpAddr, Ipv4Addr};

/// Database connection string whose presence the health route reports.
pub const MONGO_URL_VAR: &str = "MONGO_URL";

/// Host the HTTP listener binds to.
pub const APP_HOST_VAR: &str = "APP_HOST";

/// Port the HTTP listener binds to.
pub const APP_PORT_VAR: &str = "APP_PORT";

/// `*` or a comma separated list of allowed origins.
pub const CORS_ALLOWED_ORIGINS_VAR: &str = "CORS_ALLOWED_ORIGINS";

/// Whether cross-origin requests may carry credentials.
pub const CORS_ALLOW_CREDENTIALS_VAR: &str = "CORS_ALLOW_CREDENTIALS";

/// Log output format: `pretty`, `json` or `bunyan`.
pub const LOG_FORMAT_VAR: &str = "LOG_FORMAT";

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

pub const DEFAULT_PORT: u16 = 8000;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "backend_api=info,tower_http=info";

/// Name attached to bunyan-formatted log records.
pub const SERVICE_NAME: &str = "backend-api";
