//! # Configuration
//!
//! [`AppConfig`] is loaded once at startup from an [`EnvSource`]. Empty
//! values count as unset and fall back to the defaults in
//! [`crate::utils::constant`].

use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use axum::http::HeaderValue;

use crate::error::{AppError, AppResult};
use crate::services::environment::EnvSource;
use crate::utils::constant::*;

/// Origins permitted to make cross-origin requests.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AllowedOrigins {
    /// Any origin. Intended for local or preview deployments only.
    #[default]
    Any,
    /// Exactly these origins.
    List(Vec<HeaderValue>),
}

impl FromStr for AllowedOrigins {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim() == "*" {
            return Ok(Self::Any);
        }

        let origins = s
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(|origin| {
                if origin == "*" {
                    return Err("`*` cannot be combined with other origins".to_string());
                }
                HeaderValue::from_str(origin).map_err(|_| format!("`{origin}` is not a valid origin"))
            })
            .collect::<Result<Vec<_>, _>>()?;

        if origins.is_empty() {
            return Err("no origins given".to_string());
        }
        Ok(Self::List(origins))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
    Bunyan,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            "bunyan" => Ok(Self::Bunyan),
            _ => Err(format!("unknown log format `{s}`")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub allowed_origins: AllowedOrigins,
    pub allow_credentials: bool,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
            allowed_origins: AllowedOrigins::Any,
            allow_credentials: true,
            log_format: LogFormat::Pretty,
        }
    }
}

impl AppConfig {
    /// Loads configuration from `env`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidConfig`] naming the first variable whose
    /// value cannot be parsed.
    pub fn from_env(env: &dyn EnvSource) -> AppResult<Self> {
        let defaults = Self::default();

        Ok(Self {
            host: parse_var(env, APP_HOST_VAR, |v| {
                v.parse::<IpAddr>()
                    .map_err(|_| format!("`{v}` is not an IP address"))
            })?
            .unwrap_or(defaults.host),
            port: parse_var(env, APP_PORT_VAR, |v| {
                v.parse::<u16>()
                    .map_err(|_| format!("`{v}` is not a port number"))
            })?
            .unwrap_or(defaults.port),
            allowed_origins: parse_var(env, CORS_ALLOWED_ORIGINS_VAR, str::parse::<AllowedOrigins>)?
                .unwrap_or(defaults.allowed_origins),
            allow_credentials: parse_var(env, CORS_ALLOW_CREDENTIALS_VAR, parse_flag)?
                .unwrap_or(defaults.allow_credentials),
            log_format: parse_var(env, LOG_FORMAT_VAR, str::parse::<LogFormat>)?
                .unwrap_or(defaults.log_format),
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_var<T>(
    env: &dyn EnvSource,
    var: &'static str,
    parse: impl FnOnce(&str) -> Result<T, String>,
) -> AppResult<Option<T>> {
    match env.var(var) {
        Some(raw) if !raw.trim().is_empty() => parse(raw.trim())
            .map(Some)
            .map_err(|reason| AppError::InvalidConfig { var, reason }),
        _ => Ok(None),
    }
}

fn parse_flag(value: &str) -> Result<bool, String> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(format!("`{value}` is not a boolean")),
    }
}
