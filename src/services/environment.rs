//! # Environment Service
//!
//! Read-only access to environment variables behind a trait, so handlers and
//! config loading can be exercised without touching the real process
//! environment.
//!
//! ## Implementations
//!
//! - [`ProcessEnv`] - Reads the live process environment on every call
//! - [`StaticEnv`] - Fixed in-memory variables for tests and embedding

use std::collections::HashMap;

/// Source of environment variables.
pub trait EnvSource: Send + Sync {
    /// Returns the value of `key`, or `None` if it is not set.
    fn var(&self, key: &str) -> Option<String>;

    /// Whether `key` is set to a non-empty value.
    fn is_configured(&self, key: &str) -> bool {
        self.var(key).is_some_and(|value| !value.is_empty())
    }
}

/// Live process environment.
///
/// Values that are not valid unicode are returned lossily converted and still
/// count as configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var_os(key).map(|value| value.to_string_lossy().into_owned())
    }

    fn is_configured(&self, key: &str) -> bool {
        std::env::var_os(key).is_some_and(|value| !value.is_empty())
    }
}

/// In-memory environment with a fixed set of variables.
#[derive(Debug, Clone, Default)]
pub struct StaticEnv {
    vars: HashMap<String, String>,
}

impl StaticEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a variable.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl EnvSource for StaticEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}
