use std::sync::Arc;

use tracing::info;

use crate::services::environment::EnvSource;

/// Application state shared across requests. Immutable after construction.
pub struct AppState {
    /// Source consulted for configuration variables at request time.
    pub env: Arc<dyn EnvSource>,
}

impl AppState {
    pub fn new(env: Arc<dyn EnvSource>) -> Self {
        info!("Initializing application state");
        Self { env }
    }
}
