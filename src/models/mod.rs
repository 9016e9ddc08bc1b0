mod health;
mod state;

pub use health::HealthStatus;
pub use state::AppState;
