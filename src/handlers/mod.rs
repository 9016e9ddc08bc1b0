//! # HTTP Request Handlers
//!
//! ## Available Handlers
//!
//! - **Health Check** (`health_check`) - Liveness and configuration presence

mod health_check;

pub use health_check::*;
