//! # Services
//!
//! Capabilities injected into handlers so they never reach for ambient
//! global state directly.
//!
//! ## Available Services
//!
//! - **Environment** (`environment`) - Read-only access to configuration variables

pub mod environment;
