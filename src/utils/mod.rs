//! # Utility Modules
//!
//! - **Constants** (`constant`) - Environment variable names and defaults

pub mod constant;
