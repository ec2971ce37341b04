//! Shared errors, configuration, and money helpers for the SAC simulator.
//!
//! This crate provides common types used across all other crates:
//! - Money rounding and formatting for display layers
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
