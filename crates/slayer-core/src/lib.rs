//! Manga Slayer Core Library
//!
//! This crate provides the domain models, error types, configuration and constants
//! shared by every Manga Slayer component.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use config::{BaseConfig, Config, ServerConfig};
pub use constants::{built_in_sources, find_built_in, DEFAULT_USER};
pub use error::{AppError, ErrorMetadata, LogLevel};
