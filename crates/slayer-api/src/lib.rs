//! Manga Slayer API Library
//!
//! This crate provides the HTTP API handlers, error mapping, and application setup.

mod api_doc;
pub mod constants;
mod handlers;
pub mod setup;

pub mod error;
pub mod state;

pub use error::ErrorResponse;
