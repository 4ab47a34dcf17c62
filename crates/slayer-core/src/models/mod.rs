//! Data models for the application
//!
//! This module contains the data structures shared by the API, the repositories
//! and the clients, organized by feature area.

mod chapter;
mod download;
mod manga;
mod message;
mod preferences;
mod progress;
mod source;

// Re-export all models for convenient imports
pub use chapter::*;
pub use download::*;
pub use manga::*;
pub use message::*;
pub use preferences::*;
pub use progress::*;
pub use source::*;
