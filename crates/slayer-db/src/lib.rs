//! Manga Slayer Database Layer
//!
//! Repository traits over the catalog tables, their PostgreSQL implementations,
//! and (behind `test-helpers`) in-memory implementations for tests.

pub mod db;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

pub use db::*;
