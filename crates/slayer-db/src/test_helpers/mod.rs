//! Test helpers shared with downstream crates (feature `test-helpers`)

pub mod mock_repositories;

pub use mock_repositories::*;
