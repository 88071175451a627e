//! Test utilities
//!
//! Manual in-memory implementations of the repository ports plus test
//! fixtures. The in-memory repositories let the route-level tests run the
//! real router and handlers without a database.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
