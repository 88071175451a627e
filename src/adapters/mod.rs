//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod postgres;

pub use postgres::{
    PostgresCategoryRepository, PostgresCountryRepository, PostgresOwnerRepository,
    PostgresPokemonRepository, PostgresReviewRepository, PostgresReviewerRepository,
};
