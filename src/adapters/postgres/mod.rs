//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod category_repo;
pub mod country_repo;
pub mod owner_repo;
pub mod pokemon_repo;
pub mod review_repo;
pub mod reviewer_repo;

#[cfg(test)]
mod integration_tests;

pub use category_repo::PostgresCategoryRepository;
pub use country_repo::PostgresCountryRepository;
pub use owner_repo::PostgresOwnerRepository;
pub use pokemon_repo::PostgresPokemonRepository;
pub use review_repo::PostgresReviewRepository;
pub use reviewer_repo::PostgresReviewerRepository;
