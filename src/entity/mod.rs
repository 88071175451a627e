//! SeaORM persistence models
//!
//! One module per table, plus the two many-to-many join tables.
//! Conversions into the domain types live next to each model.

pub mod categories;
pub mod countries;
pub mod owners;
pub mod pokemon;
pub mod pokemon_categories;
pub mod pokemon_owners;
pub mod reviewers;
pub mod reviews;
