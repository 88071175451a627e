//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (PostgreSQL in production,
//! in-memory in tests).
//!
//! Expected absences are `Option`/`bool`, never `Err`; the `Err` path is
//! reserved for store failures, which handlers surface as HTTP 500.

use async_trait::async_trait;

use crate::domain::entities::{
    Category, CategoryId, Country, CountryId, NewCategory, NewCountry, NewOwner, NewPokemon,
    NewReview, NewReviewer, Owner, OwnerId, Pokemon, PokemonId, Review, ReviewId, Reviewer,
    ReviewerId,
};
use crate::error::DomainError;

/// Repository for Pokemon entities
#[async_trait]
pub trait PokemonRepository: Send + Sync {
    /// List all pokemon, ordered by id
    async fn find_all(&self) -> Result<Vec<Pokemon>, DomainError>;

    /// Find a pokemon by id
    async fn find_by_id(&self, id: &PokemonId) -> Result<Option<Pokemon>, DomainError>;

    /// List pokemon held by an owner
    async fn find_by_owner(&self, owner_id: &OwnerId) -> Result<Vec<Pokemon>, DomainError>;

    /// List pokemon in a category
    async fn find_by_category(&self, category_id: &CategoryId)
        -> Result<Vec<Pokemon>, DomainError>;

    /// Average rating over the pokemon's reviews, 0.0 when it has none
    async fn rating(&self, id: &PokemonId) -> Result<f64, DomainError>;

    /// Existence check used by handlers before fetch/update/delete
    async fn exists(&self, id: &PokemonId) -> Result<bool, DomainError>;

    /// Create a pokemon and link it to the given owner and category
    async fn create(
        &self,
        owner_id: &OwnerId,
        category_id: &CategoryId,
        pokemon: &NewPokemon,
    ) -> Result<Pokemon, DomainError>;

    /// Replace the full record
    async fn update(&self, pokemon: &Pokemon) -> Result<(), DomainError>;

    /// Delete a pokemon; its reviews must already be gone
    async fn delete(&self, id: &PokemonId) -> Result<(), DomainError>;
}

/// Repository for Category entities
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Category>, DomainError>;

    async fn find_by_id(&self, id: &CategoryId) -> Result<Option<Category>, DomainError>;

    async fn exists(&self, id: &CategoryId) -> Result<bool, DomainError>;

    async fn create(&self, category: &NewCategory) -> Result<Category, DomainError>;

    async fn update(&self, category: &Category) -> Result<(), DomainError>;

    async fn delete(&self, id: &CategoryId) -> Result<(), DomainError>;
}

/// Repository for Country entities
#[async_trait]
pub trait CountryRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Country>, DomainError>;

    async fn find_by_id(&self, id: &CountryId) -> Result<Option<Country>, DomainError>;

    /// The country an owner belongs to
    async fn find_by_owner(&self, owner_id: &OwnerId) -> Result<Option<Country>, DomainError>;

    /// Owners from a country
    async fn owners(&self, id: &CountryId) -> Result<Vec<Owner>, DomainError>;

    async fn exists(&self, id: &CountryId) -> Result<bool, DomainError>;

    async fn create(&self, country: &NewCountry) -> Result<Country, DomainError>;

    async fn update(&self, country: &Country) -> Result<(), DomainError>;

    async fn delete(&self, id: &CountryId) -> Result<(), DomainError>;
}

/// Repository for Owner entities
#[async_trait]
pub trait OwnerRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Owner>, DomainError>;

    async fn find_by_id(&self, id: &OwnerId) -> Result<Option<Owner>, DomainError>;

    /// Owners holding a given pokemon
    async fn find_by_pokemon(&self, pokemon_id: &PokemonId) -> Result<Vec<Owner>, DomainError>;

    async fn exists(&self, id: &OwnerId) -> Result<bool, DomainError>;

    async fn create(&self, owner: &NewOwner) -> Result<Owner, DomainError>;

    async fn update(&self, owner: &Owner) -> Result<(), DomainError>;

    async fn delete(&self, id: &OwnerId) -> Result<(), DomainError>;
}

/// Repository for Reviewer entities
#[async_trait]
pub trait ReviewerRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Reviewer>, DomainError>;

    async fn find_by_id(&self, id: &ReviewerId) -> Result<Option<Reviewer>, DomainError>;

    async fn exists(&self, id: &ReviewerId) -> Result<bool, DomainError>;

    async fn create(&self, reviewer: &NewReviewer) -> Result<Reviewer, DomainError>;

    async fn update(&self, reviewer: &Reviewer) -> Result<(), DomainError>;

    async fn delete(&self, id: &ReviewerId) -> Result<(), DomainError>;
}

/// Repository for Review entities
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Review>, DomainError>;

    async fn find_by_id(&self, id: &ReviewId) -> Result<Option<Review>, DomainError>;

    /// Reviews of a pokemon
    async fn find_by_pokemon(&self, pokemon_id: &PokemonId) -> Result<Vec<Review>, DomainError>;

    /// Reviews written by a reviewer
    async fn find_by_reviewer(&self, reviewer_id: &ReviewerId)
        -> Result<Vec<Review>, DomainError>;

    async fn exists(&self, id: &ReviewId) -> Result<bool, DomainError>;

    async fn create(&self, review: &NewReview) -> Result<Review, DomainError>;

    async fn update(&self, review: &Review) -> Result<(), DomainError>;

    async fn delete(&self, id: &ReviewId) -> Result<(), DomainError>;

    /// Bulk delete for the pokemon-delete cascade; returns rows removed
    async fn delete_for_pokemon(&self, pokemon_id: &PokemonId) -> Result<u64, DomainError>;
}
