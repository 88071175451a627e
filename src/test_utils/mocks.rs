//! In-memory implementations of the repository ports
//!
//! These store data in memory and let tests run the real handlers and
//! router without a database. The relational lookups (pokemon-by-owner,
//! rating, reviews-by-reviewer) need cross-entity access, so all tables
//! live in one shared `InMemoryStore` and each repository is a thin view
//! over it.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::{Arc, RwLock};

use crate::domain::entities::{
    Category, CategoryId, Country, CountryId, NewCategory, NewCountry, NewOwner, NewPokemon,
    NewReview, NewReviewer, Owner, OwnerId, Pokemon, PokemonId, Review, ReviewId, Reviewer,
    ReviewerId,
};
use crate::domain::ports::{
    CategoryRepository, CountryRepository, OwnerRepository, PokemonRepository, ReviewRepository,
    ReviewerRepository,
};
use crate::error::DomainError;
use crate::AppState;

/// Shared backing store for the in-memory repositories
#[derive(Default)]
pub struct InMemoryStore {
    categories: RwLock<HashMap<i32, Category>>,
    countries: RwLock<HashMap<i32, Country>>,
    owners: RwLock<HashMap<i32, Owner>>,
    pokemon: RwLock<HashMap<i32, Pokemon>>,
    reviewers: RwLock<HashMap<i32, Reviewer>>,
    reviews: RwLock<HashMap<i32, Review>>,
    /// (owner_id, pokemon_id) pairs
    pokemon_owners: RwLock<Vec<(i32, i32)>>,
    /// (pokemon_id, category_id) pairs
    pokemon_categories: RwLock<Vec<(i32, i32)>>,
    next_id: AtomicI32,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            next_id: AtomicI32::new(1),
            ..Default::default()
        })
    }

    fn assign_id(&self) -> i32 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }
}

fn sorted_by_id<T, F: Fn(&T) -> i32>(mut items: Vec<T>, id_of: F) -> Vec<T> {
    items.sort_by_key(|i| id_of(i));
    items
}

// ============================================================================
// Category
// ============================================================================

pub struct InMemoryCategoryRepository {
    store: Arc<InMemoryStore>,
}

impl InMemoryCategoryRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn find_all(&self) -> Result<Vec<Category>, DomainError> {
        let categories = self.store.categories.read().unwrap();
        Ok(sorted_by_id(
            categories.values().cloned().collect(),
            |c: &Category| c.id.0,
        ))
    }

    async fn find_by_id(&self, id: &CategoryId) -> Result<Option<Category>, DomainError> {
        Ok(self.store.categories.read().unwrap().get(&id.0).cloned())
    }

    async fn exists(&self, id: &CategoryId) -> Result<bool, DomainError> {
        Ok(self.store.categories.read().unwrap().contains_key(&id.0))
    }

    async fn create(&self, new: &NewCategory) -> Result<Category, DomainError> {
        let category = Category {
            id: CategoryId(self.store.assign_id()),
            name: new.name.clone(),
        };
        self.store
            .categories
            .write()
            .unwrap()
            .insert(category.id.0, category.clone());
        Ok(category)
    }

    async fn update(&self, category: &Category) -> Result<(), DomainError> {
        self.store
            .categories
            .write()
            .unwrap()
            .insert(category.id.0, category.clone());
        Ok(())
    }

    async fn delete(&self, id: &CategoryId) -> Result<(), DomainError> {
        self.store.categories.write().unwrap().remove(&id.0);
        self.store
            .pokemon_categories
            .write()
            .unwrap()
            .retain(|(_, c)| *c != id.0);
        Ok(())
    }
}

// ============================================================================
// Country
// ============================================================================

pub struct InMemoryCountryRepository {
    store: Arc<InMemoryStore>,
}

impl InMemoryCountryRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CountryRepository for InMemoryCountryRepository {
    async fn find_all(&self) -> Result<Vec<Country>, DomainError> {
        let countries = self.store.countries.read().unwrap();
        Ok(sorted_by_id(
            countries.values().cloned().collect(),
            |c: &Country| c.id.0,
        ))
    }

    async fn find_by_id(&self, id: &CountryId) -> Result<Option<Country>, DomainError> {
        Ok(self.store.countries.read().unwrap().get(&id.0).cloned())
    }

    async fn find_by_owner(&self, owner_id: &OwnerId) -> Result<Option<Country>, DomainError> {
        let country_id = {
            let owners = self.store.owners.read().unwrap();
            owners.get(&owner_id.0).map(|o| o.country_id)
        };
        let Some(country_id) = country_id else {
            return Ok(None);
        };
        Ok(self
            .store
            .countries
            .read()
            .unwrap()
            .get(&country_id.0)
            .cloned())
    }

    async fn owners(&self, id: &CountryId) -> Result<Vec<Owner>, DomainError> {
        let owners = self.store.owners.read().unwrap();
        Ok(sorted_by_id(
            owners
                .values()
                .filter(|o| o.country_id == *id)
                .cloned()
                .collect(),
            |o: &Owner| o.id.0,
        ))
    }

    async fn exists(&self, id: &CountryId) -> Result<bool, DomainError> {
        Ok(self.store.countries.read().unwrap().contains_key(&id.0))
    }

    async fn create(&self, new: &NewCountry) -> Result<Country, DomainError> {
        let country = Country {
            id: CountryId(self.store.assign_id()),
            name: new.name.clone(),
        };
        self.store
            .countries
            .write()
            .unwrap()
            .insert(country.id.0, country.clone());
        Ok(country)
    }

    async fn update(&self, country: &Country) -> Result<(), DomainError> {
        self.store
            .countries
            .write()
            .unwrap()
            .insert(country.id.0, country.clone());
        Ok(())
    }

    async fn delete(&self, id: &CountryId) -> Result<(), DomainError> {
        self.store.countries.write().unwrap().remove(&id.0);
        Ok(())
    }
}

// ============================================================================
// Owner
// ============================================================================

pub struct InMemoryOwnerRepository {
    store: Arc<InMemoryStore>,
}

impl InMemoryOwnerRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl OwnerRepository for InMemoryOwnerRepository {
    async fn find_all(&self) -> Result<Vec<Owner>, DomainError> {
        let owners = self.store.owners.read().unwrap();
        Ok(sorted_by_id(
            owners.values().cloned().collect(),
            |o: &Owner| o.id.0,
        ))
    }

    async fn find_by_id(&self, id: &OwnerId) -> Result<Option<Owner>, DomainError> {
        Ok(self.store.owners.read().unwrap().get(&id.0).cloned())
    }

    async fn find_by_pokemon(&self, pokemon_id: &PokemonId) -> Result<Vec<Owner>, DomainError> {
        let owner_ids: Vec<i32> = self
            .store
            .pokemon_owners
            .read()
            .unwrap()
            .iter()
            .filter(|(_, p)| *p == pokemon_id.0)
            .map(|(o, _)| *o)
            .collect();

        let owners = self.store.owners.read().unwrap();
        Ok(sorted_by_id(
            owner_ids
                .iter()
                .filter_map(|id| owners.get(id).cloned())
                .collect(),
            |o: &Owner| o.id.0,
        ))
    }

    async fn exists(&self, id: &OwnerId) -> Result<bool, DomainError> {
        Ok(self.store.owners.read().unwrap().contains_key(&id.0))
    }

    async fn create(&self, new: &NewOwner) -> Result<Owner, DomainError> {
        let owner = Owner {
            id: OwnerId(self.store.assign_id()),
            first_name: new.first_name.clone(),
            last_name: new.last_name.clone(),
            gym: new.gym.clone(),
            country_id: new.country_id,
        };
        self.store
            .owners
            .write()
            .unwrap()
            .insert(owner.id.0, owner.clone());
        Ok(owner)
    }

    async fn update(&self, owner: &Owner) -> Result<(), DomainError> {
        self.store
            .owners
            .write()
            .unwrap()
            .insert(owner.id.0, owner.clone());
        Ok(())
    }

    async fn delete(&self, id: &OwnerId) -> Result<(), DomainError> {
        self.store.owners.write().unwrap().remove(&id.0);
        self.store
            .pokemon_owners
            .write()
            .unwrap()
            .retain(|(o, _)| *o != id.0);
        Ok(())
    }
}

// ============================================================================
// Pokemon
// ============================================================================

pub struct InMemoryPokemonRepository {
    store: Arc<InMemoryStore>,
}

impl InMemoryPokemonRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PokemonRepository for InMemoryPokemonRepository {
    async fn find_all(&self) -> Result<Vec<Pokemon>, DomainError> {
        let pokemon = self.store.pokemon.read().unwrap();
        Ok(sorted_by_id(
            pokemon.values().cloned().collect(),
            |p: &Pokemon| p.id.0,
        ))
    }

    async fn find_by_id(&self, id: &PokemonId) -> Result<Option<Pokemon>, DomainError> {
        Ok(self.store.pokemon.read().unwrap().get(&id.0).cloned())
    }

    async fn find_by_owner(&self, owner_id: &OwnerId) -> Result<Vec<Pokemon>, DomainError> {
        let pokemon_ids: Vec<i32> = self
            .store
            .pokemon_owners
            .read()
            .unwrap()
            .iter()
            .filter(|(o, _)| *o == owner_id.0)
            .map(|(_, p)| *p)
            .collect();

        let pokemon = self.store.pokemon.read().unwrap();
        Ok(sorted_by_id(
            pokemon_ids
                .iter()
                .filter_map(|id| pokemon.get(id).cloned())
                .collect(),
            |p: &Pokemon| p.id.0,
        ))
    }

    async fn find_by_category(
        &self,
        category_id: &CategoryId,
    ) -> Result<Vec<Pokemon>, DomainError> {
        let pokemon_ids: Vec<i32> = self
            .store
            .pokemon_categories
            .read()
            .unwrap()
            .iter()
            .filter(|(_, c)| *c == category_id.0)
            .map(|(p, _)| *p)
            .collect();

        let pokemon = self.store.pokemon.read().unwrap();
        Ok(sorted_by_id(
            pokemon_ids
                .iter()
                .filter_map(|id| pokemon.get(id).cloned())
                .collect(),
            |p: &Pokemon| p.id.0,
        ))
    }

    async fn rating(&self, id: &PokemonId) -> Result<f64, DomainError> {
        let reviews = self.store.reviews.read().unwrap();
        let ratings: Vec<i32> = reviews
            .values()
            .filter(|r| r.pokemon_id == *id)
            .map(|r| r.rating)
            .collect();

        if ratings.is_empty() {
            return Ok(0.0);
        }
        Ok(ratings.iter().sum::<i32>() as f64 / ratings.len() as f64)
    }

    async fn exists(&self, id: &PokemonId) -> Result<bool, DomainError> {
        Ok(self.store.pokemon.read().unwrap().contains_key(&id.0))
    }

    async fn create(
        &self,
        owner_id: &OwnerId,
        category_id: &CategoryId,
        new: &NewPokemon,
    ) -> Result<Pokemon, DomainError> {
        let pokemon = Pokemon {
            id: PokemonId(self.store.assign_id()),
            name: new.name.clone(),
            birth_date: new.birth_date,
        };
        self.store
            .pokemon
            .write()
            .unwrap()
            .insert(pokemon.id.0, pokemon.clone());
        self.store
            .pokemon_owners
            .write()
            .unwrap()
            .push((owner_id.0, pokemon.id.0));
        self.store
            .pokemon_categories
            .write()
            .unwrap()
            .push((pokemon.id.0, category_id.0));
        Ok(pokemon)
    }

    async fn update(&self, pokemon: &Pokemon) -> Result<(), DomainError> {
        self.store
            .pokemon
            .write()
            .unwrap()
            .insert(pokemon.id.0, pokemon.clone());
        Ok(())
    }

    async fn delete(&self, id: &PokemonId) -> Result<(), DomainError> {
        self.store.pokemon.write().unwrap().remove(&id.0);
        self.store
            .pokemon_owners
            .write()
            .unwrap()
            .retain(|(_, p)| *p != id.0);
        self.store
            .pokemon_categories
            .write()
            .unwrap()
            .retain(|(p, _)| *p != id.0);
        Ok(())
    }
}

// ============================================================================
// Reviewer
// ============================================================================

pub struct InMemoryReviewerRepository {
    store: Arc<InMemoryStore>,
}

impl InMemoryReviewerRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ReviewerRepository for InMemoryReviewerRepository {
    async fn find_all(&self) -> Result<Vec<Reviewer>, DomainError> {
        let reviewers = self.store.reviewers.read().unwrap();
        Ok(sorted_by_id(
            reviewers.values().cloned().collect(),
            |r: &Reviewer| r.id.0,
        ))
    }

    async fn find_by_id(&self, id: &ReviewerId) -> Result<Option<Reviewer>, DomainError> {
        Ok(self.store.reviewers.read().unwrap().get(&id.0).cloned())
    }

    async fn exists(&self, id: &ReviewerId) -> Result<bool, DomainError> {
        Ok(self.store.reviewers.read().unwrap().contains_key(&id.0))
    }

    async fn create(&self, new: &NewReviewer) -> Result<Reviewer, DomainError> {
        let reviewer = Reviewer {
            id: ReviewerId(self.store.assign_id()),
            first_name: new.first_name.clone(),
            last_name: new.last_name.clone(),
        };
        self.store
            .reviewers
            .write()
            .unwrap()
            .insert(reviewer.id.0, reviewer.clone());
        Ok(reviewer)
    }

    async fn update(&self, reviewer: &Reviewer) -> Result<(), DomainError> {
        self.store
            .reviewers
            .write()
            .unwrap()
            .insert(reviewer.id.0, reviewer.clone());
        Ok(())
    }

    async fn delete(&self, id: &ReviewerId) -> Result<(), DomainError> {
        self.store.reviewers.write().unwrap().remove(&id.0);
        Ok(())
    }
}

// ============================================================================
// Review
// ============================================================================

pub struct InMemoryReviewRepository {
    store: Arc<InMemoryStore>,
}

impl InMemoryReviewRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ReviewRepository for InMemoryReviewRepository {
    async fn find_all(&self) -> Result<Vec<Review>, DomainError> {
        let reviews = self.store.reviews.read().unwrap();
        Ok(sorted_by_id(
            reviews.values().cloned().collect(),
            |r: &Review| r.id.0,
        ))
    }

    async fn find_by_id(&self, id: &ReviewId) -> Result<Option<Review>, DomainError> {
        Ok(self.store.reviews.read().unwrap().get(&id.0).cloned())
    }

    async fn find_by_pokemon(&self, pokemon_id: &PokemonId) -> Result<Vec<Review>, DomainError> {
        let reviews = self.store.reviews.read().unwrap();
        Ok(sorted_by_id(
            reviews
                .values()
                .filter(|r| r.pokemon_id == *pokemon_id)
                .cloned()
                .collect(),
            |r: &Review| r.id.0,
        ))
    }

    async fn find_by_reviewer(
        &self,
        reviewer_id: &ReviewerId,
    ) -> Result<Vec<Review>, DomainError> {
        let reviews = self.store.reviews.read().unwrap();
        Ok(sorted_by_id(
            reviews
                .values()
                .filter(|r| r.reviewer_id == *reviewer_id)
                .cloned()
                .collect(),
            |r: &Review| r.id.0,
        ))
    }

    async fn exists(&self, id: &ReviewId) -> Result<bool, DomainError> {
        Ok(self.store.reviews.read().unwrap().contains_key(&id.0))
    }

    async fn create(&self, new: &NewReview) -> Result<Review, DomainError> {
        let review = Review {
            id: ReviewId(self.store.assign_id()),
            title: new.title.clone(),
            text: new.text.clone(),
            rating: new.rating,
            pokemon_id: new.pokemon_id,
            reviewer_id: new.reviewer_id,
        };
        self.store
            .reviews
            .write()
            .unwrap()
            .insert(review.id.0, review.clone());
        Ok(review)
    }

    async fn update(&self, review: &Review) -> Result<(), DomainError> {
        self.store
            .reviews
            .write()
            .unwrap()
            .insert(review.id.0, review.clone());
        Ok(())
    }

    async fn delete(&self, id: &ReviewId) -> Result<(), DomainError> {
        self.store.reviews.write().unwrap().remove(&id.0);
        Ok(())
    }

    async fn delete_for_pokemon(&self, pokemon_id: &PokemonId) -> Result<u64, DomainError> {
        let mut reviews = self.store.reviews.write().unwrap();
        let before = reviews.len();
        reviews.retain(|_, r| r.pokemon_id != *pokemon_id);
        Ok((before - reviews.len()) as u64)
    }
}

/// An AppState wired entirely with in-memory repositories over one store
pub fn in_memory_state() -> AppState {
    let store = InMemoryStore::new();
    AppState {
        categories: Arc::new(InMemoryCategoryRepository::new(store.clone())),
        countries: Arc::new(InMemoryCountryRepository::new(store.clone())),
        owners: Arc::new(InMemoryOwnerRepository::new(store.clone())),
        pokemon: Arc::new(InMemoryPokemonRepository::new(store.clone())),
        reviewers: Arc::new(InMemoryReviewerRepository::new(store.clone())),
        reviews: Arc::new(InMemoryReviewRepository::new(store)),
    }
}
