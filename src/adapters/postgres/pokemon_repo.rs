//! PostgreSQL adapter for PokemonRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::domain::entities::{CategoryId, NewPokemon, OwnerId, Pokemon, PokemonId};
use crate::domain::ports::PokemonRepository;
use crate::entity::{categories, owners, pokemon, pokemon_categories, pokemon_owners, reviews};
use crate::error::DomainError;

/// PostgreSQL implementation of PokemonRepository
pub struct PostgresPokemonRepository {
    db: DatabaseConnection,
}

impl PostgresPokemonRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PokemonRepository for PostgresPokemonRepository {
    async fn find_all(&self) -> Result<Vec<Pokemon>, DomainError> {
        let results = pokemon::Entity::find()
            .order_by_asc(pokemon::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_id(&self, id: &PokemonId) -> Result<Option<Pokemon>, DomainError> {
        let result = pokemon::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_by_owner(&self, owner_id: &OwnerId) -> Result<Vec<Pokemon>, DomainError> {
        let owner = owners::Entity::find_by_id(owner_id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let Some(owner) = owner else {
            return Ok(Vec::new());
        };

        let results = owner
            .find_related(pokemon::Entity)
            .order_by_asc(pokemon::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_category(
        &self,
        category_id: &CategoryId,
    ) -> Result<Vec<Pokemon>, DomainError> {
        let category = categories::Entity::find_by_id(category_id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let Some(category) = category else {
            return Ok(Vec::new());
        };

        let results = category
            .find_related(pokemon::Entity)
            .order_by_asc(pokemon::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn rating(&self, id: &PokemonId) -> Result<f64, DomainError> {
        let ratings: Vec<i32> = reviews::Entity::find()
            .filter(reviews::Column::PokemonId.eq(id.0))
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?
            .into_iter()
            .map(|r| r.rating)
            .collect();

        if ratings.is_empty() {
            return Ok(0.0);
        }

        Ok(ratings.iter().sum::<i32>() as f64 / ratings.len() as f64)
    }

    async fn exists(&self, id: &PokemonId) -> Result<bool, DomainError> {
        let result = pokemon::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.is_some())
    }

    async fn create(
        &self,
        owner_id: &OwnerId,
        category_id: &CategoryId,
        new: &NewPokemon,
    ) -> Result<Pokemon, DomainError> {
        let model = pokemon::ActiveModel {
            name: Set(new.name.clone()),
            birth_date: Set(new.birth_date),
            ..Default::default()
        };

        let created = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        pokemon_owners::ActiveModel {
            owner_id: Set(owner_id.0),
            pokemon_id: Set(created.id),
        }
        .insert(&self.db)
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

        pokemon_categories::ActiveModel {
            pokemon_id: Set(created.id),
            category_id: Set(category_id.0),
        }
        .insert(&self.db)
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(created.into())
    }

    async fn update(&self, p: &Pokemon) -> Result<(), DomainError> {
        pokemon::ActiveModel {
            id: Set(p.id.0),
            name: Set(p.name.clone()),
            birth_date: Set(p.birth_date),
        }
        .update(&self.db)
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }

    async fn delete(&self, id: &PokemonId) -> Result<(), DomainError> {
        // Join rows go with it (ON DELETE CASCADE); reviews are the
        // caller's responsibility
        pokemon::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }
}
