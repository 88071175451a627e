//! PostgreSQL adapter for OwnerRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryOrder, Set,
};

use crate::domain::entities::{NewOwner, Owner, OwnerId, PokemonId};
use crate::domain::ports::OwnerRepository;
use crate::entity::{owners, pokemon};
use crate::error::DomainError;

/// PostgreSQL implementation of OwnerRepository
pub struct PostgresOwnerRepository {
    db: DatabaseConnection,
}

impl PostgresOwnerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OwnerRepository for PostgresOwnerRepository {
    async fn find_all(&self) -> Result<Vec<Owner>, DomainError> {
        let results = owners::Entity::find()
            .order_by_asc(owners::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_id(&self, id: &OwnerId) -> Result<Option<Owner>, DomainError> {
        let result = owners::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_by_pokemon(&self, pokemon_id: &PokemonId) -> Result<Vec<Owner>, DomainError> {
        let p = pokemon::Entity::find_by_id(pokemon_id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let Some(p) = p else {
            return Ok(Vec::new());
        };

        let results = p
            .find_related(owners::Entity)
            .order_by_asc(owners::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn exists(&self, id: &OwnerId) -> Result<bool, DomainError> {
        let result = owners::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.is_some())
    }

    async fn create(&self, new: &NewOwner) -> Result<Owner, DomainError> {
        let model = owners::ActiveModel {
            first_name: Set(new.first_name.clone()),
            last_name: Set(new.last_name.clone()),
            gym: Set(new.gym.clone()),
            country_id: Set(new.country_id.0),
            ..Default::default()
        };

        let created = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(created.into())
    }

    async fn update(&self, owner: &Owner) -> Result<(), DomainError> {
        owners::ActiveModel {
            id: Set(owner.id.0),
            first_name: Set(owner.first_name.clone()),
            last_name: Set(owner.last_name.clone()),
            gym: Set(owner.gym.clone()),
            country_id: Set(owner.country_id.0),
        }
        .update(&self.db)
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }

    async fn delete(&self, id: &OwnerId) -> Result<(), DomainError> {
        owners::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }
}
