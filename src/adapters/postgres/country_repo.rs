//! PostgreSQL adapter for CountryRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::domain::entities::{Country, CountryId, NewCountry, Owner, OwnerId};
use crate::domain::ports::CountryRepository;
use crate::entity::{countries, owners};
use crate::error::DomainError;

/// PostgreSQL implementation of CountryRepository
pub struct PostgresCountryRepository {
    db: DatabaseConnection,
}

impl PostgresCountryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CountryRepository for PostgresCountryRepository {
    async fn find_all(&self) -> Result<Vec<Country>, DomainError> {
        let results = countries::Entity::find()
            .order_by_asc(countries::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_id(&self, id: &CountryId) -> Result<Option<Country>, DomainError> {
        let result = countries::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_by_owner(&self, owner_id: &OwnerId) -> Result<Option<Country>, DomainError> {
        let owner = owners::Entity::find_by_id(owner_id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let Some(owner) = owner else {
            return Ok(None);
        };

        let result = owner
            .find_related(countries::Entity)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn owners(&self, id: &CountryId) -> Result<Vec<Owner>, DomainError> {
        let results = owners::Entity::find()
            .filter(owners::Column::CountryId.eq(id.0))
            .order_by_asc(owners::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn exists(&self, id: &CountryId) -> Result<bool, DomainError> {
        let result = countries::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.is_some())
    }

    async fn create(&self, new: &NewCountry) -> Result<Country, DomainError> {
        let model = countries::ActiveModel {
            name: Set(new.name.clone()),
            ..Default::default()
        };

        let created = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(created.into())
    }

    async fn update(&self, country: &Country) -> Result<(), DomainError> {
        countries::ActiveModel {
            id: Set(country.id.0),
            name: Set(country.name.clone()),
        }
        .update(&self.db)
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }

    async fn delete(&self, id: &CountryId) -> Result<(), DomainError> {
        countries::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }
}
