//! PostgreSQL adapter for CategoryRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::domain::entities::{Category, CategoryId, NewCategory};
use crate::domain::ports::CategoryRepository;
use crate::entity::categories;
use crate::error::DomainError;

/// PostgreSQL implementation of CategoryRepository
pub struct PostgresCategoryRepository {
    db: DatabaseConnection,
}

impl PostgresCategoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn find_all(&self) -> Result<Vec<Category>, DomainError> {
        let results = categories::Entity::find()
            .order_by_asc(categories::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_id(&self, id: &CategoryId) -> Result<Option<Category>, DomainError> {
        let result = categories::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn exists(&self, id: &CategoryId) -> Result<bool, DomainError> {
        let result = categories::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.is_some())
    }

    async fn create(&self, new: &NewCategory) -> Result<Category, DomainError> {
        let model = categories::ActiveModel {
            name: Set(new.name.clone()),
            ..Default::default()
        };

        let created = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(created.into())
    }

    async fn update(&self, category: &Category) -> Result<(), DomainError> {
        categories::ActiveModel {
            id: Set(category.id.0),
            name: Set(category.name.clone()),
        }
        .update(&self.db)
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }

    async fn delete(&self, id: &CategoryId) -> Result<(), DomainError> {
        categories::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }
}
