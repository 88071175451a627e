//! PostgreSQL adapter for ReviewerRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::domain::entities::{NewReviewer, Reviewer, ReviewerId};
use crate::domain::ports::ReviewerRepository;
use crate::entity::reviewers;
use crate::error::DomainError;

/// PostgreSQL implementation of ReviewerRepository
pub struct PostgresReviewerRepository {
    db: DatabaseConnection,
}

impl PostgresReviewerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReviewerRepository for PostgresReviewerRepository {
    async fn find_all(&self) -> Result<Vec<Reviewer>, DomainError> {
        let results = reviewers::Entity::find()
            .order_by_asc(reviewers::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_id(&self, id: &ReviewerId) -> Result<Option<Reviewer>, DomainError> {
        let result = reviewers::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn exists(&self, id: &ReviewerId) -> Result<bool, DomainError> {
        let result = reviewers::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.is_some())
    }

    async fn create(&self, new: &NewReviewer) -> Result<Reviewer, DomainError> {
        let model = reviewers::ActiveModel {
            first_name: Set(new.first_name.clone()),
            last_name: Set(new.last_name.clone()),
            ..Default::default()
        };

        let created = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(created.into())
    }

    async fn update(&self, reviewer: &Reviewer) -> Result<(), DomainError> {
        reviewers::ActiveModel {
            id: Set(reviewer.id.0),
            first_name: Set(reviewer.first_name.clone()),
            last_name: Set(reviewer.last_name.clone()),
        }
        .update(&self.db)
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }

    async fn delete(&self, id: &ReviewerId) -> Result<(), DomainError> {
        reviewers::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }
}
