//! PostgreSQL adapter for ReviewRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::domain::entities::{NewReview, PokemonId, Review, ReviewId, ReviewerId};
use crate::domain::ports::ReviewRepository;
use crate::entity::reviews;
use crate::error::DomainError;

/// PostgreSQL implementation of ReviewRepository
pub struct PostgresReviewRepository {
    db: DatabaseConnection,
}

impl PostgresReviewRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReviewRepository for PostgresReviewRepository {
    async fn find_all(&self) -> Result<Vec<Review>, DomainError> {
        let results = reviews::Entity::find()
            .order_by_asc(reviews::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_id(&self, id: &ReviewId) -> Result<Option<Review>, DomainError> {
        let result = reviews::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_by_pokemon(&self, pokemon_id: &PokemonId) -> Result<Vec<Review>, DomainError> {
        let results = reviews::Entity::find()
            .filter(reviews::Column::PokemonId.eq(pokemon_id.0))
            .order_by_asc(reviews::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_reviewer(
        &self,
        reviewer_id: &ReviewerId,
    ) -> Result<Vec<Review>, DomainError> {
        let results = reviews::Entity::find()
            .filter(reviews::Column::ReviewerId.eq(reviewer_id.0))
            .order_by_asc(reviews::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn exists(&self, id: &ReviewId) -> Result<bool, DomainError> {
        let result = reviews::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.is_some())
    }

    async fn create(&self, new: &NewReview) -> Result<Review, DomainError> {
        let model = reviews::ActiveModel {
            title: Set(new.title.clone()),
            text: Set(new.text.clone()),
            rating: Set(new.rating),
            pokemon_id: Set(new.pokemon_id.0),
            reviewer_id: Set(new.reviewer_id.0),
            ..Default::default()
        };

        let created = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(created.into())
    }

    async fn update(&self, review: &Review) -> Result<(), DomainError> {
        reviews::ActiveModel {
            id: Set(review.id.0),
            title: Set(review.title.clone()),
            text: Set(review.text.clone()),
            rating: Set(review.rating),
            pokemon_id: Set(review.pokemon_id.0),
            reviewer_id: Set(review.reviewer_id.0),
        }
        .update(&self.db)
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }

    async fn delete(&self, id: &ReviewId) -> Result<(), DomainError> {
        reviews::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }

    async fn delete_for_pokemon(&self, pokemon_id: &PokemonId) -> Result<u64, DomainError> {
        let result = reviews::Entity::delete_many()
            .filter(reviews::Column::PokemonId.eq(pokemon_id.0))
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.rows_affected)
    }
}
