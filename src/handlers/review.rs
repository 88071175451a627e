//! Review handlers
//!
//! Creating a review resolves both the pokemon and the reviewer first;
//! a missing reference is a 400 and nothing is persisted.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{NewReview, PokemonId, Review, ReviewId, ReviewerId};
use crate::error::{AppError, DomainError};
use crate::AppState;

use super::same_natural_key;

/// Review response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    pub id: i32,
    pub title: String,
    pub text: String,
    pub rating: i32,
    pub pokemon_id: i32,
    pub reviewer_id: i32,
}

impl From<Review> for ReviewResponse {
    fn from(r: Review) -> Self {
        ReviewResponse {
            id: r.id.0,
            title: r.title,
            text: r.text,
            rating: r.rating,
            pokemon_id: r.pokemon_id.0,
            reviewer_id: r.reviewer_id.0,
        }
    }
}

/// Request to create a review
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    pub title: String,
    pub text: String,
    pub rating: i32,
}

/// Pokemon and reviewer links resolved at creation time
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewQuery {
    pub reviewer_id: i32,
    pub pokemon_id: i32,
}

/// Request to replace a review record
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReviewRequest {
    pub id: i32,
    pub title: String,
    pub text: String,
    pub rating: i32,
    pub pokemon_id: i32,
    pub reviewer_id: i32,
}

fn validate_rating(rating: i32) -> Result<(), AppError> {
    if !(1..=5).contains(&rating) {
        return Err(AppError::BadRequest(format!(
            "Rating must be between 1 and 5, got {}",
            rating
        )));
    }
    Ok(())
}

/// GET /api/review
pub async fn list_reviews(
    State(state): State<AppState>,
) -> Result<Json<Vec<ReviewResponse>>, AppError> {
    let reviews = state.reviews.find_all().await?;

    Ok(Json(reviews.into_iter().map(Into::into).collect()))
}

/// GET /api/review/:id
pub async fn get_review(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ReviewResponse>, AppError> {
    let id = ReviewId(id);
    if !state.reviews.exists(&id).await? {
        return Err(AppError::NotFound(format!("Review {} not found", id)));
    }

    let review = state
        .reviews
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Review {} not found", id)))?;

    Ok(Json(review.into()))
}

/// GET /api/review/pokemon/:pokemonId
pub async fn list_reviews_of_pokemon(
    State(state): State<AppState>,
    Path(pokemon_id): Path<i32>,
) -> Result<Json<Vec<ReviewResponse>>, AppError> {
    let reviews = state
        .reviews
        .find_by_pokemon(&PokemonId(pokemon_id))
        .await?;

    Ok(Json(reviews.into_iter().map(Into::into).collect()))
}

/// POST /api/review?reviewerId=..&pokemonId=..
pub async fn create_review(
    State(state): State<AppState>,
    Query(query): Query<CreateReviewQuery>,
    Json(request): Json<CreateReviewRequest>,
) -> Result<Json<ReviewResponse>, AppError> {
    if request.title.trim().is_empty() {
        return Err(DomainError::Validation("Review title must not be blank".into()).into());
    }
    validate_rating(request.rating)?;

    let existing = state.reviews.find_all().await?;
    if existing
        .iter()
        .any(|r| same_natural_key(&r.title, &request.title))
    {
        return Err(DomainError::AlreadyExists(format!("Review {}", request.title.trim())).into());
    }

    let pokemon_id = PokemonId(query.pokemon_id);
    if !state.pokemon.exists(&pokemon_id).await? {
        return Err(AppError::BadRequest(format!(
            "Pokemon {} does not exist",
            pokemon_id
        )));
    }

    let reviewer_id = ReviewerId(query.reviewer_id);
    if !state.reviewers.exists(&reviewer_id).await? {
        return Err(AppError::BadRequest(format!(
            "Reviewer {} does not exist",
            reviewer_id
        )));
    }

    let created = state
        .reviews
        .create(&NewReview {
            title: request.title,
            text: request.text,
            rating: request.rating,
            pokemon_id,
            reviewer_id,
        })
        .await?;

    Ok(Json(created.into()))
}

/// PUT /api/review/:id
pub async fn update_review(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateReviewRequest>,
) -> Result<Json<ReviewResponse>, AppError> {
    if request.id != id {
        return Err(AppError::BadRequest("Id mismatch between path and body".into()));
    }

    if request.title.trim().is_empty() {
        return Err(DomainError::Validation("Review title must not be blank".into()).into());
    }
    validate_rating(request.rating)?;

    let id = ReviewId(id);
    if !state.reviews.exists(&id).await? {
        return Err(AppError::NotFound(format!("Review {} not found", id)));
    }

    // A replace can re-point the review, so both references get the same
    // checks as creation
    let pokemon_id = PokemonId(request.pokemon_id);
    if !state.pokemon.exists(&pokemon_id).await? {
        return Err(AppError::BadRequest(format!(
            "Pokemon {} does not exist",
            pokemon_id
        )));
    }

    let reviewer_id = ReviewerId(request.reviewer_id);
    if !state.reviewers.exists(&reviewer_id).await? {
        return Err(AppError::BadRequest(format!(
            "Reviewer {} does not exist",
            reviewer_id
        )));
    }

    let review = Review {
        id,
        title: request.title,
        text: request.text,
        rating: request.rating,
        pokemon_id,
        reviewer_id,
    };
    state.reviews.update(&review).await?;

    Ok(Json(review.into()))
}

/// DELETE /api/review/:id
pub async fn delete_review(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let id = ReviewId(id);
    if !state.reviews.exists(&id).await? {
        return Err(AppError::NotFound(format!("Review {} not found", id)));
    }

    state.reviews.delete(&id).await?;

    Ok(StatusCode::OK)
}
