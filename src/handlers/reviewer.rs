//! Reviewer handlers
//!
//! The single-reviewer endpoint embeds the reviewer's reviews, the one
//! derived representation in the mapping layer. The delete endpoint answers
//! 204 where every other entity answers 200; the original contract shipped
//! that inconsistency and clients depend on it.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{NewReviewer, Reviewer, ReviewerId};
use crate::error::{AppError, DomainError};
use crate::AppState;

use super::review::ReviewResponse;

/// Reviewer response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewerResponse {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

impl From<Reviewer> for ReviewerResponse {
    fn from(r: Reviewer) -> Self {
        ReviewerResponse {
            id: r.id.0,
            first_name: r.first_name,
            last_name: r.last_name,
        }
    }
}

/// Reviewer response with embedded reviews
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewerWithReviewsResponse {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub reviews: Vec<ReviewResponse>,
}

/// Request to create a reviewer
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewerRequest {
    pub first_name: String,
    pub last_name: String,
}

/// Request to replace a reviewer record
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReviewerRequest {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

/// GET /api/reviewer
pub async fn list_reviewers(
    State(state): State<AppState>,
) -> Result<Json<Vec<ReviewerResponse>>, AppError> {
    let reviewers = state.reviewers.find_all().await?;

    Ok(Json(reviewers.into_iter().map(Into::into).collect()))
}

/// GET /api/reviewer/:id
pub async fn get_reviewer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ReviewerWithReviewsResponse>, AppError> {
    let id = ReviewerId(id);
    if !state.reviewers.exists(&id).await? {
        return Err(AppError::NotFound(format!("Reviewer {} not found", id)));
    }

    let reviewer = state
        .reviewers
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Reviewer {} not found", id)))?;

    let reviews = state.reviews.find_by_reviewer(&id).await?;

    Ok(Json(ReviewerWithReviewsResponse {
        id: reviewer.id.0,
        first_name: reviewer.first_name,
        last_name: reviewer.last_name,
        reviews: reviews.into_iter().map(Into::into).collect(),
    }))
}

/// GET /api/reviewer/:id/reviews
pub async fn list_reviews_by_reviewer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<ReviewResponse>>, AppError> {
    let id = ReviewerId(id);
    if !state.reviewers.exists(&id).await? {
        return Err(AppError::NotFound(format!("Reviewer {} not found", id)));
    }

    let reviews = state.reviews.find_by_reviewer(&id).await?;

    Ok(Json(reviews.into_iter().map(Into::into).collect()))
}

/// POST /api/reviewer
pub async fn create_reviewer(
    State(state): State<AppState>,
    Json(request): Json<CreateReviewerRequest>,
) -> Result<Json<ReviewerResponse>, AppError> {
    if request.first_name.trim().is_empty() || request.last_name.trim().is_empty() {
        return Err(DomainError::Validation("Reviewer name must not be blank".into()).into());
    }

    let created = state
        .reviewers
        .create(&NewReviewer {
            first_name: request.first_name,
            last_name: request.last_name,
        })
        .await?;

    Ok(Json(created.into()))
}

/// PUT /api/reviewer/:id
pub async fn update_reviewer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateReviewerRequest>,
) -> Result<Json<ReviewerResponse>, AppError> {
    if request.id != id {
        return Err(AppError::BadRequest("Id mismatch between path and body".into()));
    }

    if request.first_name.trim().is_empty() || request.last_name.trim().is_empty() {
        return Err(DomainError::Validation("Reviewer name must not be blank".into()).into());
    }

    let id = ReviewerId(id);
    if !state.reviewers.exists(&id).await? {
        return Err(AppError::NotFound(format!("Reviewer {} not found", id)));
    }

    let reviewer = Reviewer {
        id,
        first_name: request.first_name,
        last_name: request.last_name,
    };
    state.reviewers.update(&reviewer).await?;

    Ok(Json(reviewer.into()))
}

/// DELETE /api/reviewer/:id
pub async fn delete_reviewer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let id = ReviewerId(id);
    if !state.reviewers.exists(&id).await? {
        return Err(AppError::NotFound(format!("Reviewer {} not found", id)));
    }

    state.reviewers.delete(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}
