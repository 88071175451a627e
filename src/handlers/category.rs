//! Category handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Category, CategoryId, NewCategory};
use crate::error::{AppError, DomainError};
use crate::AppState;

use super::pokemon::PokemonResponse;
use super::same_natural_key;

/// Category response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub id: i32,
    pub name: String,
}

impl From<Category> for CategoryResponse {
    fn from(c: Category) -> Self {
        CategoryResponse {
            id: c.id.0,
            name: c.name,
        }
    }
}

/// Request to create a category
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryRequest {
    pub name: String,
}

/// Request to replace a category record
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategoryRequest {
    pub id: i32,
    pub name: String,
}

/// GET /api/category
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<CategoryResponse>>, AppError> {
    let categories = state.categories.find_all().await?;

    Ok(Json(categories.into_iter().map(Into::into).collect()))
}

/// GET /api/category/:id
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<CategoryResponse>, AppError> {
    let id = CategoryId(id);
    if !state.categories.exists(&id).await? {
        return Err(AppError::NotFound(format!("Category {} not found", id)));
    }

    let category = state
        .categories
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))?;

    Ok(Json(category.into()))
}

/// GET /api/category/:id/pokemon
pub async fn list_pokemon_by_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<PokemonResponse>>, AppError> {
    let id = CategoryId(id);
    if !state.categories.exists(&id).await? {
        return Err(AppError::NotFound(format!("Category {} not found", id)));
    }

    let pokemon = state.pokemon.find_by_category(&id).await?;

    Ok(Json(pokemon.into_iter().map(Into::into).collect()))
}

/// POST /api/category
pub async fn create_category(
    State(state): State<AppState>,
    Json(request): Json<CreateCategoryRequest>,
) -> Result<Json<CategoryResponse>, AppError> {
    if request.name.trim().is_empty() {
        return Err(DomainError::Validation("Category name must not be blank".into()).into());
    }

    let existing = state.categories.find_all().await?;
    if existing
        .iter()
        .any(|c| same_natural_key(&c.name, &request.name))
    {
        return Err(DomainError::AlreadyExists(format!("Category {}", request.name.trim())).into());
    }

    let created = state
        .categories
        .create(&NewCategory { name: request.name })
        .await?;

    Ok(Json(created.into()))
}

/// PUT /api/category/:id
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateCategoryRequest>,
) -> Result<Json<CategoryResponse>, AppError> {
    if request.id != id {
        return Err(AppError::BadRequest("Id mismatch between path and body".into()));
    }

    if request.name.trim().is_empty() {
        return Err(DomainError::Validation("Category name must not be blank".into()).into());
    }

    let id = CategoryId(id);
    if !state.categories.exists(&id).await? {
        return Err(AppError::NotFound(format!("Category {} not found", id)));
    }

    let category = Category {
        id,
        name: request.name,
    };
    state.categories.update(&category).await?;

    Ok(Json(category.into()))
}

/// DELETE /api/category/:id
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let id = CategoryId(id);
    if !state.categories.exists(&id).await? {
        return Err(AppError::NotFound(format!("Category {} not found", id)));
    }

    state.categories.delete(&id).await?;

    Ok(StatusCode::OK)
}
