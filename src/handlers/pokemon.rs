//! Pokemon handlers
//!
//! The delete endpoint cascades: reviews of the pokemon are removed first,
//! then the pokemon itself. There is no rollback if the second step fails.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{CategoryId, NewPokemon, OwnerId, Pokemon, PokemonId};
use crate::error::{AppError, DomainError};
use crate::AppState;

use super::same_natural_key;

/// Pokemon response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PokemonResponse {
    pub id: i32,
    pub name: String,
    pub birth_date: NaiveDate,
}

impl From<Pokemon> for PokemonResponse {
    fn from(p: Pokemon) -> Self {
        PokemonResponse {
            id: p.id.0,
            name: p.name,
            birth_date: p.birth_date,
        }
    }
}

/// Request to create a pokemon
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePokemonRequest {
    pub name: String,
    pub birth_date: NaiveDate,
}

/// Owner and category links established at creation time
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePokemonQuery {
    pub owner_id: i32,
    pub category_id: i32,
}

/// Request to replace a pokemon record; the id must match the path
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePokemonRequest {
    pub id: i32,
    pub name: String,
    pub birth_date: NaiveDate,
}

/// GET /api/pokemon
pub async fn list_pokemon(
    State(state): State<AppState>,
) -> Result<Json<Vec<PokemonResponse>>, AppError> {
    let pokemon = state.pokemon.find_all().await?;

    Ok(Json(pokemon.into_iter().map(Into::into).collect()))
}

/// GET /api/pokemon/:id
pub async fn get_pokemon(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<PokemonResponse>, AppError> {
    let id = PokemonId(id);
    if !state.pokemon.exists(&id).await? {
        return Err(AppError::NotFound(format!("Pokemon {} not found", id)));
    }

    let pokemon = state
        .pokemon
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Pokemon {} not found", id)))?;

    Ok(Json(pokemon.into()))
}

/// GET /api/pokemon/:id/rating
///
/// Average of the pokemon's review ratings, 0 when it has none.
pub async fn get_pokemon_rating(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<f64>, AppError> {
    let id = PokemonId(id);
    if !state.pokemon.exists(&id).await? {
        return Err(AppError::NotFound(format!("Pokemon {} not found", id)));
    }

    let rating = state.pokemon.rating(&id).await?;

    Ok(Json(rating))
}

/// POST /api/pokemon?ownerId=..&categoryId=..
pub async fn create_pokemon(
    State(state): State<AppState>,
    Query(query): Query<CreatePokemonQuery>,
    Json(request): Json<CreatePokemonRequest>,
) -> Result<Json<PokemonResponse>, AppError> {
    if request.name.trim().is_empty() {
        return Err(DomainError::Validation("Pokemon name must not be blank".into()).into());
    }

    let existing = state.pokemon.find_all().await?;
    if existing
        .iter()
        .any(|p| same_natural_key(&p.name, &request.name))
    {
        return Err(DomainError::AlreadyExists(format!("Pokemon {}", request.name.trim())).into());
    }

    let owner_id = OwnerId(query.owner_id);
    if !state.owners.exists(&owner_id).await? {
        return Err(AppError::BadRequest(format!(
            "Owner {} does not exist",
            owner_id
        )));
    }

    let category_id = CategoryId(query.category_id);
    if !state.categories.exists(&category_id).await? {
        return Err(AppError::BadRequest(format!(
            "Category {} does not exist",
            category_id
        )));
    }

    let created = state
        .pokemon
        .create(
            &owner_id,
            &category_id,
            &NewPokemon {
                name: request.name,
                birth_date: request.birth_date,
            },
        )
        .await?;

    Ok(Json(created.into()))
}

/// PUT /api/pokemon/:id
pub async fn update_pokemon(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdatePokemonRequest>,
) -> Result<Json<PokemonResponse>, AppError> {
    if request.id != id {
        return Err(AppError::BadRequest("Id mismatch between path and body".into()));
    }

    if request.name.trim().is_empty() {
        return Err(DomainError::Validation("Pokemon name must not be blank".into()).into());
    }

    let id = PokemonId(id);
    if !state.pokemon.exists(&id).await? {
        return Err(AppError::NotFound(format!("Pokemon {} not found", id)));
    }

    let pokemon = Pokemon {
        id,
        name: request.name,
        birth_date: request.birth_date,
    };
    state.pokemon.update(&pokemon).await?;

    Ok(Json(pokemon.into()))
}

/// DELETE /api/pokemon/:id
///
/// Removes the pokemon's reviews first, then the pokemon.
pub async fn delete_pokemon(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let id = PokemonId(id);
    if !state.pokemon.exists(&id).await? {
        return Err(AppError::NotFound(format!("Pokemon {} not found", id)));
    }

    let removed = state.reviews.delete_for_pokemon(&id).await?;
    if removed > 0 {
        tracing::debug!("Removed {} reviews of pokemon {}", removed, id);
    }

    state.pokemon.delete(&id).await?;

    Ok(StatusCode::OK)
}
