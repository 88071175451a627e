//! Owner handlers
//!
//! Duplicate detection for owners keys on the last name, as the original
//! contract does.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{CountryId, NewOwner, Owner, OwnerId, PokemonId};
use crate::error::{AppError, DomainError};
use crate::AppState;

use super::pokemon::PokemonResponse;
use super::same_natural_key;

/// Owner response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerResponse {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub gym: String,
    pub country_id: i32,
}

impl From<Owner> for OwnerResponse {
    fn from(o: Owner) -> Self {
        OwnerResponse {
            id: o.id.0,
            first_name: o.first_name,
            last_name: o.last_name,
            gym: o.gym,
            country_id: o.country_id.0,
        }
    }
}

/// Request to create an owner
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOwnerRequest {
    pub first_name: String,
    pub last_name: String,
    pub gym: String,
}

/// Country link established at creation time
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOwnerQuery {
    pub country_id: i32,
}

/// Request to replace an owner record
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOwnerRequest {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub gym: String,
    pub country_id: i32,
}

/// GET /api/owner
pub async fn list_owners(
    State(state): State<AppState>,
) -> Result<Json<Vec<OwnerResponse>>, AppError> {
    let owners = state.owners.find_all().await?;

    Ok(Json(owners.into_iter().map(Into::into).collect()))
}

/// GET /api/owner/:id
pub async fn get_owner(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<OwnerResponse>, AppError> {
    let id = OwnerId(id);
    if !state.owners.exists(&id).await? {
        return Err(AppError::NotFound(format!("Owner {} not found", id)));
    }

    let owner = state
        .owners
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Owner {} not found", id)))?;

    Ok(Json(owner.into()))
}

/// GET /api/owner/:id/pokemon
pub async fn list_pokemon_by_owner(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<PokemonResponse>>, AppError> {
    let id = OwnerId(id);
    if !state.owners.exists(&id).await? {
        return Err(AppError::NotFound(format!("Owner {} not found", id)));
    }

    let pokemon = state.pokemon.find_by_owner(&id).await?;

    Ok(Json(pokemon.into_iter().map(Into::into).collect()))
}

/// GET /api/owner/pokemon/:pokemonId
///
/// Owners holding a given pokemon.
pub async fn list_owners_of_pokemon(
    State(state): State<AppState>,
    Path(pokemon_id): Path<i32>,
) -> Result<Json<Vec<OwnerResponse>>, AppError> {
    let owners = state.owners.find_by_pokemon(&PokemonId(pokemon_id)).await?;

    Ok(Json(owners.into_iter().map(Into::into).collect()))
}

/// POST /api/owner?countryId=..
pub async fn create_owner(
    State(state): State<AppState>,
    Query(query): Query<CreateOwnerQuery>,
    Json(request): Json<CreateOwnerRequest>,
) -> Result<Json<OwnerResponse>, AppError> {
    if request.last_name.trim().is_empty() {
        return Err(DomainError::Validation("Owner last name must not be blank".into()).into());
    }

    let existing = state.owners.find_all().await?;
    if existing
        .iter()
        .any(|o| same_natural_key(&o.last_name, &request.last_name))
    {
        return Err(
            DomainError::AlreadyExists(format!("Owner {}", request.last_name.trim())).into(),
        );
    }

    let country_id = CountryId(query.country_id);
    if !state.countries.exists(&country_id).await? {
        return Err(AppError::BadRequest(format!(
            "Country {} does not exist",
            country_id
        )));
    }

    let created = state
        .owners
        .create(&NewOwner {
            first_name: request.first_name,
            last_name: request.last_name,
            gym: request.gym,
            country_id,
        })
        .await?;

    Ok(Json(created.into()))
}

/// PUT /api/owner/:id
pub async fn update_owner(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateOwnerRequest>,
) -> Result<Json<OwnerResponse>, AppError> {
    if request.id != id {
        return Err(AppError::BadRequest("Id mismatch between path and body".into()));
    }

    if request.last_name.trim().is_empty() {
        return Err(DomainError::Validation("Owner last name must not be blank".into()).into());
    }

    let id = OwnerId(id);
    if !state.owners.exists(&id).await? {
        return Err(AppError::NotFound(format!("Owner {} not found", id)));
    }

    let country_id = CountryId(request.country_id);
    if !state.countries.exists(&country_id).await? {
        return Err(AppError::BadRequest(format!(
            "Country {} does not exist",
            country_id
        )));
    }

    let owner = Owner {
        id,
        first_name: request.first_name,
        last_name: request.last_name,
        gym: request.gym,
        country_id,
    };
    state.owners.update(&owner).await?;

    Ok(Json(owner.into()))
}

/// DELETE /api/owner/:id
pub async fn delete_owner(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let id = OwnerId(id);
    if !state.owners.exists(&id).await? {
        return Err(AppError::NotFound(format!("Owner {} not found", id)));
    }

    state.owners.delete(&id).await?;

    Ok(StatusCode::OK)
}
