//! Country handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Country, CountryId, NewCountry, OwnerId};
use crate::error::{AppError, DomainError};
use crate::AppState;

use super::owner::OwnerResponse;
use super::same_natural_key;

/// Country response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryResponse {
    pub id: i32,
    pub name: String,
}

impl From<Country> for CountryResponse {
    fn from(c: Country) -> Self {
        CountryResponse {
            id: c.id.0,
            name: c.name,
        }
    }
}

/// Request to create a country
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCountryRequest {
    pub name: String,
}

/// Request to replace a country record
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCountryRequest {
    pub id: i32,
    pub name: String,
}

/// GET /api/country
pub async fn list_countries(
    State(state): State<AppState>,
) -> Result<Json<Vec<CountryResponse>>, AppError> {
    let countries = state.countries.find_all().await?;

    Ok(Json(countries.into_iter().map(Into::into).collect()))
}

/// GET /api/country/:id
pub async fn get_country(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<CountryResponse>, AppError> {
    let id = CountryId(id);
    if !state.countries.exists(&id).await? {
        return Err(AppError::NotFound(format!("Country {} not found", id)));
    }

    let country = state
        .countries
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Country {} not found", id)))?;

    Ok(Json(country.into()))
}

/// GET /api/country/owners/:ownerId
///
/// The country an owner belongs to.
pub async fn get_country_of_owner(
    State(state): State<AppState>,
    Path(owner_id): Path<i32>,
) -> Result<Json<CountryResponse>, AppError> {
    let owner_id = OwnerId(owner_id);
    let country = state
        .countries
        .find_by_owner(&owner_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No country for owner {}", owner_id)))?;

    Ok(Json(country.into()))
}

/// GET /api/country/:id/owners
pub async fn list_owners_from_country(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<OwnerResponse>>, AppError> {
    let id = CountryId(id);
    if !state.countries.exists(&id).await? {
        return Err(AppError::NotFound(format!("Country {} not found", id)));
    }

    let owners = state.countries.owners(&id).await?;

    Ok(Json(owners.into_iter().map(Into::into).collect()))
}

/// POST /api/country
pub async fn create_country(
    State(state): State<AppState>,
    Json(request): Json<CreateCountryRequest>,
) -> Result<Json<CountryResponse>, AppError> {
    if request.name.trim().is_empty() {
        return Err(DomainError::Validation("Country name must not be blank".into()).into());
    }

    let existing = state.countries.find_all().await?;
    if existing
        .iter()
        .any(|c| same_natural_key(&c.name, &request.name))
    {
        return Err(DomainError::AlreadyExists(format!("Country {}", request.name.trim())).into());
    }

    let created = state
        .countries
        .create(&NewCountry { name: request.name })
        .await?;

    Ok(Json(created.into()))
}

/// PUT /api/country/:id
pub async fn update_country(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateCountryRequest>,
) -> Result<Json<CountryResponse>, AppError> {
    if request.id != id {
        return Err(AppError::BadRequest("Id mismatch between path and body".into()));
    }

    if request.name.trim().is_empty() {
        return Err(DomainError::Validation("Country name must not be blank".into()).into());
    }

    let id = CountryId(id);
    if !state.countries.exists(&id).await? {
        return Err(AppError::NotFound(format!("Country {} not found", id)));
    }

    let country = Country {
        id,
        name: request.name,
    };
    state.countries.update(&country).await?;

    Ok(Json(country.into()))
}

/// DELETE /api/country/:id
pub async fn delete_country(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let id = CountryId(id);
    if !state.countries.exists(&id).await? {
        return Err(AppError::NotFound(format!("Country {} not found", id)));
    }

    state.countries.delete(&id).await?;

    Ok(StatusCode::OK)
}
